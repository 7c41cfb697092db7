//! Salary value conversion between display strings and canonical amounts.
//!
//! # Responsibility
//! - Parse user-typed salary strings in any display unit.
//! - Render canonical annual gross amounts in a chosen display unit.
//!
//! # Invariants
//! - Conversion never fails; malformed input degrades to `0` (unset).
//! - Formatting is deterministic for a given `(value, unit)` pair.

pub mod locale;
pub mod salary;
