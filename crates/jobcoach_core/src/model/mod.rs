//! Domain model for the new-project onboarding criteria.
//!
//! # Responsibility
//! - Define salary units and the conversion policy they carry.
//! - Define the employment criteria collected by the onboarding step.
//!
//! # Invariants
//! - Salaries are stored once, as annual gross; units are display views.
//! - Enum wire names match the profile/project schema.

pub mod criteria;
pub mod salary_unit;
