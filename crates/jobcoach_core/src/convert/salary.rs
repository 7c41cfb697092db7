//! Salary normalizer: display string <-> canonical annual gross.
//!
//! # Responsibility
//! - Convert typed amounts in a display unit to canonical annual gross.
//! - Render canonical amounts back in any display unit.
//!
//! # Invariants
//! - `0` is the canonical "unset" value and renders as an empty string.
//! - NaN maps to `0`; amounts beyond `u64::MAX` saturate to `u64::MAX`.
//! - Changing unit never changes the canonical amount.

use crate::convert::locale::{clean_input, format_fr, parse_cleaned};
use crate::model::salary_unit::SalaryUnit;
use log::debug;

/// Outcome of parsing one raw input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedSalary {
    /// Canonical annual gross amount, `0` when unset or unreadable.
    pub canonical: u64,
    /// `true` when characters were stripped from the raw input.
    pub was_cleaned: bool,
}

/// Renders a canonical amount in `unit`.
///
/// `None` and `0` both mean "no preference" and render as `""`.
pub fn to_display_string(canonical: Option<u64>, unit: SalaryUnit) -> String {
    match canonical {
        None | Some(0) => String::new(),
        Some(value) => format_fr(value as f64 / unit.factor()),
    }
}

/// Parses a raw typed string in `unit` into a canonical annual gross amount.
pub fn parse_input(raw: &str, unit: SalaryUnit) -> u64 {
    parse_input_detailed(raw, unit).canonical
}

/// Same as [`parse_input`], also reporting whether the input was cleaned.
pub fn parse_input_detailed(raw: &str, unit: SalaryUnit) -> ParsedSalary {
    let cleaned = clean_input(raw);
    let was_cleaned = cleaned != raw;
    if was_cleaned {
        debug!(
            "event=salary_parse module=convert status=cleaned unit={} raw_len={} clean_len={}",
            unit,
            raw.chars().count(),
            cleaned.chars().count()
        );
    }

    let canonical = parse_cleaned(&cleaned)
        .map(|amount| to_canonical(amount, unit))
        .unwrap_or(0);

    ParsedSalary {
        canonical,
        was_cleaned,
    }
}

/// Re-expresses `canonical` under `new_unit`.
///
/// Returns the unchanged canonical amount with its new display string.
pub fn change_unit(canonical: u64, old_unit: SalaryUnit, new_unit: SalaryUnit) -> (u64, String) {
    debug!(
        "event=salary_unit_change module=convert status=ok from={} to={}",
        old_unit, new_unit
    );
    (canonical, to_display_string(Some(canonical), new_unit))
}

fn to_canonical(amount: f64, unit: SalaryUnit) -> u64 {
    let gross = (amount * unit.factor()).round();
    if gross.is_nan() {
        return 0;
    }
    // Saturates at u64::MAX, infinity included.
    gross as u64
}

#[cfg(test)]
mod tests {
    use super::{change_unit, parse_input, parse_input_detailed, to_display_string};
    use crate::model::salary_unit::SalaryUnit;

    #[test]
    fn monthly_net_with_decimal_comma() {
        assert_eq!(parse_input("2 000,50", SalaryUnit::MonthlyNet), 30008);
    }

    #[test]
    fn hourly_net_integer() {
        assert_eq!(parse_input("15", SalaryUnit::HourlyNet), 34125);
    }

    #[test]
    fn garbage_input_is_unset() {
        let parsed = parse_input_detailed("abc", SalaryUnit::AnnualGross);
        assert_eq!(parsed.canonical, 0);
        assert!(parsed.was_cleaned);
        assert_eq!(to_display_string(Some(parsed.canonical), SalaryUnit::AnnualGross), "");
    }

    #[test]
    fn lone_separator_is_unset() {
        assert_eq!(parse_input(",", SalaryUnit::MonthlyNet), 0);
        assert_eq!(parse_input(".", SalaryUnit::HourlyNet), 0);
    }

    #[test]
    fn overlong_digit_run_saturates() {
        let raw = "9".repeat(400);
        assert_eq!(parse_input(&raw, SalaryUnit::AnnualGross), u64::MAX);
    }

    #[test]
    fn display_divides_by_factor() {
        assert_eq!(
            to_display_string(Some(30000), SalaryUnit::MonthlyNet),
            "2\u{a0}000"
        );
        assert_eq!(to_display_string(Some(34125), SalaryUnit::HourlyNet), "15");
        assert_eq!(to_display_string(None, SalaryUnit::HourlyNet), "");
    }

    #[test]
    fn change_unit_keeps_canonical() {
        let (value, display) = change_unit(45000, SalaryUnit::AnnualGross, SalaryUnit::MonthlyNet);
        assert_eq!(value, 45000);
        assert_eq!(display, "3\u{a0}000");
    }
}
