//! French number formatting and input cleaning.
//!
//! # Invariants
//! - Output uses U+00A0 for digit grouping and `,` as decimal separator.
//! - At most `MAX_FRACTION_DIGITS` fraction digits are rendered, trailing
//!   zeros dropped.
//! - Every string produced by `format_fr` survives `clean_input` unchanged.

use once_cell::sync::Lazy;
use regex::Regex;

/// Thousands separator of the `fr` locale.
pub const GROUPING_SEPARATOR: char = '\u{a0}';
pub const DECIMAL_SEPARATOR: char = ',';
pub const MAX_FRACTION_DIGITS: usize = 3;

static DISALLOWED_CHARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("[^0-9,.\u{a0}]").expect("valid disallowed chars regex"));
static LEADING_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)").expect("valid number regex"));

/// Formats a non-negative amount the way the `fr` locale displays it.
pub fn format_fr(value: f64) -> String {
    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = group_digits(int_part);
    if !frac_part.is_empty() {
        out.push(DECIMAL_SEPARATOR);
        out.push_str(frac_part);
    }
    out
}

/// Removes every character that cannot belong to a localized amount.
pub fn clean_input(raw: &str) -> String {
    DISALLOWED_CHARS_RE.replace_all(raw, "").into_owned()
}

/// Parses a cleaned amount string to a float.
///
/// Grouping separators are dropped and the first `,` becomes the decimal
/// point; the longest leading decimal number is then read, so `1.2.3` reads
/// as `1.2`. Returns `None` when no digit leads the string.
pub fn parse_cleaned(cleaned: &str) -> Option<f64> {
    let normalized = cleaned
        .replace(GROUPING_SEPARATOR, "")
        .replacen(DECIMAL_SEPARATOR, ".", 1);
    let number = LEADING_NUMBER_RE.find(&normalized)?;
    number.as_str().parse::<f64>().ok()
}

fn group_digits(digits: &str) -> String {
    let len = digits.chars().count();
    let mut out = String::with_capacity(digits.len() + len / 3 * 2);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            out.push(GROUPING_SEPARATOR);
        }
        out.push(digit);
    }
    out
}
