//! Salary display units and conversion policy.
//!
//! # Responsibility
//! - Define the closed set of units a salary can be expressed in.
//! - Own the policy constants mapping each unit to annual gross.
//!
//! # Invariants
//! - `SalaryUnit::AnnualGross.factor() == 1.0`.
//! - Net units derive from `NET_TO_GROSS_RATIO` and calendar constants only.
//! - Wire names match the user profile schema (`ANNUAL_GROSS_SALARY`, ...).

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Net salary is 80% of gross salary.
pub const NET_TO_GROSS_RATIO: f64 = 0.8;
pub const WEEKS_PER_YEAR: f64 = 52.0;
/// Legal full-time working week.
pub const HOURS_PER_WEEK: f64 = 35.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Unit a salary amount is displayed and typed in.
///
/// The canonical stored amount is always annual gross; other units are views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SalaryUnit {
    #[default]
    #[serde(rename = "ANNUAL_GROSS_SALARY")]
    AnnualGross,
    #[serde(rename = "MONTHLY_NET_SALARY")]
    MonthlyNet,
    #[serde(rename = "HOURLY_NET_SALARY")]
    HourlyNet,
}

/// Units in selector order.
pub const SALARY_UNITS: [SalaryUnit; 3] = [
    SalaryUnit::AnnualGross,
    SalaryUnit::MonthlyNet,
    SalaryUnit::HourlyNet,
];

impl SalaryUnit {
    /// Multiplier turning an amount in this unit into annual gross.
    pub fn factor(self) -> f64 {
        match self {
            Self::AnnualGross => 1.0,
            Self::MonthlyNet => MONTHS_PER_YEAR / NET_TO_GROSS_RATIO,
            Self::HourlyNet => WEEKS_PER_YEAR * HOURS_PER_WEEK / NET_TO_GROSS_RATIO,
        }
    }

    /// Stable wire name, as stored in the profile preference.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AnnualGross => "ANNUAL_GROSS_SALARY",
            Self::MonthlyNet => "MONTHLY_NET_SALARY",
            Self::HourlyNet => "HOURLY_NET_SALARY",
        }
    }

    /// Selector label shown next to the amount field.
    pub fn label(self) -> &'static str {
        match self {
            Self::AnnualGross => "brut par an",
            Self::MonthlyNet => "net par mois",
            Self::HourlyNet => "net par heure",
        }
    }
}

impl Display for SalaryUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a string is not a known salary unit wire name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSalaryUnit(pub String);

impl Display for UnknownSalaryUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown salary unit `{}`", self.0)
    }
}

impl Error for UnknownSalaryUnit {}

impl FromStr for SalaryUnit {
    type Err = UnknownSalaryUnit;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        SALARY_UNITS
            .into_iter()
            .find(|unit| unit.as_str() == value.trim())
            .ok_or_else(|| UnknownSalaryUnit(value.to_string()))
    }
}
