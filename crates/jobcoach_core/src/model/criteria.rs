//! Employment criteria collected by the new-project "criteria" step.
//!
//! # Invariants
//! - `min_salary` is canonical annual gross; `0` means no preference.
//! - A submission always carries at least one employment type and one workload.

use serde::{Deserialize, Serialize};

/// Contract kinds a job seeker accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentType {
    /// Permanent contract.
    Cdi,
    #[serde(rename = "CDD_OVER_3_MONTHS")]
    CddOver3Months,
    #[serde(rename = "CDD_LESS_EQUAL_3_MONTHS")]
    CddLessEqual3Months,
    Interim,
    Internship,
}

impl EmploymentType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Cdi => "CDI",
            Self::CddOver3Months => "CDD de plus de 3 mois",
            Self::CddLessEqual3Months => "CDD de 3 mois ou moins",
            Self::Interim => "Intérim",
            Self::Internship => "Stage",
        }
    }
}

/// Checkbox order for the employment type list.
pub const EMPLOYMENT_TYPE_OPTIONS: [EmploymentType; 5] = [
    EmploymentType::Cdi,
    EmploymentType::CddOver3Months,
    EmploymentType::CddLessEqual3Months,
    EmploymentType::Interim,
    EmploymentType::Internship,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Workload {
    FullTime,
    PartTime,
}

impl Workload {
    pub fn label(self) -> &'static str {
        match self {
            Self::FullTime => "Temps plein",
            Self::PartTime => "Temps partiel",
        }
    }
}

pub const WORKLOAD_OPTIONS: [Workload; 2] = [Workload::FullTime, Workload::PartTime];

/// Validated payload handed to the project on step submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriteriaSubmission {
    pub employment_types: Vec<EmploymentType>,
    pub workloads: Vec<Workload>,
    /// Annual gross; `0` when left empty.
    pub min_salary: u64,
}
