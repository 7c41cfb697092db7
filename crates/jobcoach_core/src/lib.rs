//! Core onboarding logic for the job-search coach.
//! Salary normalization, unit preferences and the criteria step live here.

pub mod convert;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use convert::salary::{
    change_unit, parse_input, parse_input_detailed, to_display_string, ParsedSalary,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::criteria::{
    CriteriaSubmission, EmploymentType, Workload, EMPLOYMENT_TYPE_OPTIONS, WORKLOAD_OPTIONS,
};
pub use model::salary_unit::{SalaryUnit, UnknownSalaryUnit, SALARY_UNITS};
pub use repo::preference_repo::{
    InMemoryPreferenceStore, SqlitePreferenceStore, StoreError, StoreResult, UnitPreferenceStore,
};
pub use service::criteria_step::{
    CriteriaStep, CriteriaValidationError, FastForward, DEFAULT_MIN_SALARY,
};
pub use service::salary_input::{unit_options, SalaryInput};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
