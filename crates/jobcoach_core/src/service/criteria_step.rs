//! New-project "criteria" onboarding step.
//!
//! # Responsibility
//! - Hold the employment types, workloads and minimum salary being edited.
//! - Validate the step before it can be submitted.
//! - Prefill sensible defaults on fast-forward.
//!
//! # Invariants
//! - A step is valid iff it has at least one employment type and one workload.
//! - Missing-criteria feedback is only shown after a submit attempt.

use crate::model::criteria::{CriteriaSubmission, EmploymentType, Workload};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum salary prefilled by fast-forward, in annual gross.
pub const DEFAULT_MIN_SALARY: u64 = 21_500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriteriaValidationError {
    MissingEmploymentTypes,
    MissingWorkloads,
}

impl Display for CriteriaValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingEmploymentTypes => write!(f, "at least one employment type is required"),
            Self::MissingWorkloads => write!(f, "at least one workload is required"),
        }
    }
}

impl Error for CriteriaValidationError {}

/// Result of a fast-forward request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FastForward {
    /// The step was already valid and got submitted.
    Submitted(CriteriaSubmission),
    /// Empty fields were filled with defaults; nothing was submitted.
    Prefilled,
}

/// Editable state of the criteria step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CriteriaStep {
    pub employment_types: Vec<EmploymentType>,
    pub workloads: Vec<Workload>,
    /// Annual gross, `0` when left empty.
    pub min_salary: u64,
    is_validated: bool,
}

impl CriteriaStep {
    pub fn new(
        employment_types: Vec<EmploymentType>,
        workloads: Vec<Workload>,
        min_salary: u64,
    ) -> Self {
        Self {
            employment_types,
            workloads,
            min_salary,
            is_validated: false,
        }
    }

    /// Whether a submit was attempted at least once.
    pub fn is_validated(&self) -> bool {
        self.is_validated
    }

    pub fn is_form_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Whether the "missing criteria" feedback should be displayed.
    pub fn shows_missing_criteria(&self) -> bool {
        self.is_validated && !self.is_form_valid()
    }

    pub fn validate(&self) -> Result<(), CriteriaValidationError> {
        if self.employment_types.is_empty() {
            return Err(CriteriaValidationError::MissingEmploymentTypes);
        }
        if self.workloads.is_empty() {
            return Err(CriteriaValidationError::MissingWorkloads);
        }
        Ok(())
    }

    /// Checks or unchecks one employment type.
    pub fn toggle_employment_type(&mut self, kind: EmploymentType) {
        toggle(&mut self.employment_types, kind);
    }

    pub fn toggle_workload(&mut self, workload: Workload) {
        toggle(&mut self.workloads, workload);
    }

    pub fn set_min_salary(&mut self, min_salary: u64) {
        self.min_salary = min_salary;
    }

    /// Marks the step as validated and returns its payload when valid.
    pub fn submit(&mut self) -> Result<CriteriaSubmission, CriteriaValidationError> {
        self.is_validated = true;
        if let Err(err) = self.validate() {
            debug!(
                "event=criteria_submit module=service status=invalid reason={:?}",
                err
            );
            return Err(err);
        }
        Ok(self.accept())
    }

    /// Submits a valid step, otherwise fills every empty field with defaults.
    ///
    /// Prefilling does not mark the step as validated.
    pub fn fast_forward(&mut self) -> FastForward {
        let missing = match self.validate() {
            Ok(()) => {
                self.is_validated = true;
                return FastForward::Submitted(self.accept());
            }
            Err(missing) => missing,
        };

        debug!(
            "event=criteria_fast_forward module=service status=prefilled reason={:?}",
            missing
        );
        if self.employment_types.is_empty() {
            self.employment_types = vec![EmploymentType::Cdi];
        }
        if self.workloads.is_empty() {
            self.workloads = vec![Workload::FullTime];
        }
        if self.min_salary == 0 {
            self.min_salary = DEFAULT_MIN_SALARY;
        }
        FastForward::Prefilled
    }

    fn accept(&self) -> CriteriaSubmission {
        debug!(
            "event=criteria_submit module=service status=ok employment_types={} workloads={} has_min_salary={}",
            self.employment_types.len(),
            self.workloads.len(),
            self.min_salary > 0
        );
        CriteriaSubmission {
            employment_types: self.employment_types.clone(),
            workloads: self.workloads.clone(),
            min_salary: self.min_salary,
        }
    }
}

fn toggle<T: PartialEq>(values: &mut Vec<T>, value: T) {
    if let Some(index) = values.iter().position(|existing| *existing == value) {
        values.remove(index);
    } else {
        values.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::{toggle, CriteriaStep};

    #[test]
    fn toggle_adds_then_removes() {
        let mut values = vec![1, 2];
        toggle(&mut values, 3);
        assert_eq!(values, vec![1, 2, 3]);
        toggle(&mut values, 1);
        assert_eq!(values, vec![2, 3]);
    }

    #[test]
    fn feedback_hidden_before_first_submit() {
        let mut step = CriteriaStep::default();
        assert!(!step.shows_missing_criteria());
        assert!(step.submit().is_err());
        assert!(step.shows_missing_criteria());
    }
}
