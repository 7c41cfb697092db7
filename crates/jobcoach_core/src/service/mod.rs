//! Onboarding use-case services.
//!
//! # Responsibility
//! - Model the stateful form pieces of the new-project criteria step.
//! - Keep UI layers decoupled from conversion and storage details.

pub mod criteria_step;
pub mod salary_input;
