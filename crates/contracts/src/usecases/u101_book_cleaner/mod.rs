//! Employer-side booking wizard: pick a mode, pick or draft a job,
//! confirm, submit.

pub mod machine;

pub use machine::{BookingMode, BookingWizard, SubmitOutcome, SubmitPlan, WizardStep};
