pub mod aggregate;

pub use aggregate::{Job, JobDraft};
