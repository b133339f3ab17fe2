pub mod job_form;
pub mod list;

pub use list::MyJobsPage;
