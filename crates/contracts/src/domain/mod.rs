pub mod a001_cleaner;
pub mod a002_job;
pub mod a003_booking;
pub mod a004_shortlist;
pub mod a005_course;
pub mod common;
