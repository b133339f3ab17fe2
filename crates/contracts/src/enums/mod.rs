pub mod booking_status;
pub mod experience_bucket;
pub mod job_status;
pub mod lesson_content_type;
pub mod user_role;

pub use booking_status::BookingStatus;
pub use experience_bucket::ExperienceBucket;
pub use job_status::JobStatus;
pub use lesson_content_type::LessonContentType;
pub use user_role::UserRole;
