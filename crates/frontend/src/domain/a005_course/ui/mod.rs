pub mod catalog;
pub mod player;

pub use catalog::CourseCatalogPage;
pub use player::CoursePlayerPage;
