pub mod common;
pub mod u101_book_cleaner;
pub mod u102_review_application;
