pub mod list_top_bar;
pub mod status_badge;

pub use list_top_bar::ListTopBar;
pub use status_badge::{BookingStatusBadge, JobStatusBadge};
