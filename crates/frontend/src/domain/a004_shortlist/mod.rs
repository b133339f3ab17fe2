pub mod api;
pub mod button;
pub mod service;
