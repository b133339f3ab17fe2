pub mod api_error;
pub mod list_filter;
