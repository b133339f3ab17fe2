pub mod widget;

pub use widget::CleanerListPage;
