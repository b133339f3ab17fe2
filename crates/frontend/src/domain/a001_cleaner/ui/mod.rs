pub mod list;

pub use list::CleanerListPage;
