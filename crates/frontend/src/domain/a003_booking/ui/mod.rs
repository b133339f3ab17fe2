pub mod applications;

pub use applications::ApplicationsPage;
