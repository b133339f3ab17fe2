pub mod aggregate;

pub use aggregate::{Cleaner, UserProfile};
