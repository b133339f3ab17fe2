pub mod aggregate;

pub use aggregate::{Booking, Review};
