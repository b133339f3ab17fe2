pub mod aggregate;

pub use aggregate::{ShortlistEntry, ShortlistSet, ToggleAction};
