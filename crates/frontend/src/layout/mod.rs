pub mod global_context;
pub mod shell;

pub use shell::Shell;
