//! Subcommand handlers.

pub mod catalog;
pub mod play;
pub mod status;

pub use catalog::{list_cases, resolve};
pub use play::{parse_input, play, Input};
pub use status::{reset, status, StatusReport};
