//! Utility functions and data structures for the command-line front end.
//!
//! ## Modules
//!
//! - [`config`] - Front end configuration (JSON, serde defaults)
//! - [`progress`] - Progress bar over inserted texts

pub mod config;
pub mod progress;

pub use config::*;
pub use progress::*;
