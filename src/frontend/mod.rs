//! File-driven front end
//!
//! Everything that touches the file system or adjusts user-facing indices
//! lives here; the tree itself never does I/O, case folding or 1-based
//! numbering.

pub mod manifest;
pub mod run;

pub use manifest::Manifest;
pub use run::{build_tree, read_symbols, run_manifest, search_patterns};
