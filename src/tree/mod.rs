//! Suffix tree module
//!
//! This module builds a generalized suffix tree with Ukkonen's online
//! algorithm and answers exact substring queries over every inserted text.
//!
//! ## Architecture
//!
//! - `builder`: The construction engine and the tree itself
//! - `search`: Pattern location and occurrence enumeration
//! - `single`: Single-text wrapper reporting plain offsets
//! - `vertex`, `children`, `growth`, `active`, `corpus`: Building blocks
//! - `types`: Core type definitions
//!
//! ## Storage
//!
//! Vertices live in one arena and refer to each other by index, which keeps
//! the root's self-referencing suffix link and all other back references
//! free of shared ownership. Edge labels are `(text, start..end)` ranges into
//! the corpus; the ends of leaf edges are read from the per-text growth
//! pointer.

pub mod active;
pub mod builder;
pub mod children;
pub mod corpus;
pub mod growth;
pub mod search;
pub mod single;
pub mod types;
pub mod vertex;

// Re-exports for convenience
pub use builder::GeneralizedSuffixTree;
pub use single::SuffixTree;
pub use types::{
    Occurrence, ROOT, Symbol, TextIndex, TreeConfig, TreeError, TreeResult, TreeStats, VertexId,
};

/// Map each byte to its own symbol
pub fn symbols_from_bytes(bytes: &[u8]) -> Vec<Symbol> {
    bytes.iter().map(|&b| Symbol::from(b)).collect()
}
