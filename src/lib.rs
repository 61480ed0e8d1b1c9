//! # gstree - Generalized Suffix Tree
//!
//! gstree builds a suffix tree over one or more texts with Ukkonen's online
//! algorithm and answers exact substring queries across all of them.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`tree`] - Tree construction (Ukkonen) and pattern search
//! - [`frontend`] - Manifest-driven runs over text and pattern files
//! - [`output`] - Result triplet formatting
//! - [`utils`] - Configuration and progress reporting
//!
//! ## Quick Start
//!
//! ```
//! use gstree::tree::{GeneralizedSuffixTree, Occurrence, symbols_from_bytes};
//!
//! let mut tree = GeneralizedSuffixTree::new(2).unwrap();
//! tree.insert(&symbols_from_bytes(b"abab"), 0).unwrap();
//! tree.insert(&symbols_from_bytes(b"baba"), 1).unwrap();
//!
//! let hits = tree.search(&symbols_from_bytes(b"ab")).unwrap();
//! assert_eq!(
//!     hits,
//!     vec![Occurrence::new(0, 0), Occurrence::new(0, 2), Occurrence::new(1, 1)]
//! );
//! ```
//!
//! ## Performance
//!
//! Each text is inserted in amortized time linear in its length. Open leaf
//! edges share one growth pointer per text, and suffix links let each
//! extension start where the previous one ended instead of at the root.
//!
//! Locating a pattern of length m costs O(m). Listing its k occurrences adds
//! O(k log k), since they are returned sorted. Suffix matches cost O(m) per
//! inserted text.

pub mod frontend;
pub mod output;
pub mod tree;
pub mod utils;
