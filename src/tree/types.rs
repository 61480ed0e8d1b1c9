//! Types for suffix tree construction and search
//!
//! Symbols are plain integers drawn from `0..alphabet_size`. Every inserted
//! text gets its own terminator `alphabet_size + text_index`, which keeps the
//! terminators of different texts pairwise distinct.

use serde::{Deserialize, Serialize};

/// A single symbol of a text or pattern
pub type Symbol = u32;

/// Index of an inserted text, in `0..text_count`
pub type TextIndex = usize;

/// Handle of a vertex in the tree's arena
pub type VertexId = usize;

/// The root is always the first vertex in the arena
pub const ROOT: VertexId = 0;

/// Alphabet used when nothing else is configured: one symbol per byte value
pub const DEFAULT_ALPHABET_SIZE: u32 = 256;

/// One occurrence of a pattern: the text it was found in and the offset
/// (0-based, in symbols) where the match starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Occurrence {
    pub text_index: TextIndex,
    pub offset: usize,
}

impl Occurrence {
    pub fn new(text_index: TextIndex, offset: usize) -> Self {
        Self { text_index, offset }
    }
}

/// Configuration fixed at tree creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Number of distinct texts (and terminator symbols) the tree can hold
    #[serde(default = "default_text_count")]
    pub text_count: usize,
    /// Symbols of texts and patterns must lie in `0..alphabet_size`
    #[serde(default = "default_alphabet_size")]
    pub alphabet_size: u32,
}

fn default_text_count() -> usize {
    1
}

fn default_alphabet_size() -> u32 {
    DEFAULT_ALPHABET_SIZE
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            text_count: default_text_count(),
            alphabet_size: default_alphabet_size(),
        }
    }
}

impl TreeConfig {
    /// Config for `text_count` texts over the default alphabet
    pub fn with_text_count(text_count: usize) -> Self {
        Self {
            text_count,
            ..Default::default()
        }
    }

    /// Reject configs whose terminators `alphabet_size..alphabet_size + text_count`
    /// do not all fit in a [`Symbol`]
    pub fn check(&self) -> TreeResult<()> {
        let symbols_needed = u64::try_from(self.text_count)
            .ok()
            .and_then(|count| count.checked_add(u64::from(self.alphabet_size)));
        match symbols_needed {
            Some(needed) if needed <= u64::from(Symbol::MAX) + 1 => Ok(()),
            _ => Err(TreeError::CapacityTooLarge {
                text_count: self.text_count,
                alphabet_size: self.alphabet_size,
            }),
        }
    }

    /// Terminator symbol appended to the text inserted at `text_index`.
    ///
    /// `text_index` must be below `text_count` of a config that passed
    /// [`TreeConfig::check`].
    #[inline]
    pub fn terminator(&self, text_index: TextIndex) -> Symbol {
        debug_assert!(text_index < self.text_count);
        self.alphabet_size + text_index as Symbol
    }
}

/// Shape of a built tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// All vertices, root included
    pub vertex_count: usize,
    /// Branching vertices other than the root
    pub internal_count: usize,
    /// One leaf per suffix of every inserted text (terminator-only suffix included)
    pub leaf_count: usize,
    /// Texts inserted so far
    pub text_count: usize,
    /// Capacity fixed at creation
    pub capacity: usize,
    /// Total symbols over all inserted texts, terminators included
    pub total_symbols: usize,
}

/// Result type for tree operations
pub type TreeResult<T> = Result<T, TreeError>;

/// Errors returned by tree operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Text index outside the capacity fixed at creation
    TextIndexOutOfRange { index: TextIndex, text_count: usize },
    /// A text was already inserted at this index
    DuplicateTextIndex(TextIndex),
    /// A text or pattern contains a symbol outside the alphabet
    /// (terminator symbols included)
    SymbolOutOfRange {
        symbol: Symbol,
        position: usize,
        alphabet_size: u32,
    },
    /// Patterns must contain at least one symbol
    EmptyPattern,
    /// The alphabet leaves no room for one terminator per text slot
    CapacityTooLarge { text_count: usize, alphabet_size: u32 },
}

impl std::fmt::Display for TreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TreeError::TextIndexOutOfRange { index, text_count } => write!(
                f,
                "text index {} out of range (tree holds {} texts)",
                index, text_count
            ),
            TreeError::DuplicateTextIndex(index) => {
                write!(f, "a text was already inserted at index {}", index)
            }
            TreeError::SymbolOutOfRange {
                symbol,
                position,
                alphabet_size,
            } => write!(
                f,
                "symbol {} at position {} is outside the alphabet 0..{}",
                symbol, position, alphabet_size
            ),
            TreeError::EmptyPattern => write!(f, "pattern is empty"),
            TreeError::CapacityTooLarge {
                text_count,
                alphabet_size,
            } => write!(
                f,
                "alphabet of {} symbols leaves no room for {} terminators",
                alphabet_size, text_count
            ),
        }
    }
}

impl std::error::Error for TreeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminators_are_distinct() {
        let config = TreeConfig::with_text_count(3);
        assert_eq!(config.terminator(0), 256);
        assert_eq!(config.terminator(2), 258);
    }

    #[test]
    fn test_check_terminator_range() {
        let last_fit = TreeConfig {
            text_count: 2,
            alphabet_size: u32::MAX - 1,
        };
        assert_eq!(last_fit.check(), Ok(()));
        assert_eq!(last_fit.terminator(1), u32::MAX);

        let overflow = TreeConfig {
            text_count: 2,
            alphabet_size: u32::MAX,
        };
        assert_eq!(
            overflow.check(),
            Err(TreeError::CapacityTooLarge {
                text_count: 2,
                alphabet_size: u32::MAX,
            })
        );

        let too_many_texts = TreeConfig::with_text_count(u32::MAX as usize);
        assert!(too_many_texts.check().is_err());
        assert_eq!(TreeConfig::with_text_count(0).check(), Ok(()));
    }

    #[test]
    fn test_config_defaults_from_json() {
        let config: TreeConfig = serde_json::from_str(r#"{"text_count": 4}"#).unwrap();
        assert_eq!(config.text_count, 4);
        assert_eq!(config.alphabet_size, DEFAULT_ALPHABET_SIZE);
    }

    #[test]
    fn test_error_display() {
        let err = TreeError::TextIndexOutOfRange {
            index: 5,
            text_count: 2,
        };
        assert_eq!(err.to_string(), "text index 5 out of range (tree holds 2 texts)");
    }
}
