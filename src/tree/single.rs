//! Single-text suffix tree
//!
//! A thin wrapper over [`GeneralizedSuffixTree`] with one text slot that
//! reports plain offsets instead of `(text, offset)` pairs.

use super::builder::GeneralizedSuffixTree;
use super::types::*;

#[derive(Debug, Clone)]
pub struct SuffixTree {
    inner: GeneralizedSuffixTree,
}

impl Default for SuffixTree {
    fn default() -> Self {
        Self::new()
    }
}

impl SuffixTree {
    pub fn new() -> Self {
        Self {
            inner: GeneralizedSuffixTree::from_checked_config(TreeConfig::default()),
        }
    }

    /// Fails when `alphabet_size` leaves no room for the terminator
    pub fn with_alphabet_size(alphabet_size: u32) -> TreeResult<Self> {
        let inner = GeneralizedSuffixTree::with_config(TreeConfig {
            text_count: 1,
            alphabet_size,
        })?;
        Ok(Self { inner })
    }

    /// Build a tree over `text` in one go
    pub fn from_text(text: &[Symbol]) -> TreeResult<Self> {
        let mut tree = Self::new();
        tree.insert(text)?;
        Ok(tree)
    }

    /// Insert the one text this tree holds; a second call fails with
    /// [`TreeError::DuplicateTextIndex`]
    pub fn insert(&mut self, text: &[Symbol]) -> TreeResult<()> {
        self.inner.insert(text, 0)
    }

    /// Start offsets of every occurrence of `pattern`, ascending
    pub fn search(&self, pattern: &[Symbol]) -> TreeResult<Vec<usize>> {
        Ok(self
            .inner
            .search(pattern)?
            .into_iter()
            .map(|o| o.offset)
            .collect())
    }

    pub fn contains(&self, pattern: &[Symbol]) -> TreeResult<bool> {
        self.inner.contains(pattern)
    }

    /// Offset at which `pattern` occurs as a suffix of the text, if it does
    pub fn suffix_offset(&self, pattern: &[Symbol]) -> TreeResult<Option<usize>> {
        Ok(self
            .inner
            .suffix_occurrences(pattern)?
            .first()
            .map(|o| o.offset))
    }

    pub fn text(&self) -> &[Symbol] {
        self.inner.text(0)
    }

    pub fn stats(&self) -> TreeStats {
        self.inner.stats()
    }

    pub fn as_generalized(&self) -> &GeneralizedSuffixTree {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::symbols_from_bytes;

    #[test]
    fn test_banana_offsets() {
        let tree = SuffixTree::from_text(&symbols_from_bytes(b"banana")).unwrap();
        assert_eq!(tree.search(&symbols_from_bytes(b"ana")).unwrap(), vec![1, 3]);
        assert_eq!(tree.search(&symbols_from_bytes(b"nab")).unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn test_abacabad_offsets() {
        let tree = SuffixTree::from_text(&symbols_from_bytes(b"abacabad")).unwrap();
        assert_eq!(tree.search(&symbols_from_bytes(b"aba")).unwrap(), vec![0, 4]);
        assert!(tree.search(&symbols_from_bytes(b"xyz")).unwrap().is_empty());
    }

    #[test]
    fn test_suffix_offset() {
        let tree = SuffixTree::from_text(&symbols_from_bytes(b"abacabad")).unwrap();
        assert_eq!(tree.suffix_offset(&symbols_from_bytes(b"bad")).unwrap(), Some(5));
        assert_eq!(tree.suffix_offset(&symbols_from_bytes(b"aba")).unwrap(), None);
    }

    #[test]
    fn test_second_insert_rejected() {
        let mut tree = SuffixTree::new();
        tree.insert(&symbols_from_bytes(b"one")).unwrap();
        assert_eq!(
            tree.insert(&symbols_from_bytes(b"two")),
            Err(TreeError::DuplicateTextIndex(0))
        );
        assert_eq!(tree.text(), &symbols_from_bytes(b"one")[..]);
    }

    #[test]
    fn test_alphabet_must_leave_room_for_terminator() {
        assert!(matches!(
            SuffixTree::with_alphabet_size(u32::MAX),
            Err(TreeError::CapacityTooLarge { .. })
        ));

        let mut tree = SuffixTree::with_alphabet_size(2).unwrap();
        tree.insert(&[0, 1, 1, 0]).unwrap();
        assert_eq!(tree.search(&[1, 0]).unwrap(), vec![2]);
    }

    #[test]
    fn test_empty_text() {
        let tree = SuffixTree::from_text(&[]).unwrap();
        assert_eq!(tree.stats().leaf_count, 1);
        assert!(tree.search(&[0]).unwrap().is_empty());
    }
}
