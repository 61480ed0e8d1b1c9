//! Symbol storage for inserted texts
//!
//! Every text is stored once, with its terminator appended, in the slot of
//! its text index. Vertices address their edge labels by `(text, offset)`.

use super::types::{Symbol, TextIndex, TreeError, TreeResult};

#[derive(Debug, Clone)]
pub struct Corpus {
    texts: Vec<Option<Vec<Symbol>>>,
    total_symbols: usize,
}

impl Corpus {
    /// Corpus with room for `capacity` texts
    pub fn new(capacity: usize) -> Self {
        Self {
            texts: vec![None; capacity],
            total_symbols: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.texts.len()
    }

    pub fn contains(&self, text_index: TextIndex) -> bool {
        self.texts.get(text_index).is_some_and(|t| t.is_some())
    }

    /// Store `text` followed by `terminator` at `text_index`.
    ///
    /// The caller has already checked the index and the symbols.
    pub fn add_text(&mut self, text_index: TextIndex, text: &[Symbol], terminator: Symbol) {
        let mut symbols = Vec::with_capacity(text.len() + 1);
        symbols.extend_from_slice(text);
        symbols.push(terminator);

        self.total_symbols += symbols.len();
        self.texts[text_index] = Some(symbols);
    }

    /// Symbols of an inserted text, terminator included
    pub fn text(&self, text_index: TextIndex) -> &[Symbol] {
        self.texts
            .get(text_index)
            .and_then(|t| t.as_deref())
            .unwrap_or(&[])
    }

    #[inline]
    pub fn symbol(&self, text_index: TextIndex, position: usize) -> Symbol {
        self.text(text_index)[position]
    }

    /// Length including the terminator; 0 for empty slots
    pub fn text_len(&self, text_index: TextIndex) -> usize {
        self.text(text_index).len()
    }

    /// Number of texts inserted so far
    pub fn len(&self) -> usize {
        self.texts.iter().filter(|t| t.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.iter().all(|t| t.is_none())
    }

    pub fn total_symbols(&self) -> usize {
        self.total_symbols
    }
}

/// Reject symbols outside `0..alphabet_size`, which includes every terminator
pub fn validate_symbols(symbols: &[Symbol], alphabet_size: u32) -> TreeResult<()> {
    match symbols.iter().position(|&s| s >= alphabet_size) {
        Some(position) => Err(TreeError::SymbolOutOfRange {
            symbol: symbols[position],
            position,
            alphabet_size,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_text_appends_terminator() {
        let mut corpus = Corpus::new(2);
        corpus.add_text(1, &[1, 2, 3], 257);

        assert!(!corpus.contains(0));
        assert!(corpus.contains(1));
        assert_eq!(corpus.text(1), &[1, 2, 3, 257]);
        assert_eq!(corpus.text_len(1), 4);
        assert_eq!(corpus.symbol(1, 3), 257);
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.total_symbols(), 4);
    }

    #[test]
    fn test_empty_slots() {
        let corpus = Corpus::new(3);
        assert!(corpus.is_empty());
        assert_eq!(corpus.text_len(2), 0);
        assert!(!corpus.contains(7));
    }

    #[test]
    fn test_validate_symbols() {
        assert!(validate_symbols(&[0, 10, 255], 256).is_ok());
        assert_eq!(
            validate_symbols(&[0, 256, 3], 256),
            Err(TreeError::SymbolOutOfRange {
                symbol: 256,
                position: 1,
                alphabet_size: 256,
            })
        );
    }
}
