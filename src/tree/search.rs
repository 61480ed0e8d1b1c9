//! Pattern search over a built tree
//!
//! A pattern is matched top-down from the root, comparing against each
//! edge's own text. Every leaf below the vertex where the pattern ends is one
//! occurrence. For a pattern of length m with k occurrences the descent costs
//! O(m) and collecting the leaves O(k), plus O(k log k) to return them sorted.

use super::builder::GeneralizedSuffixTree;
use super::corpus::validate_symbols;
use super::types::*;

impl GeneralizedSuffixTree {
    fn check_pattern(&self, pattern: &[Symbol]) -> TreeResult<()> {
        if pattern.is_empty() {
            return Err(TreeError::EmptyPattern);
        }
        validate_symbols(pattern, self.config().alphabet_size)
    }

    /// Vertex at or below the end of `pattern`, if the pattern occurs at all
    pub fn locate(&self, pattern: &[Symbol]) -> TreeResult<Option<VertexId>> {
        self.check_pattern(pattern)?;
        Ok(self.locate_unchecked(pattern))
    }

    fn locate_unchecked(&self, pattern: &[Symbol]) -> Option<VertexId> {
        let mut current = ROOT;
        let mut matched = 0;

        while matched < pattern.len() {
            current = self.vertices[current].get_child(pattern[matched])?;

            let vertex = &self.vertices[current];
            let text = self.corpus.text(vertex.text());
            let end = vertex.edge_end(&self.growth);
            let mut position = vertex.edge_start();

            while position < end && matched < pattern.len() {
                if text[position] != pattern[matched] {
                    return None;
                }
                position += 1;
                matched += 1;
            }
        }

        Some(current)
    }

    /// Every occurrence of `pattern` in every inserted text, sorted by
    /// `(text_index, offset)`.
    ///
    /// A pattern that occurs nowhere yields an empty vector, not an error.
    pub fn search(&self, pattern: &[Symbol]) -> TreeResult<Vec<Occurrence>> {
        Ok(match self.locate(pattern)? {
            Some(vertex) => self.leaves_below(vertex),
            None => Vec::new(),
        })
    }

    pub fn contains(&self, pattern: &[Symbol]) -> TreeResult<bool> {
        Ok(self.locate(pattern)?.is_some())
    }

    /// Occurrences where `pattern` runs to the end of its text, at most one
    /// per text, ordered by text index.
    ///
    /// Each inserted text is probed with `pattern` followed by that text's
    /// terminator. The terminator occurs nowhere else, so a match ends on the
    /// leaf of exactly that suffix.
    pub fn suffix_occurrences(&self, pattern: &[Symbol]) -> TreeResult<Vec<Occurrence>> {
        self.check_pattern(pattern)?;

        let mut probe = Vec::with_capacity(pattern.len() + 1);
        probe.extend_from_slice(pattern);
        probe.push(0);

        let mut occurrences = Vec::new();
        for text_index in 0..self.config().text_count {
            if !self.is_inserted(text_index) {
                continue;
            }
            if let Some(last) = probe.last_mut() {
                *last = self.config().terminator(text_index);
            }
            let Some(leaf) = self.locate_unchecked(&probe) else {
                continue;
            };
            if let Some(offset) = self.vertices[leaf].suffix_start() {
                occurrences.push(Occurrence::new(text_index, offset));
            }
        }
        Ok(occurrences)
    }

    /// Collect the leaves of the subtree rooted at `from` with an explicit
    /// stack, so deep trees cannot overflow the call stack
    fn leaves_below(&self, from: VertexId) -> Vec<Occurrence> {
        let mut occurrences = Vec::new();
        let mut stack = vec![from];

        while let Some(id) = stack.pop() {
            let vertex = &self.vertices[id];
            if vertex.is_leaf() {
                if let Some(offset) = vertex.suffix_start() {
                    occurrences.push(Occurrence::new(vertex.text(), offset));
                }
                continue;
            }
            stack.extend(vertex.children().iter().rev().map(|(_, child)| child));
        }

        occurrences.sort_unstable();
        occurrences
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::symbols_from_bytes;

    fn tree_of(texts: &[&str]) -> GeneralizedSuffixTree {
        let mut tree = GeneralizedSuffixTree::new(texts.len()).unwrap();
        for (i, text) in texts.iter().enumerate() {
            tree.insert(&symbols_from_bytes(text.as_bytes()), i).unwrap();
        }
        tree
    }

    fn search(tree: &GeneralizedSuffixTree, pattern: &[u8]) -> Vec<(usize, usize)> {
        tree.search(&symbols_from_bytes(pattern))
            .unwrap()
            .into_iter()
            .map(|o| (o.text_index, o.offset))
            .collect()
    }

    #[test]
    fn test_search_banana() {
        let tree = tree_of(&["banana"]);
        assert_eq!(search(&tree, b"ana"), vec![(0, 1), (0, 3)]);
        assert_eq!(search(&tree, b"a"), vec![(0, 1), (0, 3), (0, 5)]);
        assert_eq!(search(&tree, b"banana"), vec![(0, 0)]);
        assert!(search(&tree, b"bananas").is_empty());
    }

    #[test]
    fn test_search_mid_edge_mismatch() {
        let tree = tree_of(&["abacabad"]);
        assert_eq!(search(&tree, b"aba"), vec![(0, 0), (0, 4)]);
        assert!(search(&tree, b"abx").is_empty());
        assert!(search(&tree, b"xyz").is_empty());
    }

    #[test]
    fn test_search_across_texts() {
        let tree = tree_of(&["abab", "baba"]);
        assert_eq!(search(&tree, b"ab"), vec![(0, 0), (0, 2), (1, 1)]);
        assert_eq!(search(&tree, b"bab"), vec![(0, 1), (1, 0)]);
    }

    #[test]
    fn test_empty_tree_finds_nothing() {
        let tree = GeneralizedSuffixTree::new(4).unwrap();
        assert!(search(&tree, b"a").is_empty());
        assert!(!tree.contains(&[1]).unwrap());
    }

    #[test]
    fn test_invalid_patterns() {
        let tree = tree_of(&["abc"]);
        assert_eq!(tree.search(&[]), Err(TreeError::EmptyPattern));

        let terminator = tree.config().terminator(0);
        assert!(matches!(
            tree.search(&[terminator]),
            Err(TreeError::SymbolOutOfRange { .. })
        ));
    }

    #[test]
    fn test_suffix_occurrences() {
        let tree = tree_of(&["abcab", "xab", "abx"]);
        let suffixes: Vec<(usize, usize)> = tree
            .suffix_occurrences(&symbols_from_bytes(b"ab"))
            .unwrap()
            .into_iter()
            .map(|o| (o.text_index, o.offset))
            .collect();
        assert_eq!(suffixes, vec![(0, 3), (1, 1)]);
    }

    #[test]
    fn test_suffix_occurrences_match_filtered_search() {
        let texts = ["abab", "baba", "bab", "aabbaabb", "b"];
        let tree = tree_of(&texts);

        for pattern in ["b", "ab", "bab", "abb", "a", "baba", "aabbaabb", "x"] {
            let symbols = symbols_from_bytes(pattern.as_bytes());
            let mut expected = tree.search(&symbols).unwrap();
            expected.retain(|o| o.offset + symbols.len() == texts[o.text_index].len());

            assert_eq!(tree.suffix_occurrences(&symbols).unwrap(), expected, "{}", pattern);
        }
    }

    #[test]
    fn test_suffix_occurrences_skip_unused_slots() {
        let mut tree = GeneralizedSuffixTree::new(3).unwrap();
        tree.insert(&symbols_from_bytes(b"xab"), 2).unwrap();

        assert_eq!(
            tree.suffix_occurrences(&symbols_from_bytes(b"ab")).unwrap(),
            vec![Occurrence::new(2, 1)]
        );
        assert_eq!(tree.suffix_occurrences(&[]), Err(TreeError::EmptyPattern));
    }

    #[test]
    fn test_contains() {
        let tree = tree_of(&["mississippi"]);
        assert!(tree.contains(&symbols_from_bytes(b"ssi")).unwrap());
        assert!(tree.contains(&symbols_from_bytes(b"ppi")).unwrap());
        assert!(!tree.contains(&symbols_from_bytes(b"spa")).unwrap());
    }
}
