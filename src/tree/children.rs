//! Child map keyed by the first symbol of each outgoing edge
//!
//! Vertices branch on a handful of symbols at most, so a sorted vector with
//! binary search beats hashing and gives a stable iteration order for free.

use super::types::{Symbol, VertexId};

#[derive(Debug, Clone, Default)]
pub struct ChildMap {
    entries: Vec<(Symbol, VertexId)>,
}

impl ChildMap {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn position(&self, symbol: Symbol) -> Result<usize, usize> {
        self.entries.binary_search_by_key(&symbol, |&(s, _)| s)
    }

    /// Child whose edge starts with `symbol`
    #[inline]
    pub fn get(&self, symbol: Symbol) -> Option<VertexId> {
        self.position(symbol).ok().map(|i| self.entries[i].1)
    }

    /// Set the child for `symbol`, returning the one it replaced
    pub fn insert(&mut self, symbol: Symbol, child: VertexId) -> Option<VertexId> {
        match self.position(symbol) {
            Ok(i) => Some(std::mem::replace(&mut self.entries[i].1, child)),
            Err(i) => {
                self.entries.insert(i, (symbol, child));
                None
            }
        }
    }

    pub fn remove(&mut self, symbol: Symbol) -> Option<VertexId> {
        self.position(symbol).ok().map(|i| self.entries.remove(i).1)
    }

    #[inline]
    pub fn contains(&self, symbol: Symbol) -> bool {
        self.position(symbol).is_ok()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Children in ascending symbol order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (Symbol, VertexId)> + '_ {
        self.entries.iter().copied()
    }
}
