//! Active point of Ukkonen's algorithm
//!
//! `vertex` is where the current extension starts. The symbols
//! `start..end` of the text under construction still have to be matched
//! below it; `end` is always the position of the phase's new symbol.

use super::types::VertexId;

#[derive(Debug, Clone)]
pub struct ActiveState {
    pub vertex: VertexId,
    pub start: usize,
    pub end: usize,
}

impl ActiveState {
    pub fn new(vertex: VertexId) -> Self {
        Self {
            vertex,
            start: 0,
            end: 0,
        }
    }

    #[inline]
    pub fn increment_start(&mut self) {
        self.start += 1;
    }

    /// Skip a whole edge of `amount` symbols during descent
    #[inline]
    pub fn increase_start(&mut self, amount: usize) {
        self.start += amount;
    }

    #[inline]
    pub fn increment_end(&mut self) {
        self.end += 1;
    }

    #[inline]
    pub fn increment_both(&mut self) {
        self.start += 1;
        self.end += 1;
    }

    #[inline]
    pub fn remainder(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn has_remainder(&self) -> bool {
        self.start != self.end
    }
}
