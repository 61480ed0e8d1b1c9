//! Tree vertices
//!
//! A vertex stores the label of the edge leading into it as a half-open range
//! `start..end` into the corpus of text `text`; no symbols are copied. Leaf
//! edges are open: their end is read from the growth pointer of their text.

use super::children::ChildMap;
use super::growth::GrowthPointer;
use super::types::{Symbol, TextIndex, VertexId};

/// End bound of the edge leading into a vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEnd {
    /// The root has no incoming edge
    Root,
    /// Internal vertex: fixed exclusive end
    Fixed(usize),
    /// Leaf: tracks the growth pointer of the vertex's text
    Open,
}

#[derive(Debug, Clone)]
pub struct Vertex {
    text: TextIndex,
    start: usize,
    end: EdgeEnd,
    children: ChildMap,
    suffix_link: Option<VertexId>,
    /// Offset of the suffix spelled by the path to this leaf
    suffix_start: Option<usize>,
}

impl Vertex {
    /// The root links to itself; `id` is its slot in the arena
    pub fn root(id: VertexId) -> Self {
        Self {
            text: 0,
            start: 0,
            end: EdgeEnd::Root,
            children: ChildMap::new(),
            suffix_link: Some(id),
            suffix_start: None,
        }
    }

    /// Branching vertex labelled `start..end` of `text`
    pub fn internal(text: TextIndex, start: usize, end: usize) -> Self {
        Self {
            text,
            start,
            end: EdgeEnd::Fixed(end),
            children: ChildMap::new(),
            suffix_link: None,
            suffix_start: None,
        }
    }

    /// Open leaf for the suffix of `text` starting at `suffix_start`, whose
    /// edge label begins at `start`
    pub fn leaf(text: TextIndex, start: usize, suffix_start: usize) -> Self {
        Self {
            text,
            start,
            end: EdgeEnd::Open,
            children: ChildMap::new(),
            suffix_link: None,
            suffix_start: Some(suffix_start),
        }
    }

    pub fn is_root(&self) -> bool {
        self.end == EdgeEnd::Root
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn text(&self) -> TextIndex {
        self.text
    }

    pub fn edge_start(&self) -> usize {
        self.start
    }

    pub fn set_edge_start(&mut self, start: usize) {
        self.start = start;
    }

    /// Exclusive end of the incoming edge, resolving open leaves through
    /// their text's growth pointer.
    ///
    /// # Panics
    ///
    /// The root has no incoming edge; asking for its end is a bug.
    pub fn edge_end(&self, growth: &[GrowthPointer]) -> usize {
        match self.end {
            EdgeEnd::Fixed(end) => end,
            EdgeEnd::Open => growth[self.text].value(),
            EdgeEnd::Root => panic!("the root has no incoming edge"),
        }
    }

    /// Number of symbols on the incoming edge (0 for the root)
    pub fn length(&self, growth: &[GrowthPointer]) -> usize {
        if self.is_root() {
            return 0;
        }
        self.edge_end(growth) - self.start
    }

    pub fn get_child(&self, symbol: Symbol) -> Option<VertexId> {
        self.children.get(symbol)
    }

    pub fn add_child(&mut self, child: VertexId, symbol: Symbol) {
        self.children.insert(symbol, child);
    }

    pub fn remove_child(&mut self, symbol: Symbol) -> Option<VertexId> {
        self.children.remove(symbol)
    }

    pub fn has_child(&self, symbol: Symbol) -> bool {
        self.children.contains(symbol)
    }

    pub fn children(&self) -> &ChildMap {
        &self.children
    }

    /// # Panics
    ///
    /// Internal vertices receive their link during the extension after the
    /// one that created them; following it earlier is a bug.
    pub fn suffix_link(&self) -> VertexId {
        match self.suffix_link {
            Some(link) => link,
            None => panic!("suffix link followed before it was set"),
        }
    }

    pub fn has_suffix_link(&self) -> bool {
        self.suffix_link.is_some()
    }

    pub fn set_suffix_link(&mut self, target: VertexId) {
        self.suffix_link = Some(target);
    }

    pub fn suffix_start(&self) -> Option<usize> {
        self.suffix_start
    }
}
