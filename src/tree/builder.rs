//! Generalized suffix tree construction
//!
//! Texts are added one at a time with Ukkonen's online algorithm:
//! 1. Each phase consumes one symbol (terminator included) and bumps the
//!    text's growth pointer, which extends every open leaf at once
//! 2. Extensions then add the suffixes not yet in the tree, starting from
//!    the active point and hopping along suffix links between extensions
//! 3. The first extension that finds its suffix already present ends the
//!    phase, since every shorter suffix is present too
//!
//! Each text is added in amortized time linear in its length. Edge labels of
//! every vertex resolve through the vertex's own text, so texts share one
//! tree without sharing a buffer.

use super::active::ActiveState;
use super::corpus::{Corpus, validate_symbols};
use super::growth::GrowthPointer;
use super::types::*;
use super::vertex::Vertex;

/// Outcome of a single extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    /// Rule 2 at a vertex: a new leaf hangs off the active vertex
    LeafAdded,
    /// Rule 2 inside an edge: the edge was split at the returned vertex
    EdgeSplit(VertexId),
    /// Rule 3: the suffix is already in the tree
    AlreadyPresent,
}

/// Suffix tree over up to `text_count` texts
#[derive(Debug, Clone)]
pub struct GeneralizedSuffixTree {
    config: TreeConfig,
    pub(super) vertices: Vec<Vertex>,
    pub(super) corpus: Corpus,
    /// One growth pointer per text slot; frozen once its text is in
    pub(super) growth: Vec<GrowthPointer>,
}

impl GeneralizedSuffixTree {
    /// Tree over the default alphabet with room for `text_count` texts
    pub fn new(text_count: usize) -> TreeResult<Self> {
        Self::with_config(TreeConfig::with_text_count(text_count))
    }

    /// Fails with [`TreeError::CapacityTooLarge`] when the terminators of
    /// `config` do not fit in a symbol
    pub fn with_config(config: TreeConfig) -> TreeResult<Self> {
        config.check()?;
        Ok(Self::from_checked_config(config))
    }

    /// `config` must already have passed [`TreeConfig::check`]
    pub(super) fn from_checked_config(config: TreeConfig) -> Self {
        Self {
            vertices: vec![Vertex::root(ROOT)],
            corpus: Corpus::new(config.text_count),
            growth: vec![GrowthPointer::new(); config.text_count],
            config,
        }
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Add `text` at `text_index`.
    ///
    /// The index must be below the capacity fixed at creation and unused;
    /// every symbol must lie inside the alphabet. On error the tree is left
    /// untouched.
    pub fn insert(&mut self, text: &[Symbol], text_index: TextIndex) -> TreeResult<()> {
        if text_index >= self.config.text_count {
            return Err(TreeError::TextIndexOutOfRange {
                index: text_index,
                text_count: self.config.text_count,
            });
        }
        if self.corpus.contains(text_index) {
            return Err(TreeError::DuplicateTextIndex(text_index));
        }
        validate_symbols(text, self.config.alphabet_size)?;

        let terminator = self.config.terminator(text_index);
        self.corpus.add_text(text_index, text, terminator);
        self.growth[text_index] = GrowthPointer::new();

        let vertices_before = self.vertices.len();
        self.run_phases(text_index);
        self.growth[text_index].freeze();

        log::debug!(
            "inserted text {} ({} symbols, {} new vertices, {} total)",
            text_index,
            text.len(),
            self.vertices.len() - vertices_before,
            self.vertices.len()
        );
        Ok(())
    }

    fn run_phases(&mut self, text: TextIndex) {
        let len = self.corpus.text_len(text);
        let mut active = ActiveState::new(ROOT);
        let mut pending: Option<VertexId> = None;
        // First suffix that does not have a leaf yet
        let mut next_suffix = 0;

        for phase in 0..len {
            self.growth[text].increment();

            while next_suffix <= phase {
                let edge = self.skip_count(&mut active, text);
                match self.extend(&mut active, edge, pending, text, next_suffix, phase) {
                    Rule::AlreadyPresent => {
                        pending = None;
                        break;
                    }
                    Rule::LeafAdded => pending = None,
                    Rule::EdgeSplit(internal) => pending = Some(internal),
                }
                next_suffix += 1;
                self.move_to_next_extension(&mut active);
            }
        }

        debug_assert_eq!(next_suffix, len, "every suffix must end at a leaf");
    }

    /// Descend whole edges while the pending run covers them.
    ///
    /// Returns the child whose edge the active point stops inside, or `None`
    /// when it sits exactly on `active.vertex`.
    fn skip_count(&self, active: &mut ActiveState, text: TextIndex) -> Option<VertexId> {
        while active.has_remainder() {
            let symbol = self.corpus.symbol(text, active.start);
            let Some(child) = self.vertices[active.vertex].get_child(symbol) else {
                unreachable!("active point left the tree");
            };
            let length = self.vertices[child].length(&self.growth);
            if length > active.remainder() {
                return Some(child);
            }
            active.vertex = child;
            active.increase_start(length);
        }
        None
    }

    fn extend(
        &mut self,
        active: &mut ActiveState,
        edge: Option<VertexId>,
        pending: Option<VertexId>,
        text: TextIndex,
        suffix: usize,
        phase: usize,
    ) -> Rule {
        let next = self.corpus.symbol(text, phase);

        let Some(child) = edge else {
            if self.vertices[active.vertex].has_child(next) {
                self.link_pending(pending, active.vertex);
                active.increment_end();
                return Rule::AlreadyPresent;
            }
            let leaf = self.push_vertex(Vertex::leaf(text, phase, suffix));
            self.vertices[active.vertex].add_child(leaf, next);
            self.link_pending(pending, active.vertex);
            return Rule::LeafAdded;
        };

        let split_at = self.vertices[child].edge_start() + active.remainder();
        let edge_text = self.vertices[child].text();
        if self.corpus.symbol(edge_text, split_at) == next {
            self.link_pending(pending, active.vertex);
            active.increment_end();
            return Rule::AlreadyPresent;
        }

        let internal = self.split_edge(active.vertex, child, split_at);
        let leaf = self.push_vertex(Vertex::leaf(text, phase, suffix));
        self.vertices[internal].add_child(leaf, next);
        self.link_pending(pending, internal);
        Rule::EdgeSplit(internal)
    }

    /// Replace `parent -> child` with `parent -> internal -> child`, cutting
    /// the edge label before `split_at`
    fn split_edge(&mut self, parent: VertexId, child: VertexId, split_at: usize) -> VertexId {
        let edge_text = self.vertices[child].text();
        let edge_start = self.vertices[child].edge_start();
        let first = self.corpus.symbol(edge_text, edge_start);

        self.vertices[parent].remove_child(first);
        let internal = self.push_vertex(Vertex::internal(edge_text, edge_start, split_at));
        self.vertices[parent].add_child(internal, first);

        self.vertices[child].set_edge_start(split_at);
        let below = self.corpus.symbol(edge_text, split_at);
        self.vertices[internal].add_child(child, below);

        internal
    }

    fn link_pending(&mut self, pending: Option<VertexId>, target: VertexId) {
        if let Some(vertex) = pending {
            self.vertices[vertex].set_suffix_link(target);
        }
    }

    /// Reposition the active point for the next extension after rule 2.
    ///
    /// From the root the next suffix is one symbol shorter, so the pending
    /// run loses its first symbol (or, when empty, moves past the symbol
    /// just handled). Elsewhere the suffix link already accounts for it.
    fn move_to_next_extension(&self, active: &mut ActiveState) {
        if active.vertex == ROOT {
            if active.has_remainder() {
                active.increment_start();
            } else {
                active.increment_both();
            }
        }
        active.vertex = self.vertices[active.vertex].suffix_link();
    }

    fn push_vertex(&mut self, vertex: Vertex) -> VertexId {
        self.vertices.push(vertex);
        self.vertices.len() - 1
    }

    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id]
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Exclusive end of the edge into `id`
    pub fn edge_end(&self, id: VertexId) -> usize {
        self.vertices[id].edge_end(&self.growth)
    }

    /// Symbols on the edge into `id`, read from that vertex's own text
    pub fn edge_label(&self, id: VertexId) -> &[Symbol] {
        let vertex = &self.vertices[id];
        if vertex.is_root() {
            return &[];
        }
        &self.corpus.text(vertex.text())[vertex.edge_start()..self.edge_end(id)]
    }

    /// Inserted text without its terminator; empty for unused slots
    pub fn text(&self, text_index: TextIndex) -> &[Symbol] {
        let symbols = self.corpus.text(text_index);
        &symbols[..symbols.len().saturating_sub(1)]
    }

    pub fn is_inserted(&self, text_index: TextIndex) -> bool {
        self.corpus.contains(text_index)
    }

    /// Number of texts inserted so far
    pub fn len(&self) -> usize {
        self.corpus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.corpus.is_empty()
    }

    pub fn stats(&self) -> TreeStats {
        let leaf_count = self
            .vertices
            .iter()
            .filter(|v| !v.is_root() && v.is_leaf())
            .count();

        TreeStats {
            vertex_count: self.vertices.len(),
            internal_count: self.vertices.len() - leaf_count - 1,
            leaf_count,
            text_count: self.corpus.len(),
            capacity: self.config.text_count,
            total_symbols: self.corpus.total_symbols(),
        }
    }
}
