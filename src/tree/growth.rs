//! Growth pointer: the shared end of every open leaf edge of one text
//!
//! Leaves created while a text is being inserted do not store their end
//! offset. They resolve it through the growth pointer of their text, so one
//! `increment` per phase extends all of them at once. Each text owns its
//! pointer; once the text's last phase has run the pointer is frozen and the
//! leaves keep reading its final value.

/// Exclusive end offset shared by all open leaf edges of one text
#[derive(Debug, Clone, Default)]
pub struct GrowthPointer {
    value: usize,
    frozen: bool,
}

impl GrowthPointer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one more symbol of the text under construction
    #[inline]
    pub fn increment(&mut self) {
        debug_assert!(!self.frozen, "growth pointer advanced after its text was finished");
        self.value += 1;
    }

    /// One past the last symbol consumed so far
    #[inline]
    pub fn value(&self) -> usize {
        self.value
    }

    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }
}
