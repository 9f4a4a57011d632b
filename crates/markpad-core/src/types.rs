//! Selection as reported by a host field.

use std::ops::Range;

/// A selection in char offsets.
///
/// `anchor` is where the user started selecting and `head` where the caret
/// ended up, so a backward drag has `head < anchor`.
#[derive(Clone, Debug, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub anchor: usize,
    pub head: usize,
}

impl Selection {
    pub fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// A caret with nothing selected.
    pub fn collapsed(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    pub fn start(&self) -> usize {
        self.anchor.min(self.head)
    }

    pub fn end(&self) -> usize {
        self.anchor.max(self.head)
    }

    /// The selected span, lowest offset first.
    pub fn to_range(&self) -> Range<usize> {
        self.start()..self.end()
    }

    /// Pull both ends back inside a buffer of `len` chars.
    pub fn clamp(self, len: usize) -> Self {
        Self::new(self.anchor.min(len), self.head.min(len))
    }
}
