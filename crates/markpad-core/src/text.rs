//! Field contents as the transformer sees them.
//!
//! The transformer only needs to read the selected span and splice markup
//! over it, so `TextBuffer` stays that small. `EditorRope` backs it with
//! ropey and also owns the UTF-16 mapping browsers use for selections.

use std::ops::Range;

use smol_str::{SmolStr, ToSmolStr};

/// Editable text addressed in chars (Unicode scalar values).
pub trait TextBuffer {
    fn len_chars(&self) -> usize;

    /// Text in `char_range`, or `None` when the range is reversed or past the end.
    fn slice(&self, char_range: Range<usize>) -> Option<SmolStr>;

    /// Replace `char_range` with `text`.
    fn replace(&mut self, char_range: Range<usize>, text: &str);

    fn to_string(&self) -> String;
}

/// Ropey-backed field contents.
#[derive(Clone, Default)]
pub struct EditorRope {
    rope: ropey::Rope,
}

impl EditorRope {
    /// UTF-16 code unit offset of `char_offset`, clamped to the end.
    pub fn char_to_utf16(&self, char_offset: usize) -> usize {
        self.rope
            .char_to_utf16_cu(char_offset.min(self.rope.len_chars()))
    }

    /// Char offset of a UTF-16 code unit offset, clamped to the end.
    ///
    /// An offset inside a surrogate pair resolves to the char containing it.
    pub fn utf16_to_char(&self, utf16_offset: usize) -> usize {
        self.rope
            .utf16_cu_to_char(utf16_offset.min(self.rope.len_utf16_cu()))
    }
}

impl TextBuffer for EditorRope {
    fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    fn slice(&self, char_range: Range<usize>) -> Option<SmolStr> {
        if char_range.start > char_range.end || char_range.end > self.len_chars() {
            return None;
        }
        Some(self.rope.slice(char_range).to_smolstr())
    }

    fn replace(&mut self, char_range: Range<usize>, text: &str) {
        let start = char_range.start;
        self.rope.remove(char_range);
        self.rope.insert(start, text);
    }

    fn to_string(&self) -> String {
        self.rope.to_string()
    }
}

impl From<&str> for EditorRope {
    fn from(s: &str) -> Self {
        Self {
            rope: ropey::Rope::from_str(s),
        }
    }
}

impl From<String> for EditorRope {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}
