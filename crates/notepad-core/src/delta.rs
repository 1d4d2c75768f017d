//! Structured change records.
//!
//! Every mutation of a [`TextDocument`](crate::TextDocument) produces a [`TextDelta`]: a single
//! `replace_span` outside an edit group yields a one-edit delta, a whole edit group (for example a
//! replace-all) yields one delta holding every edit in application order. Offsets are in
//! characters (Unicode scalar values).

use crate::document::Span;

/// One text replacement.
///
/// `start` is a character offset in the document **at the time this edit is applied**, so the
/// edits of a [`TextDelta`] must be replayed in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDeltaEdit {
    /// Start character offset of the edit.
    pub start: usize,
    /// Exact deleted text (may be empty).
    pub deleted_text: String,
    /// Exact inserted text (may be empty).
    pub inserted_text: String,
}

impl TextDeltaEdit {
    /// Length of `deleted_text` in characters.
    pub fn deleted_len(&self) -> usize {
        self.deleted_text.chars().count()
    }

    /// Length of `inserted_text` in characters.
    pub fn inserted_len(&self) -> usize {
        self.inserted_text.chars().count()
    }

    /// Where the inserted text sits once the edit is applied.
    pub fn inserted_span(&self) -> Span {
        Span::new(self.start, self.start + self.inserted_len())
    }

    /// The edit that takes the document back to its pre-edit text.
    pub fn inverse(&self) -> Self {
        Self {
            start: self.start,
            deleted_text: self.inserted_text.clone(),
            inserted_text: self.deleted_text.clone(),
        }
    }
}

/// A document change: the ordered edits plus bookkeeping for incremental consumers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDelta {
    /// Character count before applying `edits`.
    pub before_char_count: usize,
    /// Character count after applying `edits`.
    pub after_char_count: usize,
    /// Edits in application order.
    pub edits: Vec<TextDeltaEdit>,
    /// Undo group that owns these edits.
    pub undo_group_id: Option<usize>,
}

impl TextDelta {
    /// Net change in document length, in characters.
    pub fn char_count_change(&self) -> isize {
        self.after_char_count as isize - self.before_char_count as isize
    }
}
