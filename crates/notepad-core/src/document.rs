//! The document interface consumed by search, replace and highlighting.
//!
//! The host application owns the document; core operations only borrow it for the duration of
//! one call. All offsets are **character offsets** (Unicode scalar values), and spans are
//! half-open (`[start, end)`).

use crate::error::DocumentError;
use crate::highlight::{Block, HighlightSpan};
use crate::search::SearchQuery;

/// A half-open character range.
///
/// Spans are plain offsets: they do not follow later edits. Any span obtained before a mutation
/// must be considered stale afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Inclusive start character offset.
    pub start: usize,
    /// Exclusive end character offset.
    pub end: usize,
}

/// A caret (`start == end`) or a selection.
pub type Cursor = Span;

impl Span {
    /// Create a span, normalizing reversed bounds.
    pub fn new(start: usize, end: usize) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// An empty span at `offset`.
    pub fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` for a caret.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Returns `true` if `offset` lies inside the span.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

/// Positional text storage with edit grouping, selection and per-block highlight storage.
///
/// [`TextDocument`](crate::TextDocument) is the reference implementation; hosts with their own
/// text model implement this trait to reuse the search/replace/highlight operations.
pub trait Document {
    /// Document length in characters.
    fn char_count(&self) -> usize;

    /// Find the first occurrence of `query` starting at or after `from` (no wraparound).
    fn locate(&self, query: &SearchQuery, from: usize) -> Option<Span>;

    /// Every non-overlapping occurrence of `query`, left to right.
    fn locate_all(&self, query: &SearchQuery) -> Vec<Span> {
        let mut out = Vec::new();
        let mut from = 0;
        while let Some(span) = self.locate(query, from) {
            from = span.end;
            out.push(span);
        }
        out
    }

    /// Text covered by `span` (clamped to the document).
    fn text_of(&self, span: Span) -> String;

    /// Replace the text covered by `span` with `text`.
    ///
    /// Returns the span of the inserted text in the post-edit document.
    fn replace_span(&mut self, span: Span, text: &str) -> Result<Span, DocumentError>;

    /// Start grouping subsequent edits into one undo unit.
    fn begin_edit_group(&mut self) -> Result<(), DocumentError>;

    /// Commit the open edit group.
    fn end_edit_group(&mut self) -> Result<(), DocumentError>;

    /// Roll back every edit made since `begin_edit_group` and close the group.
    ///
    /// Does nothing if no group is open.
    fn abort_edit_group(&mut self);

    /// Current selection (or caret).
    fn selection(&self) -> Cursor;

    /// Replace the current selection.
    fn set_selection(&mut self, cursor: Cursor);

    /// Number of highlightable blocks.
    fn block_count(&self) -> usize;

    /// Block at `index`.
    fn block(&self, index: usize) -> Option<Block>;

    /// Store the highlight spans of block `index`, replacing any previous ones.
    fn set_block_highlights(&mut self, index: usize, spans: Vec<HighlightSpan>);

    /// Drain the indices of blocks edited since the previous call, in ascending order.
    fn take_dirty_blocks(&mut self) -> Vec<usize>;
}
