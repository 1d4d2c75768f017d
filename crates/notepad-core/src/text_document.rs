//! Rope-backed reference [`Document`].
//!
//! `TextDocument` keeps the text in a [`ropey::Rope`] (O(log N) char/line conversions), records
//! every mutation for grouped undo/redo, and tracks which lines ("blocks") were touched so that a
//! [`BlockHighlighter`] only re-scans what changed.

use std::borrow::Cow;
use std::collections::BTreeSet;

use ropey::Rope;

use crate::delta::{TextDelta, TextDeltaEdit};
use crate::document::{Cursor, Document, Span};
use crate::error::DocumentError;
use crate::highlight::{Block, BlockHighlighter, HighlightSpan, StyleId};
use crate::search::SearchQuery;
use crate::words;

const MAX_UNDO: usize = 1000;

#[derive(Debug, Clone)]
struct UndoStep {
    group_id: usize,
    edits: Vec<TextDeltaEdit>,
    before_selection: Cursor,
    after_selection: Cursor,
}

#[derive(Debug)]
struct UndoRedoManager {
    undo_stack: Vec<UndoStep>,
    redo_stack: Vec<UndoStep>,
    max_undo: usize,
    next_group_id: usize,
}

impl UndoRedoManager {
    fn new(max_undo: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_undo,
            next_group_id: 0,
        }
    }

    fn push(
        &mut self,
        edits: Vec<TextDeltaEdit>,
        before_selection: Cursor,
        after_selection: Cursor,
    ) -> usize {
        self.redo_stack.clear();
        if self.undo_stack.len() >= self.max_undo {
            self.undo_stack.remove(0);
        }

        let group_id = self.next_group_id;
        self.next_group_id = self.next_group_id.wrapping_add(1);
        self.undo_stack.push(UndoStep {
            group_id,
            edits,
            before_selection,
            after_selection,
        });
        group_id
    }
}

#[derive(Debug)]
struct OpenGroup {
    edits: Vec<TextDeltaEdit>,
    before_selection: Cursor,
    before_char_count: usize,
}

/// An in-memory document with selection, grouped undo and per-line highlight storage.
///
/// # Example
///
/// ```rust
/// use notepad_core::{Document, Span, TextDocument};
///
/// let mut doc = TextDocument::new("Hello World");
/// doc.replace_span(Span::new(6, 11), "Notes").unwrap();
/// assert_eq!(doc.text(), "Hello Notes");
///
/// doc.undo().unwrap();
/// assert_eq!(doc.text(), "Hello World");
/// ```
#[derive(Debug)]
pub struct TextDocument {
    rope: Rope,
    selection: Cursor,
    undo_redo: UndoRedoManager,
    open_group: Option<OpenGroup>,
    /// One entry per line, block-relative offsets.
    block_highlights: Vec<Vec<HighlightSpan>>,
    dirty_blocks: BTreeSet<usize>,
    last_text_delta: Option<TextDelta>,
}

impl TextDocument {
    /// Create a document holding `text`, caret at the start.
    ///
    /// Every block starts dirty so the first highlight refresh covers the whole document.
    pub fn new(text: &str) -> Self {
        let rope = Rope::from_str(text);
        let line_count = rope.len_lines();
        Self {
            rope,
            selection: Cursor::caret(0),
            undo_redo: UndoRedoManager::new(MAX_UNDO),
            open_group: None,
            block_highlights: vec![Vec::new(); line_count],
            dirty_blocks: (0..line_count).collect(),
            last_text_delta: None,
        }
    }

    /// Complete document text.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Number of whitespace-delimited words in the document.
    pub fn word_count(&self) -> usize {
        let text: Cow<'_, str> = self.rope.slice(..).into();
        words::count_words(&text)
    }

    /// Returns `true` if an edit group is open.
    pub fn in_edit_group(&self) -> bool {
        self.open_group.is_some()
    }

    /// Can undo
    pub fn can_undo(&self) -> bool {
        !self.undo_redo.undo_stack.is_empty()
    }

    /// Can redo
    pub fn can_redo(&self) -> bool {
        !self.undo_redo.redo_stack.is_empty()
    }

    /// Number of undo steps (one per edit group or ungrouped edit).
    pub fn undo_depth(&self) -> usize {
        self.undo_redo.undo_stack.len()
    }

    /// Revert the most recent undo step.
    ///
    /// Returns `Ok(false)` if there is nothing to undo. Undo is rejected while an edit group is
    /// open.
    pub fn undo(&mut self) -> Result<bool, DocumentError> {
        if self.open_group.is_some() {
            return Err(DocumentError::GroupAlreadyOpen);
        }
        let Some(step) = self.undo_redo.undo_stack.pop() else {
            return Ok(false);
        };

        let before_char_count = self.rope.len_chars();
        let mut inverse = Vec::with_capacity(step.edits.len());
        for edit in step.edits.iter().rev() {
            let back = edit.inverse();
            self.apply_raw(back.start, back.deleted_len(), &back.inserted_text);
            inverse.push(back);
        }
        self.selection = step.before_selection;
        self.last_text_delta = Some(TextDelta {
            before_char_count,
            after_char_count: self.rope.len_chars(),
            edits: inverse,
            undo_group_id: Some(step.group_id),
        });

        self.undo_redo.redo_stack.push(step);
        Ok(true)
    }

    /// Re-apply the most recently undone step.
    pub fn redo(&mut self) -> Result<bool, DocumentError> {
        if self.open_group.is_some() {
            return Err(DocumentError::GroupAlreadyOpen);
        }
        let Some(step) = self.undo_redo.redo_stack.pop() else {
            return Ok(false);
        };

        let before_char_count = self.rope.len_chars();
        for edit in &step.edits {
            self.apply_raw(edit.start, edit.deleted_len(), &edit.inserted_text);
        }
        self.selection = step.after_selection;
        self.last_text_delta = Some(TextDelta {
            before_char_count,
            after_char_count: self.rope.len_chars(),
            edits: step.edits.clone(),
            undo_group_id: Some(step.group_id),
        });

        self.undo_redo.undo_stack.push(step);
        Ok(true)
    }

    /// The change produced by the most recent committed mutation, undo or redo.
    pub fn last_text_delta(&self) -> Option<&TextDelta> {
        self.last_text_delta.as_ref()
    }

    /// Take the most recent change, leaving `None`.
    pub fn take_last_text_delta(&mut self) -> Option<TextDelta> {
        self.last_text_delta.take()
    }

    /// Stored spans of block `index` (block-relative offsets).
    pub fn block_highlights(&self, index: usize) -> &[HighlightSpan] {
        self.block_highlights
            .get(index)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every stored span converted to document-absolute offsets, in document order.
    pub fn absolute_highlights(&self) -> Vec<(Span, StyleId)> {
        let mut out = Vec::new();
        for (index, spans) in self.block_highlights.iter().enumerate() {
            if spans.is_empty() {
                continue;
            }
            let base = self.rope.line_to_char(index);
            out.extend(
                spans
                    .iter()
                    .map(|s| (Span::new(base + s.offset, base + s.end()), s.style)),
            );
        }
        out
    }

    /// Re-highlight the blocks edited since the previous refresh.
    ///
    /// Returns the number of blocks that were re-scanned.
    pub fn refresh_highlights<H: BlockHighlighter + ?Sized>(&mut self, highlighter: &H) -> usize {
        let dirty = self.take_dirty_blocks();
        for &index in &dirty {
            if let Some(block) = self.block(index) {
                let spans = highlighter.highlight_block(&block.text);
                self.set_block_highlights(index, spans);
            }
        }
        dirty.len()
    }

    /// Re-highlight every block, regardless of dirty state.
    pub fn rehighlight_all<H: BlockHighlighter + ?Sized>(&mut self, highlighter: &H) -> usize {
        self.dirty_blocks = (0..self.line_count()).collect();
        self.refresh_highlights(highlighter)
    }

    /// Replace `delete_len` chars at `start` with `text`, keeping selection, block highlights and
    /// dirty marks in step with the new line structure. No undo bookkeeping.
    fn apply_raw(&mut self, start: usize, delete_len: usize, text: &str) {
        let len = self.rope.len_chars();
        let start = start.min(len);
        let end = (start + delete_len).min(len);
        let inserted_len = text.chars().count();

        // A "\r" just before `start` can pair with a "\n" on either side of the edit, so its line
        // belongs to the edited window.
        let first_line = if start > 0 && self.rope.char(start - 1) == '\r' {
            self.rope.char_to_line(start - 1)
        } else {
            self.rope.char_to_line(start)
        };
        let last_old = self.rope.char_to_line(end);
        // Lines after the window keep their text and breaks.
        let tail_lines = self.rope.len_lines() - last_old - 1;

        if start < end {
            self.rope.remove(start..end);
        }
        if !text.is_empty() {
            self.rope.insert(start, text);
        }

        let line_count = self.rope.len_lines();
        let last_new = line_count.saturating_sub(tail_lines + 1).max(first_line);

        let replaced_end = (last_old + 1).min(self.block_highlights.len());
        let replaced_start = first_line.min(replaced_end);
        self.block_highlights.splice(
            replaced_start..replaced_end,
            std::iter::repeat_with(Vec::new).take(last_new - first_line + 1),
        );
        self.block_highlights.resize_with(line_count, Vec::new);

        let shift = last_new as isize - last_old as isize;
        self.dirty_blocks = self
            .dirty_blocks
            .iter()
            .filter_map(|&block| {
                if block < first_line {
                    Some(block)
                } else if block <= last_old {
                    None
                } else {
                    Some((block as isize + shift) as usize)
                }
            })
            .chain(first_line..=last_new)
            .filter(|&block| block < line_count)
            .collect();

        self.selection = Span {
            start: shift_offset(self.selection.start, start, end, inserted_len),
            end: shift_offset(self.selection.end, start, end, inserted_len),
        };
    }
}

/// Map a pre-edit offset through the replacement of `start..end` by `inserted_len` chars.
fn shift_offset(offset: usize, start: usize, end: usize, inserted_len: usize) -> usize {
    if offset <= start {
        offset
    } else if offset >= end {
        offset - (end - start) + inserted_len
    } else {
        start + inserted_len
    }
}

fn strip_line_break(mut line: String) -> String {
    if line.ends_with("\r\n") {
        line.truncate(line.len() - 2);
    } else if line.ends_with([
        '\n', '\r', '\u{000B}', '\u{000C}', '\u{0085}', '\u{2028}', '\u{2029}',
    ]) {
        line.pop();
    }
    line
}

impl Default for TextDocument {
    fn default() -> Self {
        Self::new("")
    }
}

impl From<&str> for TextDocument {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl Document for TextDocument {
    fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    fn locate(&self, query: &SearchQuery, from: usize) -> Option<Span> {
        let from = from.min(self.rope.len_chars());
        let haystack: Cow<'_, str> = self.rope.slice(from..).into();
        let found = query.find_in(&haystack)?;
        Some(Span {
            start: from + found.start,
            end: from + found.end,
        })
    }

    fn locate_all(&self, query: &SearchQuery) -> Vec<Span> {
        let text: Cow<'_, str> = self.rope.slice(..).into();
        query.find_all_in(&text)
    }

    fn text_of(&self, span: Span) -> String {
        let len = self.rope.len_chars();
        let start = span.start.min(len);
        let end = span.end.clamp(start, len);
        self.rope.slice(start..end).to_string()
    }

    fn replace_span(&mut self, span: Span, text: &str) -> Result<Span, DocumentError> {
        let len = self.rope.len_chars();
        if span.start > span.end || span.end > len {
            return Err(DocumentError::InvalidSpan {
                start: span.start,
                end: span.end,
                len,
            });
        }

        let edit = TextDeltaEdit {
            start: span.start,
            deleted_text: self.text_of(span),
            inserted_text: text.to_string(),
        };
        let before_selection = self.selection;
        self.apply_raw(span.start, span.len(), text);
        let inserted = edit.inserted_span();

        match self.open_group.as_mut() {
            Some(group) => group.edits.push(edit),
            None => {
                let group_id = self.undo_redo.push(
                    vec![edit.clone()],
                    before_selection,
                    self.selection,
                );
                self.last_text_delta = Some(TextDelta {
                    before_char_count: len,
                    after_char_count: self.rope.len_chars(),
                    edits: vec![edit],
                    undo_group_id: Some(group_id),
                });
            }
        }

        Ok(inserted)
    }

    fn begin_edit_group(&mut self) -> Result<(), DocumentError> {
        if self.open_group.is_some() {
            return Err(DocumentError::GroupAlreadyOpen);
        }
        self.open_group = Some(OpenGroup {
            edits: Vec::new(),
            before_selection: self.selection,
            before_char_count: self.rope.len_chars(),
        });
        Ok(())
    }

    fn end_edit_group(&mut self) -> Result<(), DocumentError> {
        let group = self.open_group.take().ok_or(DocumentError::NoOpenGroup)?;
        if group.edits.is_empty() {
            return Ok(());
        }

        let group_id =
            self.undo_redo
                .push(group.edits.clone(), group.before_selection, self.selection);
        self.last_text_delta = Some(TextDelta {
            before_char_count: group.before_char_count,
            after_char_count: self.rope.len_chars(),
            edits: group.edits,
            undo_group_id: Some(group_id),
        });
        Ok(())
    }

    fn abort_edit_group(&mut self) {
        let Some(group) = self.open_group.take() else {
            return;
        };
        for edit in group.edits.iter().rev() {
            self.apply_raw(edit.start, edit.inserted_len(), &edit.deleted_text);
        }
        self.selection = group.before_selection;
    }

    fn selection(&self) -> Cursor {
        self.selection
    }

    fn set_selection(&mut self, cursor: Cursor) {
        let len = self.rope.len_chars();
        self.selection = Span::new(cursor.start.min(len), cursor.end.min(len));
    }

    fn block_count(&self) -> usize {
        self.rope.len_lines()
    }

    fn block(&self, index: usize) -> Option<Block> {
        if index >= self.rope.len_lines() {
            return None;
        }
        Some(Block {
            index,
            base_offset: self.rope.line_to_char(index),
            text: strip_line_break(self.rope.line(index).to_string()),
        })
    }

    fn set_block_highlights(&mut self, index: usize, mut spans: Vec<HighlightSpan>) {
        let Some(slot) = self.block_highlights.get_mut(index) else {
            return;
        };
        spans.sort_by_key(|span| span.offset);
        *slot = spans;
    }

    fn take_dirty_blocks(&mut self) -> Vec<usize> {
        std::mem::take(&mut self.dirty_blocks).into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::SPELLING_ERROR_STYLE_ID;

    struct MarkFirstWord;

    impl BlockHighlighter for MarkFirstWord {
        fn highlight_block(&self, text: &str) -> Vec<HighlightSpan> {
            words::words(text)
                .next()
                .map(|w| HighlightSpan::new(w.offset, w.char_len(), SPELLING_ERROR_STYLE_ID))
                .into_iter()
                .collect()
        }
    }

    #[test]
    fn test_replace_span_returns_inserted_span() {
        let mut doc = TextDocument::new("Hello World");
        let inserted = doc.replace_span(Span::new(6, 11), "Rust!").unwrap();
        assert_eq!(inserted, Span::new(6, 11));
        assert_eq!(doc.text(), "Hello Rust!");

        let inserted = doc.replace_span(Span::new(0, 5), "").unwrap();
        assert_eq!(inserted, Span::caret(0));
        assert_eq!(doc.text(), " Rust!");
    }

    #[test]
    fn test_replace_span_rejects_out_of_range() {
        let mut doc = TextDocument::new("abc");
        assert_eq!(
            doc.replace_span(Span::new(2, 9), "x"),
            Err(DocumentError::InvalidSpan {
                start: 2,
                end: 9,
                len: 3
            })
        );
        assert_eq!(doc.text(), "abc");
        assert!(!doc.can_undo());
    }

    #[test]
    fn test_ungrouped_edits_are_separate_undo_steps() {
        let mut doc = TextDocument::new("abc");
        doc.replace_span(Span::caret(3), "d").unwrap();
        doc.replace_span(Span::caret(4), "e").unwrap();
        assert_eq!(doc.undo_depth(), 2);

        assert!(doc.undo().unwrap());
        assert_eq!(doc.text(), "abcd");
        assert!(doc.undo().unwrap());
        assert_eq!(doc.text(), "abc");
        assert!(!doc.undo().unwrap());

        assert!(doc.redo().unwrap());
        assert!(doc.redo().unwrap());
        assert_eq!(doc.text(), "abcde");
        assert!(!doc.redo().unwrap());
    }

    #[test]
    fn test_edit_group_is_one_undo_step() {
        let mut doc = TextDocument::new("one two three");
        doc.begin_edit_group().unwrap();
        doc.replace_span(Span::new(0, 3), "1").unwrap();
        doc.replace_span(Span::new(2, 5), "2").unwrap();
        doc.end_edit_group().unwrap();

        assert_eq!(doc.text(), "1 2 three");
        assert_eq!(doc.undo_depth(), 1);
        let delta = doc.last_text_delta().unwrap();
        assert_eq!(delta.edits.len(), 2);
        assert_eq!(delta.before_char_count, 13);
        assert_eq!(delta.after_char_count, 9);

        doc.undo().unwrap();
        assert_eq!(doc.text(), "one two three");
        doc.redo().unwrap();
        assert_eq!(doc.text(), "1 2 three");
    }

    #[test]
    fn test_nested_group_is_rejected() {
        let mut doc = TextDocument::new("x");
        doc.begin_edit_group().unwrap();
        assert_eq!(doc.begin_edit_group(), Err(DocumentError::GroupAlreadyOpen));
        assert_eq!(doc.undo(), Err(DocumentError::GroupAlreadyOpen));
        doc.end_edit_group().unwrap();
        assert_eq!(doc.end_edit_group(), Err(DocumentError::NoOpenGroup));
    }

    #[test]
    fn test_empty_group_records_nothing() {
        let mut doc = TextDocument::new("x");
        doc.begin_edit_group().unwrap();
        doc.end_edit_group().unwrap();
        assert!(!doc.can_undo());
        assert!(doc.last_text_delta().is_none());
    }

    #[test]
    fn test_abort_group_rolls_back() {
        let mut doc = TextDocument::new("a\nb\nc");
        doc.set_selection(Span::new(2, 3));
        doc.begin_edit_group().unwrap();
        doc.replace_span(Span::new(0, 1), "A\nA").unwrap();
        doc.replace_span(Span::new(4, 5), "").unwrap();
        doc.abort_edit_group();

        assert_eq!(doc.text(), "a\nb\nc");
        assert_eq!(doc.selection(), Span::new(2, 3));
        assert!(!doc.in_edit_group());
        assert!(!doc.can_undo());
    }

    #[test]
    fn test_selection_follows_edits() {
        let mut doc = TextDocument::new("hello world");
        doc.set_selection(Span::new(6, 11));
        doc.replace_span(Span::new(0, 5), "hi").unwrap();
        assert_eq!(doc.selection(), Span::new(3, 8));
        assert_eq!(doc.text_of(doc.selection()), "world");

        doc.set_selection(Span::new(100, 200));
        assert_eq!(doc.selection(), Span::caret(8));
    }

    #[test]
    fn test_blocks_strip_line_breaks() {
        let doc = TextDocument::new("first\r\nsecond\nthird");
        assert_eq!(doc.block_count(), 3);
        let block = doc.block(1).unwrap();
        assert_eq!(block.text, "second");
        assert_eq!(block.base_offset, 7);
        assert_eq!(doc.block(2).unwrap().text, "third");
        assert!(doc.block(3).is_none());
    }

    #[test]
    fn test_new_document_is_fully_dirty() {
        let mut doc = TextDocument::new("a\nb\nc");
        assert_eq!(doc.take_dirty_blocks(), vec![0, 1, 2]);
        assert!(doc.take_dirty_blocks().is_empty());
    }

    #[test]
    fn test_edit_marks_only_touched_blocks() {
        let mut doc = TextDocument::new("a\nb\nc\nd");
        doc.take_dirty_blocks();

        doc.replace_span(Span::new(2, 3), "B").unwrap();
        assert_eq!(doc.take_dirty_blocks(), vec![1]);

        // Inserting a line break splits block 1 into two.
        doc.replace_span(Span::caret(3), "\nX").unwrap();
        assert_eq!(doc.take_dirty_blocks(), vec![1, 2]);
        assert_eq!(doc.block_count(), 5);
    }

    #[test]
    fn test_dirty_marks_shift_with_removed_lines() {
        let mut doc = TextDocument::new("a\nb\nc\nd");
        doc.take_dirty_blocks();
        doc.replace_span(Span::new(6, 7), "D").unwrap(); // block 3 dirty
        doc.replace_span(Span::new(0, 2), "").unwrap(); // remove line 0

        assert_eq!(doc.text(), "b\nc\nD");
        assert_eq!(doc.take_dirty_blocks(), vec![0, 2]);
    }

    #[test]
    fn test_delete_joining_cr_and_lf() {
        let mut doc = TextDocument::new("a\rX\nb");
        assert_eq!(doc.refresh_highlights(&MarkFirstWord), 3);

        doc.replace_span(Span::new(2, 3), "").unwrap();
        assert_eq!(doc.text(), "a\r\nb");
        assert_eq!(doc.block_count(), 2);
        assert_eq!(doc.block_highlights.len(), 2);
        assert_eq!(doc.take_dirty_blocks(), vec![0]);
        // "b" moved up a line with its spans.
        assert_eq!(doc.block_highlights(1), &[HighlightSpan::new(0, 1, SPELLING_ERROR_STYLE_ID)]);

        assert!(doc.undo().unwrap());
        assert_eq!(doc.text(), "a\rX\nb");
        assert_eq!(doc.block_count(), 3);
        assert_eq!(doc.block_highlights.len(), 3);
        assert_eq!(doc.take_dirty_blocks(), vec![0, 1]);
        assert_eq!(doc.block_highlights(2), &[HighlightSpan::new(0, 1, SPELLING_ERROR_STYLE_ID)]);
    }

    #[test]
    fn test_delete_leaving_only_crlf() {
        let mut doc = TextDocument::new("\rX\n");
        doc.replace_span(Span::new(1, 2), "").unwrap();
        assert_eq!(doc.text(), "\r\n");
        assert_eq!(doc.block_count(), 2);
        assert_eq!(doc.block_highlights.len(), 2);
    }

    #[test]
    fn test_insert_lf_after_lone_cr() {
        let mut doc = TextDocument::new("a\rb");
        doc.take_dirty_blocks();

        doc.replace_span(Span::caret(2), "\n").unwrap();
        assert_eq!(doc.text(), "a\r\nb");
        assert_eq!(doc.block_count(), 2);
        assert_eq!(doc.block_highlights.len(), 2);
        assert_eq!(doc.take_dirty_blocks(), vec![0, 1]);

        assert!(doc.undo().unwrap());
        assert_eq!(doc.text(), "a\rb");
        assert_eq!(doc.block_count(), 2);
        assert_eq!(doc.block_highlights.len(), 2);
        assert_eq!(doc.take_dirty_blocks(), vec![0, 1]);
    }

    #[test]
    fn test_insert_splitting_crlf() {
        let mut doc = TextDocument::new("a\r\nb");
        doc.take_dirty_blocks();

        doc.replace_span(Span::caret(2), "X").unwrap();
        assert_eq!(doc.text(), "a\rX\nb");
        assert_eq!(doc.block_count(), 3);
        assert_eq!(doc.block_highlights.len(), 3);
        assert_eq!(doc.take_dirty_blocks(), vec![0, 1]);

        assert!(doc.undo().unwrap());
        assert_eq!(doc.text(), "a\r\nb");
        assert_eq!(doc.block_count(), 2);
        assert_eq!(doc.block_highlights.len(), 2);
        assert_eq!(doc.take_dirty_blocks(), vec![0]);
    }

    #[test]
    fn test_refresh_highlights_only_rescans_dirty_blocks() {
        let mut doc = TextDocument::new("alpha beta\ngamma delta");
        assert_eq!(doc.refresh_highlights(&MarkFirstWord), 2);
        assert_eq!(
            doc.absolute_highlights(),
            vec![
                (Span::new(0, 5), SPELLING_ERROR_STYLE_ID),
                (Span::new(11, 16), SPELLING_ERROR_STYLE_ID),
            ]
        );

        assert_eq!(doc.refresh_highlights(&MarkFirstWord), 0);

        doc.replace_span(Span::new(11, 11), "  ").unwrap();
        assert_eq!(doc.refresh_highlights(&MarkFirstWord), 1);
        assert_eq!(doc.block_highlights(1), &[HighlightSpan::new(2, 5, SPELLING_ERROR_STYLE_ID)]);
        assert_eq!(doc.block_highlights(0), &[HighlightSpan::new(0, 5, SPELLING_ERROR_STYLE_ID)]);
    }

    #[test]
    fn test_highlights_shift_when_lines_are_inserted() {
        let mut doc = TextDocument::new("one\ntwo");
        doc.refresh_highlights(&MarkFirstWord);

        doc.replace_span(Span::caret(0), "zero\n").unwrap();
        assert_eq!(doc.block_count(), 3);
        // Old block 1 ("two") moved to index 2 and kept its spans.
        assert_eq!(doc.block_highlights(2), &[HighlightSpan::new(0, 3, SPELLING_ERROR_STYLE_ID)]);
        assert_eq!(doc.take_dirty_blocks(), vec![0, 1]);
    }

    #[test]
    fn test_rehighlight_all() {
        let mut doc = TextDocument::new("x\ny\nz");
        doc.take_dirty_blocks();
        assert_eq!(doc.rehighlight_all(&MarkFirstWord), 3);
        assert_eq!(doc.absolute_highlights().len(), 3);
    }

    #[test]
    fn test_word_count() {
        let doc = TextDocument::new("The quick\nbrown  fox.\n");
        assert_eq!(doc.word_count(), 4);
        assert_eq!(TextDocument::default().word_count(), 0);
    }
}
