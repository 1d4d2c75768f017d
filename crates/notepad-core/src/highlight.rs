//! Block highlighting interface.
//!
//! The document re-scans text one [`Block`] (line) at a time. After an edit the document marks the
//! touched blocks dirty; the host then hands those blocks to a [`BlockHighlighter`], which returns
//! block-relative [`HighlightSpan`]s. The document stores them per block and converts them to
//! absolute offsets on request.
//!
//! Spans are never diffed against a previous run: each call replaces the block's spans wholesale.

/// Style ID type.
///
/// These are only identifiers. The UI/theme layer maps them to concrete formats.
pub type StyleId = u32;

/// Built-in style for misspelled words.
///
/// Hosts typically render this as a red spell-check (wavy) underline.
pub const SPELLING_ERROR_STYLE_ID: StyleId = 0x0500_0001;

/// One annotation inside a block: `length` chars starting at `offset` (block-relative).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSpan {
    /// Start offset inside the block, in characters.
    pub offset: usize,
    /// Length in characters.
    pub length: usize,
    /// Style to apply.
    pub style: StyleId,
}

impl HighlightSpan {
    /// Create a new span.
    pub fn new(offset: usize, length: usize, style: StyleId) -> Self {
        Self {
            offset,
            length,
            style,
        }
    }

    /// Exclusive end offset inside the block.
    pub fn end(&self) -> usize {
        self.offset + self.length
    }
}

/// A contiguous unit of document text that is re-highlighted independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Zero-based block (line) index.
    pub index: usize,
    /// Document-absolute character offset of the first character of the block.
    pub base_offset: usize,
    /// Block text, without the trailing line break.
    pub text: String,
}

/// Something that turns a block of text into highlight spans.
pub trait BlockHighlighter {
    /// Compute the spans for `text`. Offsets are relative to the start of `text`.
    fn highlight_block(&self, text: &str) -> Vec<HighlightSpan>;
}

impl<H: BlockHighlighter + ?Sized> BlockHighlighter for &H {
    fn highlight_block(&self, text: &str) -> Vec<HighlightSpan> {
        (**self).highlight_block(text)
    }
}
