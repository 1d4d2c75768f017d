//! Literal, case-sensitive search with a single wraparound.
//!
//! Queries are plain substrings: the literal is escaped and compiled into a regex once, so
//! repeated searches (e.g. a replace-all loop) never recompile. All inputs and outputs are
//! character offsets.

use regex::{Regex, RegexBuilder};

use crate::document::{Cursor, Document, Span};
use crate::error::FindReplaceError;

/// A validated, non-empty literal search string.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    literal: String,
    matcher: Regex,
}

impl SearchQuery {
    /// Validate and compile `literal`.
    ///
    /// Returns [`FindReplaceError::InvalidQuery`] for an empty string.
    pub fn new(literal: impl Into<String>) -> Result<Self, FindReplaceError> {
        let literal = literal.into();
        if literal.is_empty() {
            return Err(FindReplaceError::InvalidQuery);
        }

        let matcher = RegexBuilder::new(&regex::escape(&literal))
            .case_insensitive(false)
            .build()
            .map_err(|err| FindReplaceError::QueryCompile(err.to_string()))?;

        Ok(Self { literal, matcher })
    }

    /// The literal text being searched for.
    pub fn as_str(&self) -> &str {
        &self.literal
    }

    /// Length of the literal in characters.
    pub fn char_len(&self) -> usize {
        self.literal.chars().count()
    }

    /// Returns `true` if `text` is exactly the query.
    pub fn is_exact(&self, text: &str) -> bool {
        self.literal == text
    }

    /// First match in `haystack`, as a **character** span relative to the start of `haystack`.
    pub fn find_in(&self, haystack: &str) -> Option<Span> {
        let m = self.matcher.find(haystack)?;
        let start = haystack[..m.start()].chars().count();
        Some(Span {
            start,
            end: start + self.char_len(),
        })
    }

    /// Every non-overlapping match in `haystack`, left to right, as character spans.
    pub fn find_all_in(&self, haystack: &str) -> Vec<Span> {
        let char_len = self.char_len();
        let mut chars_before = 0usize;
        let mut byte_pos = 0usize;

        self.matcher
            .find_iter(haystack)
            .map(|m| {
                chars_before += haystack[byte_pos..m.start()].chars().count();
                byte_pos = m.start();
                Span {
                    start: chars_before,
                    end: chars_before + char_len,
                }
            })
            .collect()
    }
}

/// Outcome of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    /// The match span; hosts usually select it.
    Found(Cursor),
    /// The query does not occur in the document.
    NotFound,
}

impl MatchResult {
    /// The matched span, if any.
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::Found(span) => Some(*span),
            Self::NotFound => None,
        }
    }

    /// Returns `true` for [`MatchResult::Found`].
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl From<Option<Span>> for MatchResult {
    fn from(value: Option<Span>) -> Self {
        value.map_or(Self::NotFound, Self::Found)
    }
}

/// First occurrence of `query` starting at or after `from`. Never wraps.
pub fn find_forward<D: Document + ?Sized>(
    document: &D,
    from: usize,
    query: &SearchQuery,
) -> Option<Span> {
    let from = from.min(document.char_count());
    document.locate(query, from)
}

/// Find the next occurrence of `query`, scanning forward from `start_offset` and wrapping once.
///
/// - Matches at or after `start_offset` always win.
/// - Otherwise the first match that *starts* before `start_offset` is returned.
/// - `start_offset` past the end of the document is treated as the end.
pub fn find_next<D: Document + ?Sized>(
    document: &D,
    start_offset: usize,
    query: &SearchQuery,
) -> MatchResult {
    let start_offset = start_offset.min(document.char_count());

    if let Some(span) = document.locate(query, start_offset) {
        return MatchResult::Found(span);
    }
    if start_offset == 0 {
        return MatchResult::NotFound;
    }

    document
        .locate(query, 0)
        .filter(|span| span.start < start_offset)
        .into()
}

/// Where a "find next" continues from: the end of a selection, or the caret.
pub fn search_origin(cursor: Cursor) -> usize {
    cursor.end
}

/// Find the next occurrence after the current selection and select it.
///
/// The selection is left unchanged when nothing is found.
pub fn select_next<D: Document + ?Sized>(document: &mut D, query: &SearchQuery) -> MatchResult {
    let origin = search_origin(document.selection());
    let result = find_next(document, origin, query);

    match result {
        MatchResult::Found(span) => {
            tracing::debug!(
                query = query.as_str(),
                start = span.start,
                end = span.end,
                "search match selected"
            );
            document.set_selection(span);
        }
        MatchResult::NotFound => {
            tracing::debug!(query = query.as_str(), "search found no match");
        }
    }

    result
}
