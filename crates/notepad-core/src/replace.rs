//! Replace-current and replace-all on top of [`search`](crate::search).
//!
//! Offsets are never carried across an edit this module did not make: every search result is
//! either applied or turned into a selection before the next search runs.

use crate::document::{Cursor, Document, Span};
use crate::error::FindReplaceError;
use crate::search::{self, MatchResult, SearchQuery};

/// Result of [`replace_current`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceOutcome {
    /// The selection matched and was replaced; holds the following occurrence (now selected).
    Replaced(MatchResult),
    /// The selection was not the query; nothing was replaced and a plain "find next" ran.
    NotReplacedButSearched(MatchResult),
}

impl ReplaceOutcome {
    /// Returns `true` if text was replaced.
    pub fn replaced(&self) -> bool {
        matches!(self, Self::Replaced(_))
    }

    /// The search result that was selected after the action.
    pub fn match_result(&self) -> MatchResult {
        match self {
            Self::Replaced(result) | Self::NotReplacedButSearched(result) => *result,
        }
    }
}

/// Replace `cursor` with `replacement` if it selects exactly `query`, then move to the next match.
///
/// - Matching selection: one edit (one undo step), then a wrapping search from the end of the
///   inserted text; the result is selected (caret after the replacement if nothing is left).
/// - Anything else (caret, different text): no edit; a wrapping search from the end of `cursor`
///   selects the next occurrence.
pub fn replace_current<D: Document + ?Sized>(
    document: &mut D,
    cursor: Cursor,
    query: &SearchQuery,
    replacement: &str,
) -> Result<ReplaceOutcome, FindReplaceError> {
    let selection_matches = !cursor.is_empty() && query.is_exact(&document.text_of(cursor));

    if !selection_matches {
        document.set_selection(cursor);
        let result = search::select_next(document, query);
        return Ok(ReplaceOutcome::NotReplacedButSearched(result));
    }

    let inserted = document.replace_span(cursor, replacement)?;
    document.set_selection(Cursor::caret(inserted.end));

    let next = search::find_next(document, inserted.end, query);
    if let MatchResult::Found(span) = next {
        document.set_selection(span);
    }

    tracing::debug!(
        query = query.as_str(),
        replacement,
        start = inserted.start,
        next_found = next.is_found(),
        "replaced current match"
    );

    Ok(ReplaceOutcome::Replaced(next))
}

/// Replace every occurrence of `query` with `replacement` inside one edit group.
///
/// Occurrences are collected once, before any edit, and applied left to right, so a replacement
/// that contains the query is never re-matched. The group is always closed, even with zero
/// matches. On any document failure the group is aborted, the document is left as it was, and
/// [`FindReplaceError::TransactionFailure`] is returned.
///
/// Returns the number of occurrences replaced.
pub fn replace_all<D: Document + ?Sized>(
    document: &mut D,
    query: &SearchQuery,
    replacement: &str,
) -> Result<usize, FindReplaceError> {
    let matches = document.locate_all(query);
    document.begin_edit_group()?;

    let replacement_len = replacement.chars().count() as isize;
    let mut shift = 0isize;
    let mut last_end = None;

    for found in &matches {
        let start = (found.start as isize + shift) as usize;
        let span = Span::new(start, start + found.len());
        let inserted = match document.replace_span(span, replacement) {
            Ok(inserted) => inserted,
            Err(err) => {
                document.abort_edit_group();
                tracing::warn!(query = query.as_str(), error = %err, "replace-all rolled back");
                return Err(err.into());
            }
        };
        shift += replacement_len - found.len() as isize;
        last_end = Some(inserted.end);
    }
    let replaced = matches.len();

    if let Some(end) = last_end {
        document.set_selection(Cursor::caret(end));
    }

    if let Err(err) = document.end_edit_group() {
        document.abort_edit_group();
        tracing::warn!(query = query.as_str(), error = %err, "replace-all rolled back");
        return Err(err.into());
    }

    tracing::debug!(
        query = query.as_str(),
        replacement,
        replaced,
        "replace-all finished"
    );
    Ok(replaced)
}

/// [`replace_current`] for a raw query string, using the document's current selection.
///
/// An empty `query` returns [`FindReplaceError::InvalidQuery`] without touching the document.
pub fn replace_selection<D: Document + ?Sized>(
    document: &mut D,
    query: &str,
    replacement: &str,
) -> Result<ReplaceOutcome, FindReplaceError> {
    let query = SearchQuery::new(query)?;
    let cursor = document.selection();
    replace_current(document, cursor, &query, replacement)
}

/// [`replace_all`] for a raw query string.
///
/// An empty `query` returns [`FindReplaceError::InvalidQuery`] without touching the document.
/// That error takes the place of an `Ok(0)` result, so hosts can tell "nothing to search for"
/// apart from "no occurrences" and show the matching status message.
pub fn replace_all_str<D: Document + ?Sized>(
    document: &mut D,
    query: &str,
    replacement: &str,
) -> Result<usize, FindReplaceError> {
    let query = SearchQuery::new(query)?;
    replace_all(document, &query, replacement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Span;
    use crate::TextDocument;

    fn query(text: &str) -> SearchQuery {
        SearchQuery::new(text).unwrap()
    }

    #[test]
    fn test_replace_all_basic() {
        let mut doc = TextDocument::new("cat sat on the cat mat");
        assert_eq!(replace_all(&mut doc, &query("cat"), "dog"), Ok(2));
        assert_eq!(doc.text(), "dog sat on the dog mat");
    }

    #[test]
    fn test_replace_all_replacement_contains_query() {
        let mut doc = TextDocument::new("banana");
        assert_eq!(replace_all(&mut doc, &query("a"), "aa"), Ok(3));
        assert_eq!(doc.text(), "baanaanaa");
    }

    #[test]
    fn test_replace_all_with_empty_replacement_deletes() {
        let mut doc = TextDocument::new("a-b-c-");
        assert_eq!(replace_all(&mut doc, &query("-"), ""), Ok(3));
        assert_eq!(doc.text(), "abc");
    }

    #[test]
    fn test_replace_all_identity_still_counts() {
        let mut doc = TextDocument::new("xo xo xo");
        assert_eq!(replace_all(&mut doc, &query("xo"), "xo"), Ok(3));
        assert_eq!(doc.text(), "xo xo xo");
    }

    #[test]
    fn test_replace_all_zero_matches_closes_group() {
        let mut doc = TextDocument::new("nothing here");
        doc.set_selection(Span::new(0, 7));
        assert_eq!(replace_all(&mut doc, &query("zzz"), "y"), Ok(0));
        assert!(!doc.in_edit_group());
        assert!(!doc.can_undo());
        assert_eq!(doc.selection(), Span::new(0, 7));
    }

    #[test]
    fn test_replace_all_places_caret_after_last_replacement() {
        let mut doc = TextDocument::new("a1 a2 a3");
        replace_all(&mut doc, &query("a"), "bb").unwrap();
        assert_eq!(doc.text(), "bb1 bb2 bb3");
        assert_eq!(doc.selection(), Span::caret(10));
    }

    #[test]
    fn test_replace_all_inside_open_group_fails_cleanly() {
        let mut doc = TextDocument::new("cat cat");
        doc.begin_edit_group().unwrap();
        assert_eq!(
            replace_all(&mut doc, &query("cat"), "dog"),
            Err(FindReplaceError::TransactionFailure(
                crate::DocumentError::GroupAlreadyOpen
            ))
        );
        assert_eq!(doc.text(), "cat cat");
    }

    #[test]
    fn test_replace_current_replaces_matching_selection() {
        let mut doc = TextDocument::new("foo x foo");
        let outcome = replace_current(&mut doc, Span::new(0, 3), &query("foo"), "bar").unwrap();

        assert_eq!(doc.text(), "bar x foo");
        assert_eq!(outcome, ReplaceOutcome::Replaced(MatchResult::Found(Span::new(6, 9))));
        assert_eq!(doc.selection(), Span::new(6, 9));
        assert_eq!(doc.undo_depth(), 1);
    }

    #[test]
    fn test_replace_current_last_occurrence_leaves_caret() {
        let mut doc = TextDocument::new("one foo");
        let outcome = replace_current(&mut doc, Span::new(4, 7), &query("foo"), "bar").unwrap();

        assert_eq!(doc.text(), "one bar");
        assert_eq!(outcome, ReplaceOutcome::Replaced(MatchResult::NotFound));
        assert_eq!(doc.selection(), Span::caret(7));
    }

    #[test]
    fn test_replace_current_non_matching_selection_only_searches() {
        let mut doc = TextDocument::new("foo fob foo");
        let outcome = replace_current(&mut doc, Span::new(4, 7), &query("foo"), "bar").unwrap();

        assert_eq!(doc.text(), "foo fob foo");
        assert!(!outcome.replaced());
        assert_eq!(outcome.match_result(), MatchResult::Found(Span::new(8, 11)));
        assert_eq!(doc.selection(), Span::new(8, 11));
        assert!(!doc.can_undo());
    }

    #[test]
    fn test_replace_current_caret_only_searches() {
        let mut doc = TextDocument::new("foo foo");
        let outcome = replace_current(&mut doc, Span::caret(2), &query("foo"), "bar").unwrap();

        assert_eq!(
            outcome,
            ReplaceOutcome::NotReplacedButSearched(MatchResult::Found(Span::new(4, 7)))
        );
        assert_eq!(doc.text(), "foo foo");
    }

    #[test]
    fn test_string_entry_points_reject_empty_query() {
        let mut doc = TextDocument::new("abc");
        assert_eq!(
            replace_all_str(&mut doc, "", "x"),
            Err(FindReplaceError::InvalidQuery)
        );
        assert_eq!(
            replace_selection(&mut doc, "", "x"),
            Err(FindReplaceError::InvalidQuery)
        );
        assert_eq!(doc.text(), "abc");
    }
}
