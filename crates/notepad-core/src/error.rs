//! Error types shared by the document model and the find/replace operations.

use thiserror::Error;

/// Errors reported by a [`Document`](crate::Document) mutation primitive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// `begin_edit_group` was called while another group was still open.
    #[error("an edit group is already open")]
    GroupAlreadyOpen,
    /// `end_edit_group` was called without a matching `begin_edit_group`.
    #[error("no edit group is open")]
    NoOpenGroup,
    /// A span does not fit inside the document.
    #[error("invalid span {start}..{end} (document has {len} chars)")]
    InvalidSpan {
        /// Inclusive start character offset.
        start: usize,
        /// Exclusive end character offset.
        end: usize,
        /// Document length in characters.
        len: usize,
    },
}

/// Errors returned by the find/replace entry points.
///
/// "No match" is not an error; it is reported as [`MatchResult::NotFound`](crate::MatchResult::NotFound).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FindReplaceError {
    /// The search string was empty. The document was not touched.
    #[error("search query is empty")]
    InvalidQuery,
    /// The escaped literal could not be compiled (e.g. it exceeds the matcher size limit).
    #[error("search query could not be compiled: {0}")]
    QueryCompile(String),
    /// The document could not open, close or apply an edit group.
    ///
    /// Any edits already made inside the group have been rolled back.
    #[error("edit transaction failed: {0}")]
    TransactionFailure(#[from] DocumentError),
}
