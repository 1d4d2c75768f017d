//! User-facing status-bar messages for find/replace and spell-check actions.

use std::fmt;

use crate::replace::ReplaceOutcome;
use crate::search::MatchResult;

/// A message for the host's status bar (or an informational dialog).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    /// The find action was triggered with an empty query.
    InputRequired,
    /// A match for the query was selected.
    Found {
        /// The search query.
        query: String,
    },
    /// The query occurs nowhere in the document.
    NotFound {
        /// The search query.
        query: String,
    },
    /// The current selection was replaced.
    Replaced {
        /// The search query.
        query: String,
        /// The replacement text.
        replacement: String,
    },
    /// A replace-all finished with at least one replacement.
    ReplacedAll {
        /// Number of replaced occurrences.
        count: usize,
        /// The search query.
        query: String,
        /// The replacement text.
        replacement: String,
    },
    /// A replace-all found nothing to replace.
    NoOccurrences {
        /// The search query.
        query: String,
    },
    /// A manual spell-check pass finished.
    SpellCheckCompleted,
    /// Current word count.
    WordCount(usize),
}

impl StatusMessage {
    /// Message for a find action.
    pub fn for_search(query: &str, result: MatchResult) -> Self {
        match result {
            MatchResult::Found(_) => Self::Found {
                query: query.to_string(),
            },
            MatchResult::NotFound => Self::NotFound {
                query: query.to_string(),
            },
        }
    }

    /// Message for a replace-current action.
    ///
    /// When nothing was replaced the message describes the search that ran instead.
    pub fn for_replace(query: &str, replacement: &str, outcome: ReplaceOutcome) -> Self {
        match outcome {
            ReplaceOutcome::Replaced(_) => Self::Replaced {
                query: query.to_string(),
                replacement: replacement.to_string(),
            },
            ReplaceOutcome::NotReplacedButSearched(result) => Self::for_search(query, result),
        }
    }

    /// Message for a replace-all action.
    pub fn for_replace_all(query: &str, replacement: &str, count: usize) -> Self {
        if count == 0 {
            Self::NoOccurrences {
                query: query.to_string(),
            }
        } else {
            Self::ReplacedAll {
                count,
                query: query.to_string(),
                replacement: replacement.to_string(),
            }
        }
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputRequired => write!(f, "Please enter text to find."),
            Self::Found { query } => write!(f, "Found '{}'.", query),
            Self::NotFound { query } => write!(f, "'{}' not found.", query),
            Self::Replaced { query, replacement } => {
                write!(f, "Replaced '{}' with '{}'.", query, replacement)
            }
            Self::ReplacedAll {
                count,
                query,
                replacement,
            } => write!(
                f,
                "Replaced all {} occurrences of '{}' with '{}'.",
                count, query, replacement
            ),
            Self::NoOccurrences { query } => write!(f, "No occurrences of '{}' found.", query),
            Self::SpellCheckCompleted => write!(f, "Spell check completed."),
            Self::WordCount(count) => write!(f, "Words: {}", count),
        }
    }
}
