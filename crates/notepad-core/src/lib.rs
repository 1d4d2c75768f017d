#![warn(missing_docs)]
//! Notepad Core - headless text-editing core for a note editor
//!
//! # Overview
//!
//! `notepad-core` holds the parts of a note editor that are more than widget wiring:
//!
//! - **Find / replace**: literal, case-sensitive search that wraps once around the document,
//!   replace-current that only fires on an exact selection, and replace-all grouped into a single
//!   undo step.
//! - **Block highlighting**: documents track which lines changed and hand exactly those lines to a
//!   [`BlockHighlighter`] (the spell checker in `notepad-core-spell` is one).
//!
//! Window, menu and dialog code, file I/O, themes and timers are left to the host. The host owns
//! the document; every operation here borrows it for one call and runs to completion.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  replace (replace_current / replace_all)    │  ← Host actions
//! ├─────────────────────────────────────────────┤
//! │  search (find_next, wraparound)             │
//! ├─────────────────────────────────────────────┤
//! │  Document trait  ←  TextDocument (rope)     │  ← Storage, edit groups, blocks
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use notepad_core::{MatchResult, SearchQuery, Span, TextDocument, replace, search};
//!
//! let mut doc = TextDocument::new("cat sat on the cat mat");
//! let query = SearchQuery::new("cat").unwrap();
//!
//! assert_eq!(search::find_next(&doc, 1, &query), MatchResult::Found(Span::new(15, 18)));
//!
//! let count = replace::replace_all(&mut doc, &query, "dog").unwrap();
//! assert_eq!(count, 2);
//! assert_eq!(doc.text(), "dog sat on the dog mat");
//!
//! // The whole replace-all is one undo step.
//! doc.undo().unwrap();
//! assert_eq!(doc.text(), "cat sat on the cat mat");
//! ```
//!
//! # Module Description
//!
//! - [`document`] - `Document` trait, spans and cursors
//! - [`text_document`] - rope-backed reference document
//! - [`search`] - literal search with wraparound
//! - [`replace`] - replace-current / replace-all
//! - [`highlight`] - block highlighting interface
//! - [`delta`] - structured change records
//! - [`words`] - whitespace word tokenizer and word count
//! - [`status`] - status-bar messages

pub mod delta;
pub mod document;
pub mod error;
pub mod highlight;
pub mod replace;
pub mod search;
pub mod status;
pub mod text_document;
pub mod words;

pub use delta::{TextDelta, TextDeltaEdit};
pub use document::{Cursor, Document, Span};
pub use error::{DocumentError, FindReplaceError};
pub use highlight::{Block, BlockHighlighter, HighlightSpan, SPELLING_ERROR_STYLE_ID, StyleId};
pub use replace::ReplaceOutcome;
pub use search::{MatchResult, SearchQuery};
pub use status::StatusMessage;
pub use text_document::TextDocument;
pub use words::{WordToken, count_words, words};
