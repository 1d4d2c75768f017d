#![warn(missing_docs)]
//! Notepad Core Spell - spell-check highlighting for `notepad-core` documents
//!
//! # Overview
//!
//! [`SpellHighlighter`] splits each block on whitespace and flags every token the dictionary does
//! not know with a spelling-error style. It is a [`notepad_core::BlockHighlighter`], so documents
//! only hand it the lines that changed.
//!
//! The dictionary is acquired once through a [`DictionaryProvider`]. When no dictionary is
//! available the highlighter is idle: nothing is flagged and no error reaches the host.
//!
//! # Quick Start
//!
//! ```rust
//! use notepad_core::{Span, TextDocument, SPELLING_ERROR_STYLE_ID};
//! use notepad_core_spell::{SpellHighlighter, StaticDictionaries, WordListDictionary};
//!
//! let provider = StaticDictionaries::new()
//!     .with_locale("en_US", WordListDictionary::from_words(["the", "cat", "sat"]));
//! let highlighter = SpellHighlighter::acquire(&provider, "en_US");
//!
//! let mut doc = TextDocument::new("The cat sat\nqwqw");
//! highlighter.force_rehighlight(&mut doc);
//!
//! assert_eq!(
//!     doc.absolute_highlights(),
//!     vec![(Span::new(12, 16), SPELLING_ERROR_STYLE_ID)]
//! );
//! ```
//!
//! # Module Description
//!
//! - [`dictionary`] - lookup/provider capabilities and word-list dictionaries
//! - [`highlighter`] - the spell-check block highlighter
//! - [`config`] - YAML settings
//! - [`error`] - dictionary and configuration errors

pub mod config;
pub mod dictionary;
pub mod error;
pub mod highlighter;

pub use config::{DEFAULT_LOCALE, SpellCheckConfig};
pub use dictionary::{
    DictionaryDirectory, DictionaryLookup, DictionaryProvider, StaticDictionaries,
    WordListDictionary,
};
pub use error::DictionaryError;
pub use highlighter::{SpellHighlighter, SpellState};
