//! The spell-check highlighter.

use std::sync::Arc;

use notepad_core::{
    BlockHighlighter, Document, HighlightSpan, SPELLING_ERROR_STYLE_ID, StyleId, WordToken, words,
};

use crate::config::SpellCheckConfig;
use crate::dictionary::{
    DictionaryDirectory, DictionaryLookup, DictionaryProvider, WordListDictionary,
};
use crate::error::DictionaryError;

/// Observable highlighter state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpellState {
    /// No dictionary; every highlighting call is a no-op.
    Idle,
    /// A dictionary is loaded.
    Ready,
}

/// A dictionary plus the user's extra words.
struct WithExtraWords {
    base: Arc<dyn DictionaryLookup>,
    extra: WordListDictionary,
}

impl DictionaryLookup for WithExtraWords {
    fn is_known(&self, word: &str) -> bool {
        self.extra.is_known(word) || self.base.is_known(word)
    }
}

/// Flags whitespace-delimited tokens that the dictionary does not know.
///
/// The dictionary is acquired once, when the highlighter is built. If that fails the highlighter
/// stays [`SpellState::Idle`] for its whole lifetime: there is no retry.
///
/// Tokens are looked up exactly as they appear, punctuation included, so `"cat."` is flagged even
/// when `"cat"` is a word.
///
/// # Example
///
/// ```rust
/// use notepad_core::{HighlightSpan, SPELLING_ERROR_STYLE_ID};
/// use notepad_core_spell::{SpellHighlighter, StaticDictionaries, WordListDictionary};
///
/// let provider = StaticDictionaries::new()
///     .with_locale("en_US", WordListDictionary::from_words(["the", "cat"]));
/// let highlighter = SpellHighlighter::acquire(&provider, "en_US");
///
/// assert_eq!(
///     highlighter.highlight_block("The qwqw cat"),
///     vec![HighlightSpan::new(4, 4, SPELLING_ERROR_STYLE_ID)]
/// );
/// ```
pub struct SpellHighlighter {
    dictionary: Option<Arc<dyn DictionaryLookup>>,
    style: StyleId,
}

impl SpellHighlighter {
    /// A highlighter without a dictionary.
    pub fn idle() -> Self {
        Self {
            dictionary: None,
            style: SPELLING_ERROR_STYLE_ID,
        }
    }

    /// A ready highlighter using `dictionary`.
    pub fn with_dictionary(dictionary: Arc<dyn DictionaryLookup>) -> Self {
        Self {
            dictionary: Some(dictionary),
            style: SPELLING_ERROR_STYLE_ID,
        }
    }

    /// Acquire the dictionary for `locale` from `provider`.
    ///
    /// Failure is logged and yields an idle highlighter.
    pub fn acquire<P: DictionaryProvider + ?Sized>(provider: &P, locale: &str) -> Self {
        match provider.try_acquire(locale) {
            Ok(dictionary) => Self::with_dictionary(dictionary),
            Err(err) => {
                tracing::warn!(locale, error = %err, "spell checking disabled");
                Self::idle()
            }
        }
    }

    /// Build a highlighter from configuration, loading word lists from `dictionary_dir`.
    ///
    /// Disabled configurations and configurations without a dictionary directory produce an idle
    /// highlighter.
    pub fn from_config(config: &SpellCheckConfig) -> Self {
        match &config.dictionary_dir {
            Some(dir) => Self::from_config_with(config, &DictionaryDirectory::new(dir)),
            None if config.enabled => {
                let err = DictionaryError::NotFound {
                    locale: config.locale.clone(),
                };
                tracing::warn!(error = %err, "spell checking disabled: no dictionary directory configured");
                Self::idle().with_style(config.style_id)
            }
            None => Self::idle().with_style(config.style_id),
        }
    }

    /// Build a highlighter from configuration, acquiring the dictionary from `provider`.
    pub fn from_config_with<P: DictionaryProvider + ?Sized>(
        config: &SpellCheckConfig,
        provider: &P,
    ) -> Self {
        if !config.enabled {
            tracing::debug!("spell checking disabled by configuration");
            return Self::idle().with_style(config.style_id);
        }

        let mut highlighter = Self::acquire(provider, &config.locale).with_style(config.style_id);
        if !config.extra_words.is_empty()
            && let Some(base) = highlighter.dictionary.take()
        {
            highlighter.dictionary = Some(Arc::new(WithExtraWords {
                base,
                extra: WordListDictionary::from_words(config.extra_words.iter().cloned()),
            }));
        }
        highlighter
    }

    /// Use `style` for misspelled words instead of [`SPELLING_ERROR_STYLE_ID`].
    pub fn with_style(mut self, style: StyleId) -> Self {
        self.style = style;
        self
    }

    /// Style attached to misspelled words.
    pub fn style(&self) -> StyleId {
        self.style
    }

    /// Current state.
    pub fn state(&self) -> SpellState {
        if self.dictionary.is_some() {
            SpellState::Ready
        } else {
            SpellState::Idle
        }
    }

    /// Returns `true` when a dictionary is loaded.
    pub fn is_ready(&self) -> bool {
        self.dictionary.is_some()
    }

    /// Tokens of `text` the dictionary does not know, with their char offsets.
    pub fn misspellings<'a>(&self, text: &'a str) -> Vec<WordToken<'a>> {
        let Some(dictionary) = self.dictionary.as_deref() else {
            return Vec::new();
        };
        words(text)
            .filter(|token| !token.text.is_empty() && !dictionary.is_known(token.text))
            .collect()
    }

    /// Spans covering every unknown token of `text` (block-relative char offsets).
    ///
    /// Idle highlighters return an empty vector.
    pub fn highlight_block(&self, text: &str) -> Vec<HighlightSpan> {
        self.misspellings(text)
            .into_iter()
            .map(|token| HighlightSpan::new(token.offset, token.char_len(), self.style))
            .collect()
    }

    /// Re-highlight every block of `document` (the manual "Spell Check" action).
    ///
    /// Idle highlighters leave the document untouched and return `0`. Otherwise returns the
    /// number of blocks processed.
    pub fn force_rehighlight<D: Document + ?Sized>(&self, document: &mut D) -> usize {
        if !self.is_ready() {
            return 0;
        }

        document.take_dirty_blocks();
        let block_count = document.block_count();
        for index in 0..block_count {
            if let Some(block) = document.block(index) {
                let spans = self.highlight_block(&block.text);
                document.set_block_highlights(index, spans);
            }
        }

        tracing::debug!(blocks = block_count, "spell check pass completed");
        block_count
    }

    /// Re-highlight the blocks `document` marked dirty since the last refresh.
    ///
    /// Returns the number of blocks processed. An idle highlighter drains the dirty marks without
    /// storing anything.
    pub fn refresh<D: Document + ?Sized>(&self, document: &mut D) -> usize {
        let dirty = document.take_dirty_blocks();
        if !self.is_ready() {
            return 0;
        }

        for &index in &dirty {
            if let Some(block) = document.block(index) {
                let spans = self.highlight_block(&block.text);
                document.set_block_highlights(index, spans);
            }
        }
        dirty.len()
    }
}

impl Default for SpellHighlighter {
    fn default() -> Self {
        Self::idle()
    }
}

impl std::fmt::Debug for SpellHighlighter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpellHighlighter")
            .field("state", &self.state())
            .field("style", &self.style)
            .finish()
    }
}

impl BlockHighlighter for SpellHighlighter {
    fn highlight_block(&self, text: &str) -> Vec<HighlightSpan> {
        SpellHighlighter::highlight_block(self, text)
    }
}
