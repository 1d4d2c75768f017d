//! Dictionary capabilities.
//!
//! A [`DictionaryLookup`] answers "is this token a word?". A [`DictionaryProvider`] hands one out
//! for a locale, once, at startup. Both are explicit values owned by the host: there is no global
//! dictionary.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::DictionaryError;

/// Tests whether a token is a recognized word.
pub trait DictionaryLookup: Send + Sync {
    /// Returns `true` if `word` (exactly as it appears in the text) is known.
    fn is_known(&self, word: &str) -> bool;
}

/// Acquires a [`DictionaryLookup`] for a locale.
pub trait DictionaryProvider {
    /// Acquire the dictionary for `locale` (e.g. `en_US`).
    fn try_acquire(&self, locale: &str) -> Result<Arc<dyn DictionaryLookup>, DictionaryError>;
}

/// An in-memory word set.
///
/// Lookup is case-aware the way desktop spell checkers are: an entry matches verbatim, and a
/// lower-case entry also accepts its Capitalized and ALL-CAPS forms (`the` accepts `The` and
/// `THE`, but `Paris` does not accept `paris`).
#[derive(Debug, Clone, Default)]
pub struct WordListDictionary {
    words: HashSet<String>,
}

impl WordListDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from an iterator of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut dict = Self::new();
        dict.extend(words);
        dict
    }

    /// Parse a word list.
    ///
    /// Accepts plain lists (one word per line) and Hunspell `.dic` files: a leading numeric
    /// count line is skipped, `/FLAGS` suffixes are stripped, and blank lines or `#` comments are
    /// ignored.
    pub fn parse(content: &str) -> Self {
        let mut lines = content.lines().map(str::trim).peekable();
        if lines
            .peek()
            .is_some_and(|first| !first.is_empty() && first.chars().all(|c| c.is_ascii_digit()))
        {
            lines.next();
        }

        let words = lines
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| line.split('/').next())
            .map(str::trim)
            .filter(|word| !word.is_empty());
        Self::from_words(words)
    }

    /// Load and [`parse`](Self::parse) a word list from disk.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(Self::parse(&content))
    }

    /// Add one word.
    pub fn insert(&mut self, word: impl Into<String>) {
        self.words.insert(word.into());
    }

    /// Add several words.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words.extend(words.into_iter().map(Into::into));
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn is_capitalized(word: &str) -> bool {
    let mut chars = word.chars();
    chars.next().is_some_and(char::is_uppercase) && chars.all(|c| !c.is_uppercase())
}

fn is_all_caps(word: &str) -> bool {
    word.chars().any(char::is_alphabetic) && word.chars().all(|c| !c.is_lowercase())
}

impl DictionaryLookup for WordListDictionary {
    fn is_known(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        if self.words.contains(word) {
            return true;
        }
        if is_capitalized(word) || is_all_caps(word) {
            return self.words.contains(&word.to_lowercase());
        }
        false
    }
}

/// A provider over word lists already in memory, keyed by locale.
#[derive(Clone, Default)]
pub struct StaticDictionaries {
    by_locale: HashMap<String, Arc<dyn DictionaryLookup>>,
}

impl StaticDictionaries {
    /// Create an empty provider (every acquisition fails).
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `dictionary` for `locale`.
    pub fn with_locale(mut self, locale: impl Into<String>, dictionary: WordListDictionary) -> Self {
        self.by_locale.insert(locale.into(), Arc::new(dictionary));
        self
    }
}

impl DictionaryProvider for StaticDictionaries {
    fn try_acquire(&self, locale: &str) -> Result<Arc<dyn DictionaryLookup>, DictionaryError> {
        self.by_locale
            .get(locale)
            .cloned()
            .ok_or_else(|| DictionaryError::NotFound {
                locale: locale.to_string(),
            })
    }
}

/// A provider that loads `<dir>/<locale>.dic`, falling back to `<dir>/<locale>.txt`.
#[derive(Debug, Clone)]
pub struct DictionaryDirectory {
    root: PathBuf,
}

impl DictionaryDirectory {
    /// Look for dictionaries in `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory being searched.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn candidates(&self, locale: &str) -> [PathBuf; 2] {
        [
            self.root.join(format!("{locale}.dic")),
            self.root.join(format!("{locale}.txt")),
        ]
    }
}

impl DictionaryProvider for DictionaryDirectory {
    fn try_acquire(&self, locale: &str) -> Result<Arc<dyn DictionaryLookup>, DictionaryError> {
        let Some(path) = self
            .candidates(locale)
            .into_iter()
            .find(|path| path.is_file())
        else {
            return Err(DictionaryError::NotFound {
                locale: locale.to_string(),
            });
        };

        let dictionary = WordListDictionary::load_from_path(&path)?;
        tracing::debug!(
            locale,
            path = %path.display(),
            words = dictionary.len(),
            "loaded dictionary"
        );
        let dictionary: Arc<dyn DictionaryLookup> = Arc::new(dictionary);
        Ok(dictionary)
    }
}
