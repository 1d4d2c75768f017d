//! Spell-check settings.
//!
//! Settings are plain serde data, loaded from YAML:
//!
//! ```yaml
//! enabled: true
//! locale: en_US
//! dictionary_dir: /usr/share/hunspell
//! extra_words: [notepad, rustacean]
//! ```
//!
//! Every field is optional; missing fields take the [`Default`] values.

use std::path::{Path, PathBuf};

use notepad_core::{SPELLING_ERROR_STYLE_ID, StyleId};
use serde::{Deserialize, Serialize};

use crate::error::DictionaryError;

/// Default dictionary locale.
pub const DEFAULT_LOCALE: &str = "en_US";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Spell-check configuration.
pub struct SpellCheckConfig {
    /// If `false`, the highlighter is built idle and never flags anything.
    pub enabled: bool,
    /// Dictionary locale, e.g. `en_US`.
    pub locale: String,
    /// Directory holding `<locale>.dic` / `<locale>.txt` word lists.
    pub dictionary_dir: Option<PathBuf>,
    /// Words accepted in addition to the dictionary (user dictionary).
    pub extra_words: Vec<String>,
    /// Style attached to misspelled words.
    pub style_id: StyleId,
}

impl Default for SpellCheckConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            locale: DEFAULT_LOCALE.to_string(),
            dictionary_dir: None,
            extra_words: Vec::new(),
            style_id: SPELLING_ERROR_STYLE_ID,
        }
    }
}

impl SpellCheckConfig {
    /// Parse a YAML configuration document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, DictionaryError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read and parse a YAML configuration file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let yaml = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&yaml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = SpellCheckConfig::from_yaml_str("locale: de_DE\n").unwrap();
        assert_eq!(
            config,
            SpellCheckConfig {
                locale: "de_DE".to_string(),
                ..SpellCheckConfig::default()
            }
        );
    }

    #[test]
    fn test_full_document() {
        let yaml = "enabled: false\nlocale: en_GB\ndictionary_dir: /opt/dicts\nextra_words: [notepad]\nstyle_id: 7\n";
        let config = SpellCheckConfig::from_yaml_str(yaml).unwrap();
        assert!(!config.enabled);
        assert_eq!(config.dictionary_dir.as_deref(), Some(Path::new("/opt/dicts")));
        assert_eq!(config.extra_words, vec!["notepad".to_string()]);
        assert_eq!(config.style_id, 7);
    }

    #[test]
    fn test_invalid_yaml_is_a_config_error() {
        let err = SpellCheckConfig::from_yaml_str("enabled: [").unwrap_err();
        assert!(matches!(err, DictionaryError::Config(_)));
    }
}
