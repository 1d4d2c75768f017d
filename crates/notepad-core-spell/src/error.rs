//! Spell-check errors.

use thiserror::Error;

#[derive(Debug, Error)]
/// Errors produced while acquiring a dictionary or loading spell-check configuration.
///
/// None of these reach highlighting calls: a highlighter that cannot acquire its dictionary
/// simply stays idle.
pub enum DictionaryError {
    #[error("no dictionary found for locale '{locale}'")]
    /// The provider has no word list for the requested locale.
    NotFound {
        /// The requested locale (e.g. `en_US`).
        locale: String,
    },

    #[error("I/O error: {0}")]
    /// Filesystem I/O failed.
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    /// The configuration document could not be parsed.
    Config(#[from] serde_yaml::Error),
}
