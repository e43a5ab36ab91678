//! Language type: a target language validated against the registry.

use crate::error::TranslateError;
use crate::i18n::registry::{lookup, LanguageEntry};
use std::fmt;

/// Source locale of the license text. Always sent as `source_language`.
pub const SOURCE_LANGUAGE: &str = "en-US";

/// A validated translation target.
///
/// Only codes present in the registry can be turned into a `Language`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    entry: &'static LanguageEntry,
}

impl Language {
    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is in the table
    /// * `Err(TranslateError::UnsupportedLanguage)` otherwise
    pub fn from_code(code: &str) -> Result<Language, TranslateError> {
        lookup(code)
            .map(|entry| Language { entry })
            .ok_or_else(|| TranslateError::UnsupportedLanguage {
                code: code.to_string(),
            })
    }

    pub fn code(&self) -> &'static str {
        self.entry.code
    }

    pub fn name(&self) -> &'static str {
        self.entry.name
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.code())
    }
}
