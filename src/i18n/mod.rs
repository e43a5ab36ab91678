//! Supported target languages.
//!
//! - `registry`: the immutable code → name table and lookups
//! - `language`: `Language`, a code validated against the registry
//!
//! # Example
//!
//! ```rust
//! use license_translator::i18n::{is_language_supported, Language};
//!
//! assert!(is_language_supported("hi"));
//! assert!(!is_language_supported("xx"));
//!
//! let hindi = Language::from_code("hi").unwrap();
//! assert_eq!(hindi.name(), "Hindi");
//! ```

mod language;
mod registry;

pub use language::{Language, SOURCE_LANGUAGE};
pub use registry::{is_language_supported, lookup, LanguageEntry, LANGUAGES};
