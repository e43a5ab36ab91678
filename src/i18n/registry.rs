//! Language registry: Single source of truth for all supported target languages.
//!
//! The table is a compile-time constant. Codes are unique and lookups are
//! exact-match and case-sensitive (`"zh-CN"` is supported, `"zh-cn"` is not).

/// A supported translation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageEntry {
    /// Language code sent to the translation service (e.g., "hi", "zh-CN")
    pub code: &'static str,

    /// English display name (e.g., "Hindi")
    pub name: &'static str,
}

const fn entry(code: &'static str, name: &'static str) -> LanguageEntry {
    LanguageEntry { code, name }
}

/// Every supported language, in the order shown by `help`.
pub static LANGUAGES: &[LanguageEntry] = &[
    // Widely used languages
    entry("hi", "Hindi"),
    entry("fr", "French"),
    entry("zh-CN", "Chinese (Simplified)"),
    entry("ja", "Japanese"),
    entry("es", "Spanish"),
    entry("de", "German"),
    entry("it", "Italian"),
    entry("pt", "Portuguese"),
    entry("ru", "Russian"),
    entry("ko", "Korean"),
    entry("ar", "Arabic"),
    entry("nl", "Dutch"),
    entry("tr", "Turkish"),
    entry("pl", "Polish"),
    entry("sv", "Swedish"),
    entry("id", "Indonesian"),
    entry("vi", "Vietnamese"),
    entry("th", "Thai"),
    entry("uk", "Ukrainian"),
    // Eighth Schedule of the Constitution of India (Hindi listed above)
    entry("as", "Assamese"),
    entry("bn", "Bengali"),
    entry("brx", "Bodo"),
    entry("doi", "Dogri"),
    entry("gu", "Gujarati"),
    entry("kn", "Kannada"),
    entry("ks", "Kashmiri"),
    entry("kok", "Konkani"),
    entry("mai", "Maithili"),
    entry("ml", "Malayalam"),
    entry("mni", "Manipuri (Meitei)"),
    entry("mr", "Marathi"),
    entry("ne", "Nepali"),
    entry("or", "Odia"),
    entry("pa", "Punjabi"),
    entry("sa", "Sanskrit"),
    entry("sat", "Santali"),
    entry("sd", "Sindhi"),
    entry("ta", "Tamil"),
    entry("te", "Telugu"),
    entry("ur", "Urdu"),
];

/// Get a language entry by its code.
///
/// # Returns
/// * `Some(&LanguageEntry)` if the code is in the table
/// * `None` otherwise
pub fn lookup(code: &str) -> Option<&'static LanguageEntry> {
    LANGUAGES.iter().find(|lang| lang.code == code)
}

/// Check if a language code can be used as a translation target.
pub fn is_language_supported(code: &str) -> bool {
    lookup(code).is_some()
}
