use std::error::Error as _;
use std::path::PathBuf;
use thiserror::Error;

/// Every way a `license-translator` invocation can fail.
///
/// All variants are terminal. The `Display` text is what the user sees on
/// stderr, so remediation hints live here.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("source file '{}' not found\n\nRun this command from the directory that contains {}.", .path.display(), .path.display())]
    SourceFileMissing { path: PathBuf },

    #[error("could not read source file '{}': {source}", .path.display())]
    SourceFileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported language code '{code}'\n\nRun 'license-translator help' to see the supported languages.")]
    UnsupportedLanguage { code: String },

    #[error(
        "LINGO_API_KEY is not set\n\n\
         Set it before translating:\n\
         \x20 export LINGO_API_KEY=\"your-api-key\"\n\
         or add it to a .env file in this directory.\n\n\
         Alternatively, translate the license with another provider such as\n\
         Google Cloud Translation, DeepL or LibreTranslate."
    )]
    MissingApiKey,

    #[error("could not initialise the HTTP client (TLS support unavailable?): {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error(
        "failed to reach the translation service: {detail}\n\n\
         Please check:\n\
         \x20 - LINGO_API_KEY is correct\n\
         \x20 - you have a working internet connection\n\
         \x20 - the translation service is available"
    )]
    Transport {
        /// `source` followed by every underlying cause, `: `-separated
        detail: String,
        #[source]
        source: reqwest::Error,
    },

    #[error(
        "translation service returned no translated text (HTTP {status})\n\n\
         Response:\n{body}\n\n\
         Possible causes:\n\
         \x20 1. the API returned an error\n\
         \x20 2. the response format was not what this tool expects\n\
         \x20 3. the language code '{code}' is not supported by the service"
    )]
    InvalidResponse {
        status: u16,
        code: String,
        body: String,
    },

    #[error("missing language code\n\nUsage: license-translator translate <code>")]
    MissingLanguageCode,

    #[error("unknown command '{command}'\n\nRun 'license-translator help' for usage.")]
    UnknownCommand { command: String },

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl TranslateError {
    /// Wrap a failed request, keeping the whole cause chain in the message.
    ///
    /// `reqwest::Error` only displays its top level ("error sending request
    /// for url ..."); the connect, DNS or TLS failure sits further down.
    pub fn transport(source: reqwest::Error) -> Self {
        let mut detail = source.to_string();
        let mut cause = source.source();
        while let Some(err) = cause {
            let message = err.to_string();
            if !detail.ends_with(&message) {
                detail.push_str(": ");
                detail.push_str(&message);
            }
            cause = err.source();
        }
        TranslateError::Transport { detail, source }
    }
}
