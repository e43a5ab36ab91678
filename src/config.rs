use std::path::PathBuf;

/// Environment variable holding the bearer credential.
pub const API_KEY_VAR: &str = "LINGO_API_KEY";

pub const DEFAULT_API_URL: &str = "https://api.lingo.dev/v1/translate";

/// English license text, relative to the working directory.
pub const DEFAULT_SOURCE_FILE: &str = "LICENSE.en-US.md";

#[derive(Debug, Clone)]
pub struct Config {
    // Lingo
    pub api_key: Option<String>,
    pub api_url: String,

    // Input
    pub source_file: PathBuf,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// A missing API key is not an error here; `translate` checks for it
    /// after validating the source file and language code. An empty value
    /// counts as missing.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var(API_KEY_VAR)
                .ok()
                .filter(|key| !key.trim().is_empty()),
            api_url: std::env::var("LINGO_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            source_file: std::env::var("LICENSE_SOURCE_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_SOURCE_FILE)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var(API_KEY_VAR);
        std::env::remove_var("LINGO_API_URL");
        std::env::remove_var("LICENSE_SOURCE_FILE");
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();

        let config = Config::from_env();

        assert_eq!(config.api_key, None);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.source_file, PathBuf::from(DEFAULT_SOURCE_FILE));
    }

    #[test]
    #[serial]
    fn test_reads_overrides() {
        clear_env();
        std::env::set_var(API_KEY_VAR, "secret");
        std::env::set_var("LINGO_API_URL", "http://localhost:9999/translate");
        std::env::set_var("LICENSE_SOURCE_FILE", "docs/LICENSE.txt");

        let config = Config::from_env();

        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.api_url, "http://localhost:9999/translate");
        assert_eq!(config.source_file, PathBuf::from("docs/LICENSE.txt"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_blank_api_key_counts_as_missing() {
        clear_env();
        std::env::set_var(API_KEY_VAR, "   ");

        let config = Config::from_env();

        assert_eq!(config.api_key, None);

        clear_env();
    }
}
