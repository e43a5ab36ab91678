//! Command-line surface: argument parsing, the help document and dispatch.
//!
//! Output discipline: only translated text (or the help document) goes to
//! `out`. Progress lines and diagnostics go to `err`, so `out` can be
//! redirected straight into a per-language file.

use crate::config::{Config, API_KEY_VAR};
use crate::error::TranslateError;
use crate::i18n::{Language, LANGUAGES};
use crate::translation::translate_text;
use std::io::{self, Write};
use tracing::{debug, info};

/// A parsed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Translate { code: String },
}

impl Command {
    /// Parse arguments (without the program name).
    ///
    /// No arguments is the same as `help`. Arguments after the language
    /// code are ignored.
    pub fn parse(args: &[String]) -> Result<Command, TranslateError> {
        match args.first().map(String::as_str) {
            None | Some("help") | Some("--help") | Some("-h") => Ok(Command::Help),
            Some("translate") => match args.get(1) {
                Some(code) => Ok(Command::Translate { code: code.clone() }),
                None => Err(TranslateError::MissingLanguageCode),
            },
            Some(other) => Err(TranslateError::UnknownCommand {
                command: other.to_string(),
            }),
        }
    }
}

/// The usage document printed by `help`.
pub fn help_text(config: &Config) -> String {
    let source = config.source_file.display();
    let languages: String = LANGUAGES
        .iter()
        .map(|lang| format!("  {:<8}{}\n", lang.code, lang.name))
        .collect();

    format!(
        "license-translator - translate {source} with the Lingo API

USAGE:
  license-translator help              Show this help
  license-translator translate <code>  Translate {source} to <code>

SUPPORTED LANGUAGES:
  CODE    LANGUAGE
{languages}
EXAMPLES:
  license-translator translate hi > LICENSE.hi.md
  license-translator translate fr > LICENSE.fr.md
  license-translator translate zh-CN > LICENSE.zh-CN.md

ENVIRONMENT:
  {API_KEY_VAR}  API key for the Lingo translation service (required for translate)
"
    )
}

/// Run a parsed command against the given streams.
pub async fn run<O: Write, E: Write>(
    command: Command,
    config: &Config,
    out: &mut O,
    err: &mut E,
) -> Result<(), TranslateError> {
    match command {
        Command::Help => {
            out.write_all(help_text(config).as_bytes())?;
            Ok(())
        }
        Command::Translate { code } => translate(&code, config, out, err).await,
    }
}

async fn translate<O: Write, E: Write>(
    code: &str,
    config: &Config,
    out: &mut O,
    err: &mut E,
) -> Result<(), TranslateError> {
    let path = &config.source_file;
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => TranslateError::SourceFileMissing { path: path.clone() },
            _ => TranslateError::SourceFileUnreadable {
                path: path.clone(),
                source,
            },
        })?;

    let language = Language::from_code(code)?;

    let api_key = config
        .api_key
        .as_deref()
        .ok_or(TranslateError::MissingApiKey)?;

    let client = reqwest::Client::builder()
        .build()
        .map_err(TranslateError::HttpClient)?;

    writeln!(err, "🌐 Translating to {}", language)?;
    writeln!(err, "📄 Source: {}", path.display())?;
    writeln!(err, "⏳ This may take a moment...")?;
    err.flush()?;

    info!("Translating {} ({} bytes) to {}", path.display(), text.len(), language);

    let translated = translate_text(&client, &config.api_url, api_key, &text, language).await?;

    writeln!(out, "{}", translated)?;
    out.flush()?;

    Ok(())
}

/// Parse `args`, run the command and report failures on `err`.
///
/// Returns the process exit status: 0 on success, 1 on any error.
pub async fn execute<O: Write, E: Write>(
    args: &[String],
    config: &Config,
    out: &mut O,
    err: &mut E,
) -> u8 {
    let result = match Command::parse(args) {
        Ok(command) => run(command, config, out, err).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            debug!("Command failed: {:?}", e);
            let _ = writeln!(err, "Error: {}", e);
            1
        }
    }
}
