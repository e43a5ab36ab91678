use anyhow::Result;
use license_translator::{cli, config::Config};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load .env file (real environment variables take precedence)
    let _ = dotenvy::dotenv();

    // Initialize logging on stderr; stdout carries only translated text
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new("license_translator=warn"))?,
        )
        .init();

    let config = Config::from_env();
    let args: Vec<String> = std::env::args().skip(1).collect();

    let status = cli::execute(&args, &config, &mut std::io::stdout(), &mut std::io::stderr()).await;

    Ok(ExitCode::from(status))
}
