use anyhow::{Context, Result};
use clap::Parser;
use extractors::BusinessCardParser;
use shared_types::NameSelection;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;

mod config;

#[derive(Parser, Debug)]
#[command(
    name = "card-parser",
    version,
    about = "Extract name, phone and email from the OCR text of a business card"
)]
struct Cli {
    /// Text file holding the card's OCR output, one line per line
    #[arg(default_value = "Input.txt")]
    document: PathBuf,

    /// Settings file (TOML). Defaults to <config dir>/card-parser/config.toml when present
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the contact as JSON
    #[arg(long)]
    json: bool,

    /// Report only the words of the detected name rather than its whole line
    #[arg(long)]
    name_span: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    log_file_path: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.log_file_path.as_deref());

    let (mut settings, config_path) = config::load_settings(cli.config.as_deref())
        .context("Failed to load card-parser config")?;
    if let Some(path) = &config_path {
        tracing::info!(config = %path.display(), "Using config file");
    }
    if cli.name_span {
        settings.name_selection = NameSelection::EntitySpan;
    }

    let parser = BusinessCardParser::new(&settings).context("Invalid parser settings")?;
    let contact = parser.parse_file(&cli.document)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&contact)?);
    } else {
        println!("{contact}");
    }

    Ok(())
}

fn init_tracing(log_file_path: Option<&Path>) -> Option<WorkerGuard> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    match log_file_path {
        Some(log_path) => {
            let file_appender = tracing_appender::rolling::never(
                log_path.parent().unwrap_or(Path::new(".")),
                log_path
                    .file_name()
                    .unwrap_or(OsStr::new("card-parser.log")),
            );
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            let _ = tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(non_blocking),
                )
                .try_init();
            Some(guard)
        }
        None => {
            // stdout carries the report, so logs go to stderr
            let _ = tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(true)
                        .with_writer(std::io::stderr),
                )
                .try_init();
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_defaults_to_input_txt() {
        let cli = Cli::try_parse_from(["card-parser"]).unwrap();

        assert_eq!(cli.document, PathBuf::from("Input.txt"));
        assert!(!cli.json);
        assert!(!cli.name_span);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "card-parser",
            "card.txt",
            "--json",
            "--name-span",
            "--config",
            "settings.toml",
        ])
        .unwrap();

        assert_eq!(cli.document, PathBuf::from("card.txt"));
        assert!(cli.json);
        assert!(cli.name_span);
        assert_eq!(cli.config, Some(PathBuf::from("settings.toml")));
    }
}
