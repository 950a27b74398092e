//! Nomen CLI - Command-line interface
//!
//! Usage:
//!   nomen extract <text>
//!   nomen check <candidate>

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use nomen_core::AppConfig;
use nomen_extractor::{is_valid_name_candidate, load_ner_pipeline, InformationExtractor};

#[derive(Parser)]
#[command(name = "nomen")]
#[command(about = "Extract surnames from free text with an NER model")]
#[command(version)]
struct Cli {
    /// TOML configuration file (environment variables override it)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the text through the NER model and print the extracted surname
    Extract {
        /// Text that may mention a person
        text: String,
    },
    /// Check whether a candidate passes name validation
    Check {
        /// Candidate surface string
        candidate: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?.with_env_override()?,
        None => AppConfig::from_env()?,
    };

    // stdout carries results only
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("nomen_extractor={}", config.logging.level).into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Extract { text } => {
            let extractor = InformationExtractor::new(load_ner_pipeline(&config.ner)?);
            let response = extractor.extract_name(&text).await?;
            println!("{}", serde_json::json!({ "response": response }));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check { candidate } => {
            if is_valid_name_candidate(&candidate.to_lowercase()) {
                println!("valid");
                Ok(ExitCode::SUCCESS)
            } else {
                println!("invalid");
                Ok(ExitCode::FAILURE)
            }
        }
    }
}
