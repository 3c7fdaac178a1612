//! MotionManga CLI binary.
//!
//! Turns 1 to 3 video files into `story.txt` plus one image per page in the
//! output directory.

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    use cli::{Cli, run_pipeline};

    // Load .env before anything reads the environment
    let _ = dotenvy::dotenv();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins when set
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    tokio::select! {
        result = run_pipeline(&cli) => match result {
            Ok(report) => {
                if report.is_complete() {
                    tracing::info!("All pages illustrated");
                } else {
                    tracing::warn!(missing = report.failures().len(), "Completed with missing images");
                }
                ExitCode::SUCCESS
            }
            Err(e) => {
                tracing::error!("{}", e);
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        },
        _ = tokio::signal::ctrl_c() => {
            tracing::error!("Interrupted");
            eprintln!("Interrupted");
            ExitCode::FAILURE
        }
    }
}
