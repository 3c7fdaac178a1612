//! CLI argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// MotionManga - turn videos into an illustrated manga story with Gemini
#[derive(Parser, Debug)]
#[command(name = "motionmanga")]
#[command(about = "Turn up to three videos into an illustrated manga story", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Video files to build the story from (at most 3)
    #[arg(required = true, num_args = 1..)]
    pub videos: Vec<PathBuf>,

    /// Additional configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory receiving transcoded videos, story and images
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
