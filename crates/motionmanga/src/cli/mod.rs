//! Command-line interface module.
//!
//! This module provides the CLI structure and run handler for the motionmanga binary.

mod commands;
mod run;

pub use commands::Cli;
pub use run::run_pipeline;
