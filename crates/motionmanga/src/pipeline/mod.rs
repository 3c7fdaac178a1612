//! End-to-end pipeline: videos in, story and page images out.

mod orchestrator;
mod output;
mod report;
mod settings;

pub use orchestrator::Pipeline;
pub use output::OutputDirectory;
pub use report::{PageFailure, PageFailureReason, RunReport};
pub use settings::{PipelineSettings, PipelineSettingsBuilder, PromptPaths};
