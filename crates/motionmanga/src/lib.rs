//! MotionManga turns up to three videos into an illustrated manga story.
//!
//! The pipeline preprocesses the videos with `ffmpeg`, uploads them to
//! Gemini, asks for a page-by-page story and then generates one image per
//! page:
//!
//! ```text
//! output/
//! ├── optimized_<name>          (only for videos above the size threshold)
//! ├── <stem>_noaudio<suffix>
//! ├── story.txt
//! └── <page>.png
//! ```
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "gemini")]
//! # {
//! use motionmanga::{MotionMangaConfig, Pipeline, TracingReporter};
//! use motionmanga_media::FfmpegEncoder;
//! use motionmanga_models::GeminiClient;
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = MotionMangaConfig::load(None)?;
//! let pipeline = Pipeline::new(
//!     FfmpegEncoder::locate()?,
//!     Arc::new(GeminiClient::from_env()?),
//!     Arc::new(TracingReporter),
//!     config.pipeline_settings()?,
//! );
//! let report = pipeline.run(&["clips/a.mp4", "clips/b.mp4"]).await?;
//! println!("{} images", report.images().len());
//! # Ok(())
//! # }
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod pipeline;
mod progress;

pub use config::{ActivationSection, MotionMangaConfig, RetrySection, TranscodeSection};
pub use pipeline::{
    OutputDirectory, PageFailure, PageFailureReason, Pipeline, PipelineSettings,
    PipelineSettingsBuilder, PromptPaths, RunReport,
};
pub use progress::TracingReporter;

// Re-export the error types callers match on
pub use motionmanga_error::{MotionMangaError, MotionMangaErrorKind, MotionMangaResult};
