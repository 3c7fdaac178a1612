//! Pipeline settings.

use derive_getters::Getters;
use motionmanga_media::TranscodeSettings;
use motionmanga_models::{ActivationSettings, ImageSettings, ModelNames};
use motionmanga_retry::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Locations of the two prompt templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct PromptPaths {
    /// Narrative prompt
    story: PathBuf,
    /// Image style prompt
    comic: PathBuf,
}

impl PromptPaths {
    /// Create prompt paths.
    pub fn new(story: impl Into<PathBuf>, comic: impl Into<PathBuf>) -> Self {
        Self {
            story: story.into(),
            comic: comic.into(),
        }
    }
}

impl Default for PromptPaths {
    fn default() -> Self {
        Self::new("story.md", "comic.md")
    }
}

/// Everything one run is parameterised by.
#[derive(Debug, Clone, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct PipelineSettings {
    /// Directory receiving every artifact
    #[builder(default = "PathBuf::from(\"output\")")]
    output_dir: PathBuf,
    /// Prompt template locations
    #[builder(default)]
    prompts: PromptPaths,
    /// Encoder settings
    #[builder(default)]
    transcode: TranscodeSettings,
    /// Upload polling settings
    #[builder(default)]
    activation: ActivationSettings,
    /// Retry policy for generation calls
    #[builder(default)]
    retry: RetryPolicy,
    /// Model names
    #[builder(default)]
    models: ModelNames,
    /// Image request parameters
    #[builder(default)]
    image: ImageSettings,
}
