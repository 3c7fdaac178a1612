//! Layered configuration.

use crate::pipeline::{PipelineSettings, PipelineSettingsBuilder, PromptPaths};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use derive_getters::Getters;
use motionmanga_error::{ConfigError, MotionMangaResult};
use motionmanga_media::{TranscodeSettings, TranscodeSettingsBuilder};
use motionmanga_models::{ActivationSettings, ImageSettings, ModelNames};
use motionmanga_retry::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../motionmanga.toml");

/// Retry settings for generation calls.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct RetrySection {
    /// Total attempts, including the first
    max_attempts: usize,
    /// Seconds between attempts
    delay_secs: u64,
}

/// Activation polling settings.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct ActivationSection {
    /// Seconds between status fetches
    poll_interval_secs: u64,
    /// Seconds before giving up; 0 disables the deadline
    deadline_secs: u64,
}

/// Encoder settings.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct TranscodeSection {
    /// Files larger than this are downscaled
    size_threshold_bytes: u64,
    /// Downscaled height in pixels
    target_height: u32,
    /// Video codec for downscaling
    video_codec: String,
    /// Encoder speed preset
    preset: String,
    /// Constant rate factor
    crf: u8,
    /// Explicit ffmpeg executable
    #[serde(default)]
    ffmpeg: Option<PathBuf>,
}

/// Top-level MotionManga configuration.
///
/// Sources in order of precedence (later sources override earlier):
/// 1. Bundled defaults (motionmanga.toml shipped with the binary)
/// 2. User config in home directory (~/.config/motionmanga/motionmanga.toml)
/// 3. User config in current directory (./motionmanga.toml)
/// 4. An explicit file passed by the caller
/// 5. `MOTIONMANGA__SECTION__KEY` environment variables
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct MotionMangaConfig {
    /// Directory receiving every artifact
    output_dir: PathBuf,
    /// Prompt template paths
    prompts: PromptPaths,
    /// Model names
    models: ModelNames,
    /// Retry settings
    retry: RetrySection,
    /// Activation settings
    activation: ActivationSection,
    /// Encoder settings
    transcode: TranscodeSection,
    /// Image request parameters
    image: ImageSettings,
}

impl MotionMangaConfig {
    /// Load the bundled defaults only.
    pub fn defaults() -> MotionMangaResult<Self> {
        build(Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml)))
    }

    /// Load configuration from every layer.
    ///
    /// `extra` is an explicit file that must exist. User config files are
    /// optional and silently skipped if not found.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a source cannot be read or the merged
    /// result does not deserialize.
    #[instrument]
    pub fn load(extra: Option<&Path>) -> MotionMangaResult<Self> {
        debug!("Loading configuration with precedence: env > explicit > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/motionmanga/motionmanga.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("motionmanga").required(false));

        if let Some(path) = extra {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("MOTIONMANGA")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        build(builder)
    }

    /// Replace the output directory.
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Retry policy for generation calls.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.retry.max_attempts,
            Duration::from_secs(self.retry.delay_secs),
        )
    }

    /// Activation polling settings.
    pub fn activation_settings(&self) -> ActivationSettings {
        let deadline = match self.activation.deadline_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };
        ActivationSettings::new(
            Duration::from_secs(self.activation.poll_interval_secs),
            deadline,
        )
    }

    /// Encoder settings for the transcoder.
    pub fn transcode_settings(&self) -> MotionMangaResult<TranscodeSettings> {
        let section = &self.transcode;
        TranscodeSettingsBuilder::default()
            .size_threshold_bytes(section.size_threshold_bytes)
            .target_height(section.target_height)
            .video_codec(section.video_codec.clone())
            .preset(section.preset.clone())
            .crf(section.crf)
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid transcode settings: {}", e)).into())
    }

    /// Everything the pipeline needs from configuration.
    pub fn pipeline_settings(&self) -> MotionMangaResult<PipelineSettings> {
        PipelineSettingsBuilder::default()
            .output_dir(self.output_dir.clone())
            .prompts(self.prompts.clone())
            .transcode(self.transcode_settings()?)
            .activation(self.activation_settings())
            .retry(self.retry_policy())
            .models(self.models.clone())
            .image(self.image.clone())
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid pipeline settings: {}", e)).into())
    }
}

fn build(builder: ConfigBuilder<DefaultState>) -> MotionMangaResult<MotionMangaConfig> {
    let config = builder
        .build()
        .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
        .try_deserialize::<MotionMangaConfig>()
        .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;

    if config.retry.max_attempts == 0 {
        return Err(ConfigError::new("retry.max_attempts must be at least 1").into());
    }
    if config.activation.poll_interval_secs == 0 {
        return Err(ConfigError::new("activation.poll_interval_secs must be at least 1").into());
    }

    Ok(config)
}
