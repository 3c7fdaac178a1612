//! Pipeline run handler.

use super::Cli;
use motionmanga::{MotionMangaConfig, MotionMangaResult, Pipeline, RunReport, TracingReporter};
use motionmanga_core::MAX_INPUT_VIDEOS;
use motionmanga_error::{InputError, InputErrorKind};
use motionmanga_interface::GenerativeService;
use motionmanga_media::FfmpegEncoder;
use motionmanga_models::GeminiClient;
use std::sync::Arc;
use tracing::{info, warn};

/// Load configuration, build the collaborators and run the pipeline.
pub async fn run_pipeline(cli: &Cli) -> MotionMangaResult<RunReport> {
    // Reject oversized batches before touching config, credentials or ffmpeg
    if cli.videos.len() > MAX_INPUT_VIDEOS {
        return Err(InputError::new(InputErrorKind::TooManyVideos {
            count: cli.videos.len(),
            max: MAX_INPUT_VIDEOS,
        })
        .into());
    }

    let mut config = MotionMangaConfig::load(cli.config.as_deref())?;
    if let Some(dir) = &cli.output_dir {
        config = config.with_output_dir(dir);
    }

    let service: Arc<dyn GenerativeService> = Arc::new(GeminiClient::from_env()?);
    let encoder = FfmpegEncoder::from_config(config.transcode().ffmpeg().as_deref())?;
    info!(
        provider = service.provider_name(),
        encoder = %encoder.program().display(),
        "Starting MotionManga"
    );

    let pipeline = Pipeline::new(
        encoder,
        service,
        Arc::new(TracingReporter),
        config.pipeline_settings()?,
    );
    let report = pipeline.run(cli.videos.as_slice()).await?;

    info!(story = %report.story_path().display(), "Story written");
    for failure in report.failures() {
        warn!(page = %failure.page_id(), reason = %failure.reason(), "Page has no image");
    }

    Ok(report)
}
