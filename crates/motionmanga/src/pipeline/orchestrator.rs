//! Run orchestration.

use super::{OutputDirectory, PageFailure, PageFailureReason, PipelineSettings, RunReport};
use motionmanga_core::{DerivedVideo, GeneratedImage, InputBatch, RemoteAsset, Stage};
use motionmanga_error::MotionMangaResult;
use motionmanga_interface::{GenerativeService, ProgressReporter};
use motionmanga_media::{Encoder, Transcoder};
use motionmanga_models::{AssetActivator, GenerationClient};
use motionmanga_narrative::{PromptTemplates, decode, image_prompt};
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Runs the full video-to-manga pipeline.
///
/// Stages run strictly in order, each over the whole batch:
///
/// | Stage | Failure |
/// |-------|---------|
/// | collect inputs, create output dir, load prompts | fatal |
/// | optimize, strip audio | absorbed, source file reused |
/// | upload both groups | fatal |
/// | narrative, decode, write `story.txt` | fatal |
/// | one image per page | recorded in the [`RunReport`] |
pub struct Pipeline<E> {
    transcoder: Transcoder<E>,
    activator: AssetActivator,
    generator: GenerationClient,
    reporter: Arc<dyn ProgressReporter>,
    settings: PipelineSettings,
}

impl<E: Encoder> Pipeline<E> {
    /// Wire a pipeline around one encoder and one generation service.
    pub fn new(
        encoder: E,
        service: Arc<dyn GenerativeService>,
        reporter: Arc<dyn ProgressReporter>,
        settings: PipelineSettings,
    ) -> Self {
        let transcoder = Transcoder::new(
            encoder,
            settings.output_dir().clone(),
            settings.transcode().clone(),
        );
        let activator = AssetActivator::new(
            Arc::clone(&service),
            Arc::clone(&reporter),
            *settings.activation(),
        );
        let generator = GenerationClient::new(
            service,
            *settings.retry(),
            settings.models().clone(),
            settings.image().clone(),
        );

        Self {
            transcoder,
            activator,
            generator,
            reporter,
            settings,
        }
    }

    /// Settings in use.
    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    /// Run every stage over `videos`.
    ///
    /// # Errors
    ///
    /// Returns the first fatal stage error. Missing page images are not
    /// errors; they are listed in [`RunReport::failures`].
    #[instrument(skip_all, fields(videos = videos.len()))]
    pub async fn run<P: AsRef<Path>>(&self, videos: &[P]) -> MotionMangaResult<RunReport> {
        let mut stage = StageCursor::start(self.reporter.as_ref());

        let batch = InputBatch::from_paths(videos)?;
        let output = OutputDirectory::create(self.settings.output_dir()).await?;
        let templates = PromptTemplates::load(
            self.settings.prompts().story(),
            self.settings.prompts().comic(),
        )
        .await?;
        info!(videos = batch.len(), output = %output.root().display(), "Inputs collected");

        stage.advance();
        let mut with_audio = Vec::with_capacity(batch.len());
        for video in batch.videos() {
            with_audio.push(self.transcoder.optimize(video).await);
        }

        stage.advance();
        let mut no_audio = Vec::with_capacity(with_audio.len());
        for video in &with_audio {
            no_audio.push(self.transcoder.strip_audio(video).await);
        }

        stage.advance();
        let story_assets = self.upload_all(&with_audio).await?;

        stage.advance();
        let image_assets = self.upload_all(&no_audio).await?;

        stage.advance();
        let raw = self
            .generator
            .generate_narrative(templates.story(), &story_assets)
            .await?;

        stage.advance();
        let story = decode(&raw)?;
        let story_path = output.write_story(&story).await?;
        info!(pages = story.len(), path = %story_path.display(), "Story saved");

        stage.advance();
        let mut report = RunReport::new(story_path);
        for page in &story {
            self.reporter
                .status(&format!("Generating image for {}...", page.id()));
            let prompt = image_prompt(templates.comic(), story.character_concept(), page.text());

            match self.generator.generate_image(&prompt, &image_assets).await {
                Ok(Some(inline)) => {
                    let (mime_type, data) = inline.into_parts();
                    let image = GeneratedImage::new(page.id(), mime_type, data);
                    let path = output.write_image(&image).await?;
                    info!(page = %page.id(), path = %path.display(), "Saved image");
                    report.record_image(page.id(), path);
                }
                Ok(None) => {
                    warn!(page = %page.id(), "No image generated");
                    report.record_failure(PageFailure::new(
                        page.id(),
                        PageFailureReason::NoImageData,
                    ));
                }
                Err(e) => {
                    error!(page = %page.id(), error = %e, "Image generation failed");
                    report.record_failure(PageFailure::new(
                        page.id(),
                        PageFailureReason::Generation(e.to_string()),
                    ));
                }
            }
        }

        stage.advance();
        info!(
            images = report.images().len(),
            failures = report.failures().len(),
            "Process complete"
        );
        Ok(report)
    }

    async fn upload_all(&self, videos: &[DerivedVideo]) -> MotionMangaResult<Vec<RemoteAsset>> {
        let mut assets = Vec::with_capacity(videos.len());
        for video in videos {
            assets.push(self.activator.upload(video).await?);
        }
        Ok(assets)
    }
}

/// Walks [`Stage`] in order, reporting each boundary.
struct StageCursor<'a> {
    current: Stage,
    reporter: &'a dyn ProgressReporter,
}

impl<'a> StageCursor<'a> {
    fn start(reporter: &'a dyn ProgressReporter) -> Self {
        let current = Stage::CollectInputs;
        reporter.stage(current);
        Self { current, reporter }
    }

    fn advance(&mut self) {
        if let Some(next) = self.current.next() {
            self.current = next;
            self.reporter.stage(next);
        }
    }
}
