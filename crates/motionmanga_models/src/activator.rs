//! Upload and activation of derived videos.

use derive_getters::Getters;
use motionmanga_core::{AssetState, DerivedVideo, RemoteAsset, video_mime_type};
use motionmanga_error::{
    ActivationError, ActivationErrorKind, MotionMangaResult, TimeoutError,
};
use motionmanga_interface::{GenerativeService, ProgressReporter, RemoteFile};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, instrument};

/// Poll cadence and deadline for remote file processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ActivationSettings {
    /// Delay between status fetches
    poll_interval: Duration,
    /// Give up after this much time in a non-terminal state; `None` waits forever
    deadline: Option<Duration>,
}

impl Default for ActivationSettings {
    /// Poll every 2 seconds for up to 10 minutes.
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(2),
            deadline: Some(Duration::from_secs(600)),
        }
    }
}

impl ActivationSettings {
    /// Create activation settings.
    pub fn new(poll_interval: Duration, deadline: Option<Duration>) -> Self {
        Self {
            poll_interval,
            deadline,
        }
    }
}

/// Submits derived videos and waits until the service reports them active.
pub struct AssetActivator {
    service: Arc<dyn GenerativeService>,
    reporter: Arc<dyn ProgressReporter>,
    settings: ActivationSettings,
}

impl AssetActivator {
    /// Create an activator.
    pub fn new(
        service: Arc<dyn GenerativeService>,
        reporter: Arc<dyn ProgressReporter>,
        settings: ActivationSettings,
    ) -> Self {
        Self {
            service,
            reporter,
            settings,
        }
    }

    /// Active settings.
    pub fn settings(&self) -> &ActivationSettings {
        &self.settings
    }

    /// Upload `video` and wait until it is active.
    ///
    /// # Errors
    ///
    /// - `UploadError` when the submission fails
    /// - `ActivationError` when a status fetch fails or processing ends in
    ///   any state other than active
    /// - `TimeoutError` when the deadline passes first
    #[instrument(skip(self, video), fields(file = %video.file_name(), purpose = %video.purpose()))]
    pub async fn upload(&self, video: &DerivedVideo) -> MotionMangaResult<RemoteAsset> {
        let mime_type = video_mime_type(video.path());
        self.reporter
            .status(&format!("Uploading {}...", video.file_name()));

        let file = self.service.upload_file(video.path(), mime_type).await?;
        debug!(name = %file.name, state = %file.state, "Upload accepted");

        let file = self.wait_until_active(file).await?;
        info!(name = %file.name, uri = %file.uri, "File active");

        Ok(RemoteAsset::new(
            file.name,
            file.uri,
            if file.mime_type.is_empty() {
                mime_type.to_string()
            } else {
                file.mime_type
            },
            file.state,
            video.clone(),
        ))
    }

    async fn wait_until_active(&self, mut file: RemoteFile) -> MotionMangaResult<RemoteFile> {
        let started = Instant::now();
        let mut polls = 0usize;

        loop {
            match file.state {
                AssetState::Active => return Ok(file),
                AssetState::Failed => {
                    return Err(ActivationError::new(ActivationErrorKind::Failed {
                        name: file.name,
                        state: file.state.to_string(),
                    })
                    .into());
                }
                AssetState::Pending | AssetState::Processing => {}
            }

            let waited = started.elapsed();
            if let Some(deadline) = self.settings.deadline {
                if waited >= deadline {
                    return Err(TimeoutError::new(file.name, waited).into());
                }
            }

            self.reporter
                .status(&format!("Processing {}...", file.name));
            tokio::time::sleep(self.settings.poll_interval).await;

            polls += 1;
            file = self.service.get_file(&file.name).await?;
            debug!(name = %file.name, state = %file.state, polls, "Polled file state");
        }
    }
}
