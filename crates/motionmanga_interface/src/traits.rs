//! Core collaborator traits.

use crate::{ContentRequest, ContentResponse, RemoteFile};
use async_trait::async_trait;
use motionmanga_core::Stage;
use motionmanga_error::{ActivationError, GenerationError, UploadError};
use std::path::Path;

/// A remote multimodal generation service.
///
/// Implementations are constructed once per run and shared by reference
/// across every stage.
#[async_trait]
pub trait GenerativeService: Send + Sync {
    /// Submit a local file, returning the service's handle in its initial state.
    async fn upload_file(&self, path: &Path, mime_type: &str) -> Result<RemoteFile, UploadError>;

    /// Fetch the current status of a previously uploaded file.
    async fn get_file(&self, name: &str) -> Result<RemoteFile, ActivationError>;

    /// Run one generation request against `model`.
    async fn generate_content(
        &self,
        model: &str,
        request: &ContentRequest,
    ) -> Result<ContentResponse, GenerationError>;

    /// Provider name for logging.
    fn provider_name(&self) -> &'static str;
}

/// Receives human-readable progress updates.
///
/// Called at stage boundaries and while polling. Implementations must not
/// affect control flow.
pub trait ProgressReporter: Send + Sync {
    /// A new pipeline stage has begun.
    fn stage(&self, stage: Stage);

    /// Free-form status within the current stage.
    fn status(&self, message: &str);
}

/// Reporter that discards every update.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl ProgressReporter for NullReporter {
    fn stage(&self, _stage: Stage) {}

    fn status(&self, _message: &str) {}
}
