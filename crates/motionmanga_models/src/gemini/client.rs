//! Gemini REST client.

use super::protocol::{FileEnvelope, FileResource, StartUploadRequest, UploadMetadata, error_message};
use async_trait::async_trait;
use motionmanga_error::{
    ActivationError, ActivationErrorKind, GenerationError, GenerationErrorKind, UploadError,
    UploadErrorKind,
};
use motionmanga_interface::{ContentRequest, ContentResponse, GenerativeService, RemoteFile};
use reqwest::Client;
use std::path::Path;
use tracing::{debug, error, instrument};

/// Public Gemini API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

const API_KEY_HEADER: &str = "x-goog-api-key";
const UPLOAD_URL_HEADER: &str = "x-goog-upload-url";

/// Client for the Gemini REST API.
///
/// Holds one pooled HTTP client; construct once and share.
#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client using `GEMINI_API_KEY` from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationErrorKind::MissingApiKey`] if the variable is
    /// unset or empty.
    pub fn from_env() -> Result<Self, GenerationError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| GenerationError::new(GenerationErrorKind::MissingApiKey))?;
        Self::new(api_key)
    }

    /// Create a client with an explicit API key.
    #[instrument(skip(api_key))]
    pub fn new(api_key: impl Into<String>) -> Result<Self, GenerationError> {
        let http = Client::builder()
            .build()
            .map_err(|e| GenerationError::new(GenerationErrorKind::ClientCreation(e.to_string())))?;

        debug!(base_url = DEFAULT_BASE_URL, "Created Gemini client");

        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the client at a different endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Endpoint this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Open a resumable upload session and return its upload URL.
    async fn start_upload(
        &self,
        display_name: &str,
        mime_type: &str,
        size: usize,
    ) -> Result<String, UploadError> {
        let url = format!("{}/upload/v1beta/files", self.base_url);
        let body = StartUploadRequest {
            file: UploadMetadata { display_name },
        };

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .header("X-Goog-Upload-Protocol", "resumable")
            .header("X-Goog-Upload-Command", "start")
            .header("X-Goog-Upload-Header-Content-Length", size.to_string())
            .header("X-Goog-Upload-Header-Content-Type", mime_type)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Upload start request failed");
                UploadError::new(UploadErrorKind::Request(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %text, "Upload start rejected");
            return Err(UploadError::new(UploadErrorKind::HttpError {
                status_code: status.as_u16(),
                message: error_message(&text),
            }));
        }

        response
            .headers()
            .get(UPLOAD_URL_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
            .ok_or_else(|| UploadError::new(UploadErrorKind::MissingUploadUrl(display_name.to_string())))
    }
}

#[async_trait]
impl GenerativeService for GeminiClient {
    #[instrument(skip(self, path), fields(path = %path.display()))]
    async fn upload_file(&self, path: &Path, mime_type: &str) -> Result<RemoteFile, UploadError> {
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            UploadError::new(UploadErrorKind::FileRead {
                path: path.display().to_string(),
                message: e.to_string(),
            })
        })?;
        let display_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "video".to_string());

        let upload_url = self
            .start_upload(&display_name, mime_type, bytes.len())
            .await?;
        debug!(size = bytes.len(), "Upload session opened");

        let response = self
            .http
            .post(&upload_url)
            .header(API_KEY_HEADER, &self.api_key)
            .header("X-Goog-Upload-Offset", "0")
            .header("X-Goog-Upload-Command", "upload, finalize")
            .body(bytes)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Upload request failed");
                UploadError::new(UploadErrorKind::Request(e.to_string()))
            })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| UploadError::new(UploadErrorKind::Request(e.to_string())))?;
        if !status.is_success() {
            error!(status = %status, error = %text, "Upload rejected");
            return Err(UploadError::new(UploadErrorKind::HttpError {
                status_code: status.as_u16(),
                message: error_message(&text),
            }));
        }

        let envelope: FileEnvelope = serde_json::from_str(&text).map_err(|e| {
            error!(error = ?e, response = %text, "Failed to parse upload response");
            UploadError::new(UploadErrorKind::InvalidResponse(e.to_string()))
        })?;

        let file = RemoteFile::from(envelope.file);
        debug!(name = %file.name, state = %file.state, "Uploaded file");
        Ok(file)
    }

    #[instrument(skip(self))]
    async fn get_file(&self, name: &str) -> Result<RemoteFile, ActivationError> {
        let url = format!("{}/v1beta/{}", self.base_url, name);
        let poll_error = |message: String| {
            ActivationError::new(ActivationErrorKind::Poll {
                name: name.to_string(),
                message,
            })
        };

        let response = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| poll_error(e.to_string()))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| poll_error(e.to_string()))?;
        if !status.is_success() {
            error!(status = %status, error = %text, "File status request rejected");
            return Err(poll_error(format!("HTTP {}: {}", status.as_u16(), error_message(&text))));
        }

        let file: FileResource = serde_json::from_str(&text)
            .map_err(|e| poll_error(format!("Invalid file resource: {}", e)))?;
        Ok(file.into())
    }

    #[instrument(skip(self, model, request), fields(model = %model, files = request.file_uris().len()))]
    async fn generate_content(
        &self,
        model: &str,
        request: &ContentRequest,
    ) -> Result<ContentResponse, GenerationError> {
        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, model);

        debug!(url = %url, "Sending request to Gemini");

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                GenerationError::new(GenerationErrorKind::ApiRequest(e.to_string()))
            })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GenerationError::new(GenerationErrorKind::ApiRequest(e.to_string())))?;
        if !status.is_success() {
            error!(status = %status, error = %text, "API error");
            return Err(GenerationError::new(GenerationErrorKind::HttpError {
                status_code: status.as_u16(),
                message: error_message(&text),
            }));
        }

        debug!(response_len = text.len(), "Received response");

        serde_json::from_str(&text).map_err(|e| {
            error!(error = ?e, "Failed to parse generation response");
            GenerationError::new(GenerationErrorKind::InvalidResponse(e.to_string()))
        })
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}
