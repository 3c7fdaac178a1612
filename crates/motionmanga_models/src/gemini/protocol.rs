//! Gemini Files API wire types.
//!
//! Generation requests and responses live in `motionmanga_interface`; only
//! the shapes specific to this transport are defined here.

use motionmanga_core::AssetState;
use motionmanga_interface::RemoteFile;
use serde::{Deserialize, Serialize};

/// Body of the resumable upload start request.
#[derive(Debug, Serialize)]
pub(crate) struct StartUploadRequest<'a> {
    pub file: UploadMetadata<'a>,
}

/// File metadata sent when opening an upload session.
#[derive(Debug, Serialize)]
pub(crate) struct UploadMetadata<'a> {
    pub display_name: &'a str,
}

/// Upload finalize response: `{"file": {...}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct FileEnvelope {
    pub file: FileResource,
}

/// A file resource as returned by the Files API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FileResource {
    pub name: String,
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub state: String,
}

impl From<FileResource> for RemoteFile {
    fn from(file: FileResource) -> Self {
        RemoteFile {
            state: AssetState::from_remote(&file.state),
            name: file.name,
            uri: file.uri,
            mime_type: file.mime_type,
        }
    }
}

/// Google API error envelope: `{"error": {"code", "message", "status"}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
}

/// Human-readable message for an error response body.
///
/// Falls back to the raw body when it is not a Google error envelope.
pub(crate) fn error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorEnvelope>(body) {
        Ok(envelope) if envelope.error.status.is_empty() => envelope.error.message,
        Ok(envelope) => format!("{} ({})", envelope.error.message, envelope.error.status),
        Err(_) => body.trim().to_string(),
    }
}
