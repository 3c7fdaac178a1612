//! Mock collaborators for pipeline tests.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use motionmanga_core::{AssetState, Stage};
use motionmanga_error::{
    ActivationError, GenerationError, GenerationErrorKind, TranscodeError, TranscodeErrorKind,
    UploadError, UploadErrorKind,
};
use motionmanga_interface::{
    ContentRequest, ContentResponse, GenerativeService, Part, ProgressReporter, RemoteFile,
};
use motionmanga_media::Encoder;
use std::collections::VecDeque;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Encoder that copies `-i <input>` to the last argument.
#[derive(Debug, Clone, Default)]
pub struct MockEncoder {
    calls: Arc<Mutex<Vec<Vec<OsString>>>>,
}

impl MockEncoder {
    /// Number of encode() calls.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Encoder for MockEncoder {
    async fn encode(&self, args: &[OsString]) -> Result<(), TranscodeError> {
        self.calls.lock().unwrap().push(args.to_vec());
        let input = args
            .iter()
            .position(|a| a == "-i")
            .and_then(|i| args.get(i + 1))
            .expect("input argument");
        let output = args.last().expect("output argument");
        std::fs::copy(input, output).map_err(|e| {
            TranscodeError::new(TranscodeErrorKind::Failed {
                status: "exit status: 1".to_string(),
                stderr: e.to_string(),
            })
        })?;
        Ok(())
    }
}

/// A single scripted generation response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Narrative text
    Text(String),
    /// A PNG-looking image payload
    Image(Vec<u8>),
    /// A response without inline data
    NoImage,
    /// A request failure
    Error,
}

#[derive(Default)]
struct Calls {
    uploads: Vec<PathBuf>,
    requests: Vec<(String, ContentRequest)>,
}

/// Generation service with immediate activation and scripted responses.
pub struct MockService {
    fail_uploads: bool,
    responses: Mutex<VecDeque<MockResponse>>,
    fallback: MockResponse,
    calls: Mutex<Calls>,
}

impl MockService {
    /// Respond with `responses` in order, then with `fallback`.
    pub fn new(responses: Vec<MockResponse>, fallback: MockResponse) -> Self {
        Self {
            fail_uploads: false,
            responses: Mutex::new(responses.into()),
            fallback,
            calls: Mutex::new(Calls::default()),
        }
    }

    /// Every upload is rejected.
    #[allow(dead_code)]
    pub fn failing_uploads() -> Self {
        Self {
            fail_uploads: true,
            ..Self::new(Vec::new(), MockResponse::Error)
        }
    }

    /// Paths passed to upload_file, in call order.
    pub fn uploads(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().uploads.clone()
    }

    /// Every generate_content call as `(model, request)`.
    pub fn requests(&self) -> Vec<(String, ContentRequest)> {
        self.calls.lock().unwrap().requests.clone()
    }
}

#[async_trait]
impl GenerativeService for MockService {
    async fn upload_file(&self, path: &Path, mime_type: &str) -> Result<RemoteFile, UploadError> {
        if self.fail_uploads {
            return Err(UploadError::new(UploadErrorKind::HttpError {
                status_code: 403,
                message: "Permission denied".to_string(),
            }));
        }
        let mut calls = self.calls.lock().unwrap();
        calls.uploads.push(path.to_path_buf());
        let name = format!("files/{}", calls.uploads.len());
        Ok(RemoteFile {
            uri: format!("https://files.example.test/{}", name),
            name,
            mime_type: mime_type.to_string(),
            state: AssetState::Active,
        })
    }

    async fn get_file(&self, name: &str) -> Result<RemoteFile, ActivationError> {
        Ok(RemoteFile {
            name: name.to_string(),
            uri: format!("https://files.example.test/{}", name),
            mime_type: "video/mp4".to_string(),
            state: AssetState::Active,
        })
    }

    async fn generate_content(
        &self,
        model: &str,
        request: &ContentRequest,
    ) -> Result<ContentResponse, GenerationError> {
        self.calls
            .lock()
            .unwrap()
            .requests
            .push((model.to_string(), request.clone()));
        let response = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());

        match response {
            MockResponse::Text(text) => Ok(ContentResponse::from_parts(vec![Part::text(text)])),
            MockResponse::Image(bytes) => Ok(ContentResponse::from_parts(vec![Part::inline(
                "image/png",
                STANDARD.encode(bytes),
            )])),
            MockResponse::NoImage => Ok(ContentResponse::from_parts(vec![Part::text(
                "I could not draw this scene.",
            )])),
            MockResponse::Error => Err(GenerationError::new(GenerationErrorKind::HttpError {
                status_code: 500,
                message: "Internal error".to_string(),
            })),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

/// Reporter that records every stage and status line.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    stages: Mutex<Vec<Stage>>,
    statuses: Mutex<Vec<String>>,
}

impl RecordingReporter {
    /// Stages reported so far.
    pub fn stages(&self) -> Vec<Stage> {
        self.stages.lock().unwrap().clone()
    }

    /// Status lines reported so far.
    #[allow(dead_code)]
    pub fn statuses(&self) -> Vec<String> {
        self.statuses.lock().unwrap().clone()
    }
}

impl ProgressReporter for RecordingReporter {
    fn stage(&self, stage: Stage) {
        self.stages.lock().unwrap().push(stage);
    }

    fn status(&self, message: &str) {
        self.statuses.lock().unwrap().push(message.to_string());
    }
}
