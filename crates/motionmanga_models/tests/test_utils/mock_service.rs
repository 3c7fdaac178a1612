//! Scripted generation service for testing.

use async_trait::async_trait;
use motionmanga_core::AssetState;
use motionmanga_error::{
    ActivationError, GenerationError, GenerationErrorKind, UploadError, UploadErrorKind,
};
use motionmanga_interface::{
    ContentRequest, ContentResponse, GenerativeService, Part, RemoteFile,
};
use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// A single scripted generation response.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Text-only candidate
    Text(String),
    /// Candidate with inline image data (already base64 encoded)
    Image {
        mime_type: String,
        base64: String,
    },
    /// Text candidate with no inline data
    NoImage(String),
    /// Request failure
    Error(GenerationErrorKind),
}

impl MockResponse {
    fn into_result(self) -> Result<ContentResponse, GenerationError> {
        match self {
            MockResponse::Text(text) | MockResponse::NoImage(text) => {
                Ok(ContentResponse::from_parts(vec![Part::text(text)]))
            }
            MockResponse::Image { mime_type, base64 } => Ok(ContentResponse::from_parts(vec![
                Part::text("Here is the page"),
                Part::inline(mime_type, base64),
            ])),
            MockResponse::Error(kind) => Err(GenerationError::new(kind)),
        }
    }
}

#[derive(Default)]
struct State {
    uploads: Vec<PathBuf>,
    polls: HashMap<String, usize>,
    requests: Vec<(String, ContentRequest)>,
    responses: VecDeque<MockResponse>,
}

/// Generation service whose file states and responses are scripted.
///
/// Every uploaded file walks the same `states` script: the upload returns
/// the first entry and each status fetch advances one step, repeating the
/// last entry once the script is exhausted.
pub struct MockGenerativeService {
    states: Vec<AssetState>,
    upload_error: Option<UploadErrorKind>,
    fallback: MockResponse,
    state: Mutex<State>,
}

impl MockGenerativeService {
    /// Files become active immediately; generation returns `text`.
    #[allow(dead_code)]
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::with_states(vec![AssetState::Active]).with_fallback(MockResponse::Text(text.into()))
    }

    /// Files walk through `states`.
    pub fn with_states(states: Vec<AssetState>) -> Self {
        Self {
            states,
            upload_error: None,
            fallback: MockResponse::Text("{}".to_string()),
            state: Mutex::new(State::default()),
        }
    }

    /// Every upload fails with `kind`.
    #[allow(dead_code)]
    pub fn with_upload_error(mut self, kind: UploadErrorKind) -> Self {
        self.upload_error = Some(kind);
        self
    }

    /// Response used once the scripted responses run out.
    #[allow(dead_code)]
    pub fn with_fallback(mut self, response: MockResponse) -> Self {
        self.fallback = response;
        self
    }

    /// Queue generation responses, consumed in order.
    #[allow(dead_code)]
    pub fn with_responses(self, responses: Vec<MockResponse>) -> Self {
        self.state.lock().unwrap().responses = responses.into();
        self
    }

    /// Number of upload_file calls.
    #[allow(dead_code)]
    pub fn upload_count(&self) -> usize {
        self.state.lock().unwrap().uploads.len()
    }

    /// Total number of get_file calls.
    #[allow(dead_code)]
    pub fn poll_count(&self) -> usize {
        self.state.lock().unwrap().polls.values().sum()
    }

    /// Number of generate_content calls.
    #[allow(dead_code)]
    pub fn generate_count(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }

    /// Every generate_content call as `(model, request)`.
    #[allow(dead_code)]
    pub fn requests(&self) -> Vec<(String, ContentRequest)> {
        self.state.lock().unwrap().requests.clone()
    }

    fn state_at(&self, step: usize) -> AssetState {
        self.states
            .get(step)
            .or(self.states.last())
            .copied()
            .unwrap_or(AssetState::Active)
    }

    fn file(&self, name: &str, step: usize) -> RemoteFile {
        RemoteFile {
            name: name.to_string(),
            uri: format!("https://files.example.test/{}", name),
            mime_type: "video/mp4".to_string(),
            state: self.state_at(step),
        }
    }
}

#[async_trait]
impl GenerativeService for MockGenerativeService {
    async fn upload_file(&self, path: &Path, _mime_type: &str) -> Result<RemoteFile, UploadError> {
        if let Some(kind) = &self.upload_error {
            return Err(UploadError::new(kind.clone()));
        }
        let mut state = self.state.lock().unwrap();
        state.uploads.push(path.to_path_buf());
        let name = format!("files/{}", state.uploads.len());
        state.polls.insert(name.clone(), 0);
        Ok(self.file(&name, 0))
    }

    async fn get_file(&self, name: &str) -> Result<RemoteFile, ActivationError> {
        let mut state = self.state.lock().unwrap();
        let polls = state.polls.entry(name.to_string()).or_insert(0);
        *polls += 1;
        let step = *polls;
        Ok(self.file(name, step))
    }

    async fn generate_content(
        &self,
        model: &str,
        request: &ContentRequest,
    ) -> Result<ContentResponse, GenerationError> {
        let response = {
            let mut state = self.state.lock().unwrap();
            state.requests.push((model.to_string(), request.clone()));
            state
                .responses
                .pop_front()
                .unwrap_or_else(|| self.fallback.clone())
        };
        response.into_result()
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}
