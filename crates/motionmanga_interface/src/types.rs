//! Request and response types for the generation service.

use motionmanga_core::AssetState;
use serde::{Deserialize, Serialize};

/// Status of an uploaded file as reported by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFile {
    /// Remote identifier, e.g. `files/abc123`
    pub name: String,
    /// URI used to reference the file in requests
    pub uri: String,
    /// MIME type recorded by the service
    pub mime_type: String,
    /// Current activation state
    pub state: AssetState,
}

/// A generation request: one user turn plus generation parameters.
///
/// # Examples
///
/// ```
/// use motionmanga_interface::{ContentRequest, GenerationConfig, Part};
///
/// let request = ContentRequest::user(
///     vec![Part::text("Tell a story"), Part::file("https://files/1", "video/mp4")],
///     GenerationConfig::json(),
/// );
/// assert_eq!(request.contents[0].parts.len(), 2);
/// assert_eq!(request.file_uris(), vec!["https://files/1"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRequest {
    /// Conversation turns
    pub contents: Vec<Content>,
    /// Generation parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl ContentRequest {
    /// Build a single-turn user request.
    pub fn user(parts: Vec<Part>, config: GenerationConfig) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts,
            }],
            generation_config: Some(config),
        }
    }

    /// URIs of every file part, in order.
    pub fn file_uris(&self) -> Vec<&str> {
        self.contents
            .iter()
            .flat_map(|c| &c.parts)
            .filter_map(|p| p.file_data.as_ref())
            .map(|f| f.file_uri.as_str())
            .collect()
    }

    /// Concatenated text of every text part.
    pub fn prompt_text(&self) -> String {
        self.contents
            .iter()
            .flat_map(|c| &c.parts)
            .filter_map(|p| p.text.as_deref())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// One conversation turn.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Content {
    /// `user` or `model`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Ordered content parts
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A content part. Exactly one field is set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Text content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Inline binary content (base64)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
    /// Reference to an uploaded file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_data: Option<FileData>,
}

impl Part {
    /// A text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// A reference to an uploaded file.
    pub fn file(uri: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            file_data: Some(FileData {
                mime_type: mime_type.into(),
                file_uri: uri.into(),
            }),
            ..Default::default()
        }
    }

    /// An inline binary part with already base64-encoded data.
    pub fn inline(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            inline_data: Some(InlineData {
                mime_type: mime_type.into(),
                data: data.into(),
            }),
            ..Default::default()
        }
    }
}

/// Inline binary payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// MIME type of the payload
    pub mime_type: String,
    /// Base64-encoded bytes
    pub data: String,
}

/// Uploaded file reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileData {
    /// MIME type of the file
    pub mime_type: String,
    /// Remote URI returned by the upload
    pub file_uri: String,
}

/// Generation parameters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Requested response MIME type, e.g. `application/json`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    /// Requested output modalities, e.g. `TEXT`, `IMAGE`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_modalities: Option<Vec<String>>,
    /// Deterministic sampling seed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    /// Image output parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_config: Option<ImageConfig>,
}

impl GenerationConfig {
    /// Request a structured JSON response.
    pub fn json() -> Self {
        Self {
            response_mime_type: Some("application/json".to_string()),
            ..Default::default()
        }
    }

    /// Request an image response with a fixed seed.
    pub fn image(seed: i64, image_config: ImageConfig) -> Self {
        Self {
            response_modalities: Some(vec!["TEXT".to_string(), "IMAGE".to_string()]),
            seed: Some(seed),
            image_config: Some(image_config),
            ..Default::default()
        }
    }
}

/// Image output parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageConfig {
    /// Aspect ratio, e.g. `9:16`
    pub aspect_ratio: String,
    /// Resolution class, e.g. `2K`
    pub image_size: String,
}

/// A generation response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentResponse {
    /// Response candidates; the first is used
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One response candidate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content
    #[serde(default)]
    pub content: Option<Content>,
    /// Why generation stopped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

impl ContentResponse {
    /// A response with one candidate holding `parts`.
    pub fn from_parts(parts: Vec<Part>) -> Self {
        Self {
            candidates: vec![Candidate {
                content: Some(Content {
                    role: Some("model".to_string()),
                    parts,
                }),
                finish_reason: Some("STOP".to_string()),
            }],
        }
    }

    fn first_parts(&self) -> &[Part] {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| c.parts.as_slice())
            .unwrap_or_default()
    }

    /// Concatenated text of the first candidate's text parts.
    ///
    /// # Examples
    ///
    /// ```
    /// use motionmanga_interface::{ContentResponse, Part};
    ///
    /// let response = ContentResponse::from_parts(vec![Part::text("{\"page_1\":"), Part::text("\"a\"}")]);
    /// assert_eq!(response.text(), "{\"page_1\":\"a\"}");
    /// ```
    pub fn text(&self) -> String {
        self.first_parts()
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect()
    }

    /// First inline binary part of the first candidate.
    pub fn first_inline_data(&self) -> Option<&InlineData> {
        self.first_parts().iter().find_map(|p| p.inline_data.as_ref())
    }

    /// The first candidate's finish reason.
    pub fn finish_reason(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
    }
}
