//! Story document decoding error types.

/// Ways a narrative response can fail to decode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum DecodeErrorKind {
    /// Payload is not valid JSON
    #[display("Response is not valid JSON: {}", _0)]
    InvalidJson(String),
    /// Payload is JSON but not an object
    #[display("Expected a JSON object, got {}", _0)]
    NotAnObject(String),
    /// `pages` key present but not an object
    #[display("'pages' must be an object, got {}", _0)]
    InvalidPages(String),
    /// A page value is not text
    #[display("Page '{}' must be a string", _0)]
    InvalidPageText(String),
    /// `character_concept` is neither a string nor null
    #[display("'character_concept' must be a string")]
    InvalidCharacterConcept,
    /// Document contains no pages
    #[display("Story contains no pages")]
    NoPages,
}

/// Decode error with source location tracking.
///
/// # Examples
///
/// ```
/// use motionmanga_error::{DecodeError, DecodeErrorKind};
///
/// let err = DecodeError::new(DecodeErrorKind::NoPages);
/// assert!(format!("{}", err).contains("no pages"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Decode Error: {} at line {} in {}", kind, line, file)]
pub struct DecodeError {
    /// The kind of error that occurred
    pub kind: DecodeErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl DecodeError {
    /// Create a new DecodeError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DecodeErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
