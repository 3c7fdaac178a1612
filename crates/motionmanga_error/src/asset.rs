//! Remote asset error types: submission, activation and activation timeout.

use std::time::Duration;

/// Failures while submitting a file to the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum UploadErrorKind {
    /// Local file could not be read
    #[display("Failed to read {}: {}", path, message)]
    FileRead {
        /// Local path
        path: String,
        /// Underlying I/O message
        message: String,
    },
    /// Transport-level failure
    #[display("Upload request failed: {}", _0)]
    Request(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Resumable upload session did not return an upload URL
    #[display("Upload session for {} returned no upload URL", _0)]
    MissingUploadUrl(String),
    /// Response body could not be understood
    #[display("Invalid upload response: {}", _0)]
    InvalidResponse(String),
}

/// Upload error with source location tracking.
///
/// # Examples
///
/// ```
/// use motionmanga_error::{UploadError, UploadErrorKind};
///
/// let err = UploadError::new(UploadErrorKind::HttpError {
///     status_code: 413,
///     message: "Request entity too large".to_string(),
/// });
/// assert!(format!("{}", err).contains("413"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Upload Error: {} at line {} in {}", kind, line, file)]
pub struct UploadError {
    /// The kind of error that occurred
    pub kind: UploadErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl UploadError {
    /// Create a new UploadError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: UploadErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Failures while waiting for an uploaded file to become usable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ActivationErrorKind {
    /// Remote processing ended in a state other than active
    #[display("File {} failed to process. State: {}", name, state)]
    Failed {
        /// Remote file identifier
        name: String,
        /// Terminal state reported by the service
        state: String,
    },
    /// Status request failed
    #[display("Status request for {} failed: {}", name, message)]
    Poll {
        /// Remote file identifier
        name: String,
        /// Error message
        message: String,
    },
}

/// Activation error with source location tracking.
///
/// # Examples
///
/// ```
/// use motionmanga_error::{ActivationError, ActivationErrorKind};
///
/// let err = ActivationError::new(ActivationErrorKind::Failed {
///     name: "files/abc123".to_string(),
///     state: "FAILED".to_string(),
/// });
/// assert!(format!("{}", err).contains("files/abc123"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Activation Error: {} at line {} in {}", kind, line, file)]
pub struct ActivationError {
    /// The kind of error that occurred
    pub kind: ActivationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ActivationError {
    /// Create a new ActivationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ActivationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// An uploaded file did not reach a terminal state before the deadline.
///
/// # Examples
///
/// ```
/// use motionmanga_error::TimeoutError;
/// use std::time::Duration;
///
/// let err = TimeoutError::new("files/abc123", Duration::from_secs(600));
/// assert!(format!("{}", err).contains("600"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display(
    "Timeout Error: file {} still processing after {}s at line {} in {}",
    name,
    waited.as_secs(),
    line,
    file
)]
pub struct TimeoutError {
    /// Remote file identifier
    pub name: String,
    /// Time spent waiting before giving up
    pub waited: Duration,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl TimeoutError {
    /// Create a new TimeoutError with automatic location tracking.
    #[track_caller]
    pub fn new(name: impl Into<String>, waited: Duration) -> Self {
        let location = std::panic::Location::caller();
        Self {
            name: name.into(),
            waited,
            line: location.line(),
            file: location.file(),
        }
    }
}
