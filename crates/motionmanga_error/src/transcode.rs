//! Transcoding error types.
//!
//! The transcoder absorbs these errors and falls back to the source file, so
//! they normally only surface in logs. Locating the encoder is the exception:
//! without one the run cannot start.

/// Encoder subprocess failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum TranscodeErrorKind {
    /// Encoder binary could not be located
    #[display("Encoder not found: {}", _0)]
    EncoderNotFound(String),
    /// Encoder process could not be started
    #[display("Failed to start encoder: {}", _0)]
    Spawn(String),
    /// Encoder exited unsuccessfully
    #[display("Encoder exited with {}: {}", status, stderr)]
    Failed {
        /// Exit status as reported by the OS
        status: String,
        /// Tail of the encoder's stderr
        stderr: String,
    },
}

/// Transcode error with source location tracking.
///
/// # Examples
///
/// ```
/// use motionmanga_error::{TranscodeError, TranscodeErrorKind};
///
/// let err = TranscodeError::new(TranscodeErrorKind::Failed {
///     status: "exit status: 1".to_string(),
///     stderr: "Invalid data found when processing input".to_string(),
/// });
/// assert!(format!("{}", err).contains("Invalid data"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Transcode Error: {} at line {} in {}", kind, line, file)]
pub struct TranscodeError {
    /// The kind of error that occurred
    pub kind: TranscodeErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl TranscodeError {
    /// Create a new TranscodeError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TranscodeErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
