//! Input selection error types.

/// Problems with the videos handed to a run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum InputErrorKind {
    /// No video was given
    #[display("At least one video file is required")]
    NoVideos,
    /// More videos than a run accepts
    #[display("You can provide at most {} video files (got {})", max, count)]
    TooManyVideos {
        /// Number of videos given
        count: usize,
        /// Maximum accepted
        max: usize,
    },
    /// Path does not name a regular file
    #[display("Not a video file: {}", _0)]
    NotAFile(String),
    /// File metadata could not be read
    #[display("Cannot read video file: {}", _0)]
    Unreadable(String),
    /// Two videos share a file name, so their derived outputs would collide
    #[display("Video file names must be unique: {}", _0)]
    DuplicateFileName(String),
}

/// Input error with source location tracking.
///
/// # Examples
///
/// ```
/// use motionmanga_error::{InputError, InputErrorKind};
///
/// let err = InputError::new(InputErrorKind::TooManyVideos { count: 4, max: 3 });
/// assert!(format!("{}", err).contains("at most 3"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Input Error: {} at line {} in {}", kind, line, file)]
pub struct InputError {
    /// The kind of error that occurred
    pub kind: InputErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl InputError {
    /// Create a new InputError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: InputErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
