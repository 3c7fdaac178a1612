//! Top-level error wrapper types.

use crate::{
    ActivationError, ConfigError, DecodeError, GenerationError, InputError, StorageError,
    TimeoutError, TranscodeError, UploadError,
};

/// One variant per pipeline failure domain.
///
/// # Examples
///
/// ```
/// use motionmanga_error::{MotionMangaError, MotionMangaErrorKind, DecodeError, DecodeErrorKind};
///
/// let err: MotionMangaError = DecodeError::new(DecodeErrorKind::NoPages).into();
/// assert!(matches!(err.kind(), MotionMangaErrorKind::Decode(_)));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum MotionMangaErrorKind {
    /// Invalid run inputs
    #[from(InputError)]
    Input(InputError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Local file read/write error
    #[from(StorageError)]
    Storage(StorageError),
    /// Encoder error
    #[from(TranscodeError)]
    Transcode(TranscodeError),
    /// File submission error
    #[from(UploadError)]
    Upload(UploadError),
    /// Remote processing error
    #[from(ActivationError)]
    Activation(ActivationError),
    /// Remote processing did not finish in time
    #[from(TimeoutError)]
    Timeout(TimeoutError),
    /// Generation request error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Narrative response decoding error
    #[from(DecodeError)]
    Decode(DecodeError),
}

/// MotionManga error with kind discrimination.
///
/// # Examples
///
/// ```
/// use motionmanga_error::{MotionMangaResult, ConfigError};
///
/// fn might_fail() -> MotionMangaResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("MotionManga Error: {}", _0)]
pub struct MotionMangaError(Box<MotionMangaErrorKind>);

impl MotionMangaError {
    /// Create a new error from a kind.
    pub fn new(kind: MotionMangaErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MotionMangaErrorKind {
        &self.0
    }
}

impl<T> From<T> for MotionMangaError
where
    T: Into<MotionMangaErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for MotionManga operations.
pub type MotionMangaResult<T> = std::result::Result<T, MotionMangaError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ActivationErrorKind, GenerationErrorKind};

    #[test]
    fn test_kind_preserved_through_conversion() {
        let err: MotionMangaError = ActivationError::new(ActivationErrorKind::Failed {
            name: "files/x".to_string(),
            state: "FAILED".to_string(),
        })
        .into();

        match err.kind() {
            MotionMangaErrorKind::Activation(inner) => {
                assert!(matches!(inner.kind, ActivationErrorKind::Failed { .. }));
            }
            other => panic!("unexpected kind: {other}"),
        }
    }

    #[test]
    fn test_display_includes_location() {
        let err = GenerationError::new(GenerationErrorKind::ApiRequest("boom".to_string()));
        let rendered = format!("{}", MotionMangaError::from(err));
        assert!(rendered.contains("boom"));
        assert!(rendered.contains("error.rs"));
    }

    #[test]
    fn test_timeout_distinct_from_activation() {
        let err: MotionMangaError =
            TimeoutError::new("files/slow", std::time::Duration::from_secs(5)).into();
        assert!(matches!(err.kind(), MotionMangaErrorKind::Timeout(_)));
    }
}
