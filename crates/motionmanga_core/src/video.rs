//! Input and derived video types.

use derive_getters::Getters;
use motionmanga_error::{InputError, InputErrorKind, MotionMangaResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Maximum number of videos a single run accepts.
pub const MAX_INPUT_VIDEOS: usize = 3;

/// A user-selected video file and its measured size.
///
/// # Examples
///
/// ```
/// use motionmanga_core::InputVideo;
///
/// let video = InputVideo::new("clips/intro.mp4", 4 * 1024 * 1024);
/// assert_eq!(*video.size_bytes(), 4 * 1024 * 1024);
/// assert_eq!(video.file_name(), "intro.mp4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct InputVideo {
    /// Local path of the video
    path: PathBuf,
    /// File size in bytes, measured at selection time
    size_bytes: u64,
}

impl InputVideo {
    /// Create an input video from an already measured size.
    pub fn new(path: impl Into<PathBuf>, size_bytes: u64) -> Self {
        Self {
            path: path.into(),
            size_bytes,
        }
    }

    /// Select a video from disk, measuring its size.
    ///
    /// # Errors
    ///
    /// Returns an input error if the path cannot be inspected or is not a
    /// regular file.
    pub fn from_path(path: impl AsRef<Path>) -> MotionMangaResult<Self> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path).map_err(|e| {
            InputError::new(InputErrorKind::Unreadable(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;

        if !metadata.is_file() {
            return Err(InputError::new(InputErrorKind::NotAFile(path.display().to_string())).into());
        }

        Ok(Self::new(path, metadata.len()))
    }

    /// File name component, lossily converted.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// The validated, ordered set of videos for one run (1 to 3 entries).
///
/// # Examples
///
/// ```
/// use motionmanga_core::{InputBatch, InputVideo};
///
/// let batch = InputBatch::new(vec![
///     InputVideo::new("a.mp4", 10),
///     InputVideo::new("b.mp4", 20),
/// ]).unwrap();
/// assert_eq!(batch.len(), 2);
///
/// let too_many = (0..4).map(|i| InputVideo::new(format!("{i}.mp4"), 1)).collect();
/// assert!(InputBatch::new(too_many).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBatch(Vec<InputVideo>);

impl InputBatch {
    /// Validate the input-count invariant.
    ///
    /// # Errors
    ///
    /// Returns an input error when `videos` is empty, holds more than
    /// [`MAX_INPUT_VIDEOS`] entries, or two entries share a file name.
    pub fn new(videos: Vec<InputVideo>) -> MotionMangaResult<Self> {
        if videos.is_empty() {
            return Err(InputError::new(InputErrorKind::NoVideos).into());
        }
        if videos.len() > MAX_INPUT_VIDEOS {
            return Err(InputError::new(InputErrorKind::TooManyVideos {
                count: videos.len(),
                max: MAX_INPUT_VIDEOS,
            })
            .into());
        }
        for (i, video) in videos.iter().enumerate() {
            let name = video.file_name();
            if videos[..i].iter().any(|v| v.file_name() == name) {
                return Err(InputError::new(InputErrorKind::DuplicateFileName(name)).into());
            }
        }
        Ok(Self(videos))
    }

    /// Select every path from disk and validate the batch.
    ///
    /// The count is checked before any file is touched.
    pub fn from_paths<P: AsRef<Path>>(paths: &[P]) -> MotionMangaResult<Self> {
        if paths.len() > MAX_INPUT_VIDEOS {
            return Err(InputError::new(InputErrorKind::TooManyVideos {
                count: paths.len(),
                max: MAX_INPUT_VIDEOS,
            })
            .into());
        }
        let videos = paths
            .iter()
            .map(InputVideo::from_path)
            .collect::<MotionMangaResult<Vec<_>>>()?;
        Self::new(videos)
    }

    /// Videos in selection order.
    pub fn videos(&self) -> &[InputVideo] {
        &self.0
    }

    /// Number of videos.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed batch.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// What a derived video is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
pub enum VideoPurpose {
    /// Keeps the audio track; context for the narrative call
    #[strum(to_string = "with-audio")]
    WithAudio,
    /// Audio removed; context for image calls
    #[strum(to_string = "no-audio")]
    NoAudio,
}

/// A locally produced artifact derived from an input video.
///
/// When the transcoder takes its fast path or falls back after an encoder
/// failure, `path` equals the source path and `transcoded` is false.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct DerivedVideo {
    /// Local path of the artifact
    path: PathBuf,
    /// Which generation call this artifact feeds
    purpose: VideoPurpose,
    /// The input video this artifact ultimately derives from
    source: PathBuf,
    /// Whether the encoder produced this file
    transcoded: bool,
}

impl DerivedVideo {
    /// Create a derived video record.
    pub fn new(
        path: impl Into<PathBuf>,
        purpose: VideoPurpose,
        source: impl Into<PathBuf>,
        transcoded: bool,
    ) -> Self {
        Self {
            path: path.into(),
            purpose,
            source: source.into(),
            transcoded,
        }
    }

    /// A pass-through artifact that reuses `path` as-is.
    pub fn passthrough(
        path: impl Into<PathBuf>,
        purpose: VideoPurpose,
        source: impl Into<PathBuf>,
    ) -> Self {
        Self::new(path, purpose, source, false)
    }

    /// File name component, lossily converted.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
