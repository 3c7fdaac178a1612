//! External encoder invocation.

use async_trait::async_trait;
use motionmanga_error::{TranscodeError, TranscodeErrorKind};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, instrument};

/// Number of trailing stderr bytes kept in error messages.
const STDERR_TAIL: usize = 2048;

/// Runs one encoder invocation with the given arguments.
#[async_trait]
pub trait Encoder: Send + Sync {
    /// Run the encoder to completion.
    async fn encode(&self, args: &[OsString]) -> Result<(), TranscodeError>;
}

/// Encoder backed by the `ffmpeg` binary.
#[derive(Debug, Clone)]
pub struct FfmpegEncoder {
    program: PathBuf,
}

impl FfmpegEncoder {
    /// Use a specific ffmpeg executable.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Locate `ffmpeg` on `PATH`.
    ///
    /// # Errors
    ///
    /// Returns [`TranscodeErrorKind::EncoderNotFound`] when no executable is found.
    #[instrument(name = "ffmpeg_locate")]
    pub fn locate() -> Result<Self, TranscodeError> {
        let program = which::which("ffmpeg").map_err(|e| {
            TranscodeError::new(TranscodeErrorKind::EncoderNotFound(format!("ffmpeg: {}", e)))
        })?;
        debug!(program = %program.display(), "Located ffmpeg");
        Ok(Self { program })
    }

    /// Use `program` when given, otherwise search `PATH`.
    pub fn from_config(program: Option<&Path>) -> Result<Self, TranscodeError> {
        match program {
            Some(path) => Ok(Self::new(path)),
            None => Self::locate(),
        }
    }

    /// Path of the executable.
    pub fn program(&self) -> &Path {
        &self.program
    }
}

#[async_trait]
impl Encoder for FfmpegEncoder {
    #[instrument(name = "ffmpeg_encode", skip(self, args), fields(program = %self.program.display()))]
    async fn encode(&self, args: &[OsString]) -> Result<(), TranscodeError> {
        debug!(?args, "FFmpeg args");

        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                TranscodeError::new(TranscodeErrorKind::Spawn(format!(
                    "{}: {}",
                    self.program.display(),
                    e
                )))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(TranscodeError::new(TranscodeErrorKind::Failed {
                status: output.status.to_string(),
                stderr: tail(stderr.trim(), STDERR_TAIL).to_string(),
            }));
        }

        Ok(())
    }
}

/// Last `max` bytes of `text`, cut at a char boundary.
fn tail(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut start = text.len() - max;
    while !text.is_char_boundary(start) {
        start += 1;
    }
    &text[start..]
}
