//! Error types for MotionManga.
//!
//! This crate provides the error types used throughout the MotionManga pipeline.
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! Each pipeline stage owns one failure domain. The orchestrator converts them
//! into [`MotionMangaError`], whose [`MotionMangaErrorKind`] tells callers
//! which stage failed.
//!
//! # Examples
//!
//! ```
//! use motionmanga_error::{MotionMangaResult, InputError, InputErrorKind};
//!
//! fn collect(count: usize) -> MotionMangaResult<()> {
//!     if count > 3 {
//!         Err(InputError::new(InputErrorKind::TooManyVideos { count, max: 3 }))?
//!     }
//!     Ok(())
//! }
//!
//! assert!(collect(4).is_err());
//! assert!(collect(2).is_ok());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod asset;
mod config;
mod decode;
mod error;
mod generation;
mod input;
mod storage;
mod transcode;

pub use asset::{ActivationError, ActivationErrorKind, TimeoutError, UploadError, UploadErrorKind};
pub use config::ConfigError;
pub use decode::{DecodeError, DecodeErrorKind};
pub use error::{MotionMangaError, MotionMangaErrorKind, MotionMangaResult};
pub use generation::{GenerationError, GenerationErrorKind};
pub use input::{InputError, InputErrorKind};
pub use storage::{StorageError, StorageErrorKind};
pub use transcode::{TranscodeError, TranscodeErrorKind};
