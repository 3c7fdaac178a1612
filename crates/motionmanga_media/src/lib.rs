//! Video preprocessing for MotionManga.
//!
//! Two passes run over every input:
//! - [`Transcoder::optimize`] downscales videos above a size threshold
//! - [`Transcoder::strip_audio`] produces an audio-free copy
//!
//! The actual work is delegated to an [`Encoder`]; [`FfmpegEncoder`] runs the
//! `ffmpeg` binary as a subprocess. Encoder failures never abort a run: the
//! transcoder logs them and hands back the source file instead.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod encoder;
mod transcoder;

pub use encoder::{Encoder, FfmpegEncoder};
pub use transcoder::{
    DEFAULT_SIZE_THRESHOLD_BYTES, TranscodeSettings, TranscodeSettingsBuilder, Transcoder,
    no_audio_file_name, optimize_args, optimized_file_name, strip_audio_args,
};
