//! Size optimization and audio stripping.

use crate::Encoder;
use derive_getters::Getters;
use motionmanga_core::{DerivedVideo, InputVideo, VideoPurpose};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, instrument, warn};

/// Inputs at or below this size are sent as-is (10 MiB).
pub const DEFAULT_SIZE_THRESHOLD_BYTES: u64 = 10 * 1024 * 1024;

/// Encoder parameters for the optimization pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct TranscodeSettings {
    /// Files strictly larger than this are downscaled
    #[serde(default = "default_size_threshold_bytes")]
    #[builder(default = "DEFAULT_SIZE_THRESHOLD_BYTES")]
    size_threshold_bytes: u64,

    /// Output height in pixels; width keeps the aspect ratio
    #[serde(default = "default_target_height")]
    #[builder(default = "720")]
    target_height: u32,

    /// Video codec passed to `-c:v`
    #[serde(default = "default_video_codec")]
    #[builder(default = "default_video_codec()")]
    video_codec: String,

    /// Encoder speed preset
    #[serde(default = "default_preset")]
    #[builder(default = "default_preset()")]
    preset: String,

    /// Constant rate factor
    #[serde(default = "default_crf")]
    #[builder(default = "23")]
    crf: u8,
}

fn default_size_threshold_bytes() -> u64 {
    DEFAULT_SIZE_THRESHOLD_BYTES
}

fn default_target_height() -> u32 {
    720
}

fn default_video_codec() -> String {
    "libx264".to_string()
}

fn default_preset() -> String {
    "fast".to_string()
}

fn default_crf() -> u8 {
    23
}

impl Default for TranscodeSettings {
    fn default() -> Self {
        Self {
            size_threshold_bytes: default_size_threshold_bytes(),
            target_height: default_target_height(),
            video_codec: default_video_codec(),
            preset: default_preset(),
            crf: default_crf(),
        }
    }
}

/// Output name for an optimized copy of `input`.
///
/// ```
/// use motionmanga_media::optimized_file_name;
/// assert_eq!(optimized_file_name("clips/beach.mov".as_ref()), "optimized_beach.mov");
/// ```
pub fn optimized_file_name(input: &Path) -> String {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("optimized_{}", name)
}

/// Output name for an audio-free copy of `input`.
///
/// ```
/// use motionmanga_media::no_audio_file_name;
/// assert_eq!(no_audio_file_name("out/optimized_beach.mov".as_ref()), "optimized_beach_noaudio.mov");
/// assert_eq!(no_audio_file_name("raw".as_ref()), "raw_noaudio");
/// ```
pub fn no_audio_file_name(input: &Path) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    match input.extension() {
        Some(ext) => format!("{}_noaudio.{}", stem, ext.to_string_lossy()),
        None => format!("{}_noaudio", stem),
    }
}

/// Encoder arguments that downscale `input` to `settings.target_height`,
/// copying the audio stream.
pub fn optimize_args(input: &Path, output: &Path, settings: &TranscodeSettings) -> Vec<OsString> {
    vec![
        "-y".into(),
        "-i".into(),
        input.into(),
        "-vf".into(),
        format!("scale=-2:{}", settings.target_height).into(),
        "-c:v".into(),
        settings.video_codec.clone().into(),
        "-preset".into(),
        settings.preset.clone().into(),
        "-crf".into(),
        settings.crf.to_string().into(),
        "-c:a".into(),
        "copy".into(),
        output.into(),
    ]
}

/// Encoder arguments that copy the video stream of `input` and drop audio.
pub fn strip_audio_args(input: &Path, output: &Path) -> Vec<OsString> {
    vec![
        "-y".into(),
        "-i".into(),
        input.into(),
        "-c:v".into(),
        "copy".into(),
        "-an".into(),
        output.into(),
    ]
}

/// Produces the derived videos for each input.
///
/// Every method returns a usable artifact: when the encoder fails the
/// failure is logged and the source path is returned unchanged.
#[derive(Debug, Clone)]
pub struct Transcoder<E> {
    encoder: E,
    output_dir: PathBuf,
    settings: TranscodeSettings,
}

impl<E: Encoder> Transcoder<E> {
    /// Create a transcoder writing its artifacts into `output_dir`.
    pub fn new(encoder: E, output_dir: impl Into<PathBuf>, settings: TranscodeSettings) -> Self {
        Self {
            encoder,
            output_dir: output_dir.into(),
            settings,
        }
    }

    /// Directory receiving transcoded files.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Active settings.
    pub fn settings(&self) -> &TranscodeSettings {
        &self.settings
    }

    /// Downscale `video` if it exceeds the size threshold.
    ///
    /// Small files pass through without invoking the encoder. On encoder
    /// failure the original file is used and a warning notes that it is
    /// still above the threshold.
    #[instrument(skip(self, video), fields(input = %video.path().display(), size = video.size_bytes()))]
    pub async fn optimize(&self, video: &InputVideo) -> DerivedVideo {
        let source = video.path();
        let passthrough = || DerivedVideo::passthrough(source, VideoPurpose::WithAudio, source);

        if *video.size_bytes() <= self.settings.size_threshold_bytes {
            debug!("Below size threshold, sending as-is");
            return passthrough();
        }

        info!(
            file = %video.file_name(),
            height = self.settings.target_height,
            "Optimizing large video"
        );
        let output = self.output_dir.join(optimized_file_name(source));
        let args = optimize_args(source, &output, &self.settings);

        match self.encoder.encode(&args).await {
            Ok(()) => DerivedVideo::new(output, VideoPurpose::WithAudio, source, true),
            Err(e) => {
                error!(error = %e, "Optimization failed, using original file");
                warn!(
                    file = %video.file_name(),
                    size = video.size_bytes(),
                    threshold = self.settings.size_threshold_bytes,
                    "Original file exceeds the size threshold"
                );
                passthrough()
            }
        }
    }

    /// Produce an audio-free copy of `video`.
    ///
    /// Falls back to `video`'s own path when the encoder fails.
    #[instrument(skip(self, video), fields(input = %video.path().display()))]
    pub async fn strip_audio(&self, video: &DerivedVideo) -> DerivedVideo {
        let input = video.path();
        let output = self.output_dir.join(no_audio_file_name(input));
        let args = strip_audio_args(input, &output);

        match self.encoder.encode(&args).await {
            Ok(()) => {
                debug!(output = %output.display(), "Stripped audio");
                DerivedVideo::new(output, VideoPurpose::NoAudio, video.source(), true)
            }
            Err(e) => {
                error!(error = %e, "Audio stripping failed, using input file");
                DerivedVideo::passthrough(input, VideoPurpose::NoAudio, video.source())
            }
        }
    }
}
