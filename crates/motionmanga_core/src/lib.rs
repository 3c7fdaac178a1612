//! Core data types for MotionManga.
//!
//! This crate provides the values that flow between pipeline stages: the
//! selected input videos, the locally derived artifacts, the remote handles
//! for uploaded files, the decoded story and the generated images.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod asset;
mod image;
mod media;
mod stage;
mod story;
mod video;

pub use asset::{AssetState, RemoteAsset};
pub use image::GeneratedImage;
pub use media::video_mime_type;
pub use stage::Stage;
pub use story::{Page, StoryDocument};
pub use video::{DerivedVideo, InputBatch, InputVideo, MAX_INPUT_VIDEOS, VideoPurpose};
