//! Test utilities for MotionManga model tests.
//!
//! This module provides a scripted generation service and asset helpers.

pub mod mock_service;

#[allow(unused_imports)]
pub use mock_service::{MockGenerativeService, MockResponse};

use motionmanga_core::{AssetState, DerivedVideo, RemoteAsset, VideoPurpose};

/// An active remote asset of the given purpose.
#[allow(dead_code)]
pub fn active_asset(name: &str, purpose: VideoPurpose) -> RemoteAsset {
    RemoteAsset::new(
        name,
        format!("https://files.example.test/{}", name),
        "video/mp4",
        AssetState::Active,
        DerivedVideo::passthrough(format!("{}.mp4", name), purpose, format!("{}.mp4", name)),
    )
}
