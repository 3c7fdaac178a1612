//! Test utilities for transcoder tests.

pub mod mock_encoder;

#[allow(unused_imports)]
pub use mock_encoder::{EncoderBehavior, MockEncoder};

use std::path::{Path, PathBuf};

/// Write `size` bytes of a repeating pattern to `dir/name`.
pub fn write_video(dir: &Path, name: &str, size: usize) -> PathBuf {
    let path = dir.join(name);
    let bytes: Vec<u8> = (0..size).map(|i| (i % 251) as u8).collect();
    std::fs::write(&path, bytes).unwrap();
    path
}
