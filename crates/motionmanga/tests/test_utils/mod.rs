//! Test utilities for pipeline tests.
//!
//! This module provides mock collaborators and a scratch workspace.

pub mod mocks;

#[allow(unused_imports)]
pub use mocks::{MockEncoder, MockResponse, MockService, RecordingReporter};

use motionmanga::{PipelineSettings, PipelineSettingsBuilder, PromptPaths};
use motionmanga_models::ActivationSettings;
use motionmanga_retry::RetryPolicy;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;

/// Narrative response with three pages and a character concept.
pub const THREE_PAGE_STORY: &str = r#"{
    "character_concept": "A boy in a yellow raincoat",
    "pages": {
        "page_1": "He waits at the bus stop.",
        "page_2": "The bus never comes.",
        "page_3": "He walks home in the rain."
    }
}"#;

/// A temporary directory with prompt templates and input videos.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    /// Create a workspace holding `story.md` and `comic.md`.
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("story.md"), "Write a manga story as JSON.").unwrap();
        std::fs::write(dir.path().join("comic.md"), "Black and white manga style.").unwrap();
        Self { dir }
    }

    /// Write an input video of `size` bytes.
    pub fn video(&self, name: &str, size: usize) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, vec![7u8; size]).unwrap();
        path
    }

    /// Output directory used by [`Workspace::settings`].
    pub fn output_dir(&self) -> PathBuf {
        self.dir.path().join("output")
    }

    /// Path inside the output directory.
    #[allow(dead_code)]
    pub fn output(&self, name: &str) -> PathBuf {
        self.output_dir().join(name)
    }

    /// Settings with fast retries and polling.
    pub fn settings(&self) -> PipelineSettingsBuilder {
        let mut builder = PipelineSettingsBuilder::default();
        builder
            .output_dir(self.output_dir())
            .prompts(PromptPaths::new(
                self.dir.path().join("story.md"),
                self.dir.path().join("comic.md"),
            ))
            .retry(RetryPolicy::new(2, Duration::from_millis(1)))
            .activation(ActivationSettings::new(
                Duration::from_millis(1),
                Some(Duration::from_secs(5)),
            ));
        builder
    }

    /// Default test settings.
    pub fn default_settings(&self) -> PipelineSettings {
        self.settings().build().unwrap()
    }

    /// Root of the workspace.
    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Names of the `.png` files in `dir`, sorted.
#[allow(dead_code)]
pub fn png_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".png"))
        .collect();
    names.sort();
    names
}
