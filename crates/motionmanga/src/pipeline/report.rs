//! Run outcome.

use derive_getters::Getters;
use std::path::PathBuf;

/// Why a page has no image.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PageFailureReason {
    /// The response carried no inline image data
    #[display("no image data in response")]
    NoImageData,
    /// The image request failed after every retry
    #[display("generation failed: {}", _0)]
    Generation(String),
}

/// A page the run could not illustrate.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct PageFailure {
    /// Page identifier
    page_id: String,
    /// Failure cause
    reason: PageFailureReason,
}

impl PageFailure {
    /// Record a page failure.
    pub fn new(page_id: impl Into<String>, reason: PageFailureReason) -> Self {
        Self {
            page_id: page_id.into(),
            reason,
        }
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct RunReport {
    /// Path of the rendered story
    story_path: PathBuf,
    /// `(page, image path)` for every image written, in page order
    images: Vec<(String, PathBuf)>,
    /// Pages without an image, in page order
    failures: Vec<PageFailure>,
}

impl RunReport {
    pub(crate) fn new(story_path: PathBuf) -> Self {
        Self {
            story_path,
            images: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub(crate) fn record_image(&mut self, page_id: impl Into<String>, path: PathBuf) {
        self.images.push((page_id.into(), path));
    }

    pub(crate) fn record_failure(&mut self, failure: PageFailure) {
        self.failures.push(failure);
    }

    /// Whether every page got an image.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
