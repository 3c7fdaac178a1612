//! Trait definitions for MotionManga collaborators.
//!
//! The pipeline talks to the outside world through two seams:
//! - [`GenerativeService`] - file submission, status polling and content generation
//! - [`ProgressReporter`] - presentation-only status updates
//!
//! The request/response types mirror the Gemini REST API's JSON shapes so
//! that the production client can send them as-is.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{GenerativeService, NullReporter, ProgressReporter};
pub use types::{
    Candidate, Content, ContentRequest, ContentResponse, FileData, GenerationConfig, ImageConfig,
    InlineData, Part, RemoteFile,
};
