//! Story handling for MotionManga.
//!
//! Turns the narrative model's raw JSON into a [`StoryDocument`] and back
//! into the artifacts and prompts the rest of the pipeline needs.
//!
//! # Story shapes
//!
//! Two response shapes are accepted and normalized by [`decode`]:
//!
//! ```json
//! { "pages": { "page_1": "..." }, "character_concept": "..." }
//! ```
//!
//! ```json
//! { "page_1": "...", "page_2": "..." }
//! ```
//!
//! [`StoryDocument`]: motionmanga_core::StoryDocument

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod decoder;
mod extraction;
mod prompt;
mod render;

pub use decoder::decode;
pub use extraction::extract_json;
pub use prompt::{PromptTemplates, image_prompt};
pub use render::{STORY_FILE_NAME, render_story};
