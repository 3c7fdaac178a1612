//! Remote asset activation and generation calls for MotionManga.
//!
//! This crate sits between the pipeline and a [`GenerativeService`]:
//!
//! - [`AssetActivator`] uploads derived videos and waits for them to become
//!   usable, bounded by a deadline
//! - [`GenerationClient`] issues the narrative and per-page image requests
//!   through a [`RetryPolicy`]
//! - [`GeminiClient`] (feature `gemini`, on by default) implements the
//!   service over the Gemini REST API
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "gemini")]
//! # {
//! use motionmanga_interface::{GenerativeService, NullReporter};
//! use motionmanga_models::{ActivationSettings, AssetActivator, GeminiClient};
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let service: Arc<dyn GenerativeService> = Arc::new(GeminiClient::from_env()?);
//! let activator = AssetActivator::new(service, Arc::new(NullReporter), ActivationSettings::default());
//! # Ok(())
//! # }
//! # }
//! ```
//!
//! [`GenerativeService`]: motionmanga_interface::GenerativeService
//! [`RetryPolicy`]: motionmanga_retry::RetryPolicy

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod activator;
mod generation;

pub use activator::{ActivationSettings, AssetActivator};
pub use generation::{
    GenerationClient, ImageSettings, ImageSettingsBuilder, InlineImage, ModelNames,
    DEFAULT_IMAGE_MODEL, DEFAULT_NARRATIVE_MODEL,
};

#[cfg(feature = "gemini")]
mod gemini;

#[cfg(feature = "gemini")]
pub use gemini::{DEFAULT_BASE_URL, GeminiClient};
