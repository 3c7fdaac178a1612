//! Gemini REST API integration.
//!
//! Files are submitted with the resumable upload protocol, polled through
//! the Files API and referenced by URI in `generateContent` requests.

mod client;
mod protocol;

pub use client::{DEFAULT_BASE_URL, GeminiClient};
