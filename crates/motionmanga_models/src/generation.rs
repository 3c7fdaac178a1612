//! Narrative and image generation requests.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use derive_getters::Getters;
use motionmanga_core::{RemoteAsset, VideoPurpose};
use motionmanga_error::{GenerationError, GenerationErrorKind};
use motionmanga_interface::{
    ContentRequest, ContentResponse, GenerationConfig, GenerativeService, ImageConfig, Part,
};
use motionmanga_retry::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Default model for the story call.
pub const DEFAULT_NARRATIVE_MODEL: &str = "gemini-3-pro-preview";

/// Default model for the per-page image calls.
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-3-pro-image-preview";

/// Models used for each call type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ModelNames {
    /// Text model returning the story JSON
    narrative: String,
    /// Image-capable model
    image: String,
}

impl ModelNames {
    /// Create a model pair.
    pub fn new(narrative: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            narrative: narrative.into(),
            image: image.into(),
        }
    }
}

impl Default for ModelNames {
    fn default() -> Self {
        Self::new(DEFAULT_NARRATIVE_MODEL, DEFAULT_IMAGE_MODEL)
    }
}

/// Fixed parameters of every image request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ImageSettings {
    /// Sampling seed, fixed so pages share a consistent look
    #[builder(default = "42")]
    seed: i64,
    /// Output aspect ratio
    #[builder(default = "\"9:16\".to_string()")]
    aspect_ratio: String,
    /// Output resolution class
    #[builder(default = "\"2K\".to_string()")]
    image_size: String,
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            seed: 42,
            aspect_ratio: "9:16".to_string(),
            image_size: "2K".to_string(),
        }
    }
}

/// Decoded inline image data from a generation response.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct InlineImage {
    /// MIME type reported by the service
    mime_type: String,
    /// Decoded bytes
    data: Vec<u8>,
}

impl InlineImage {
    /// Consume into `(mime_type, data)`.
    pub fn into_parts(self) -> (String, Vec<u8>) {
        (self.mime_type, self.data)
    }
}

/// Issues generation requests against active assets.
///
/// Every request goes through the retry policy; an error surfaces only after
/// the last attempt has failed.
pub struct GenerationClient {
    service: Arc<dyn GenerativeService>,
    retry: RetryPolicy,
    models: ModelNames,
    image: ImageSettings,
}

impl GenerationClient {
    /// Create a generation client.
    pub fn new(
        service: Arc<dyn GenerativeService>,
        retry: RetryPolicy,
        models: ModelNames,
        image: ImageSettings,
    ) -> Self {
        Self {
            service,
            retry,
            models,
            image,
        }
    }

    /// Models in use.
    pub fn models(&self) -> &ModelNames {
        &self.models
    }

    /// Generate the story JSON text from the audio-bearing assets.
    ///
    /// # Errors
    ///
    /// Fails without calling the service when an asset is inactive or not a
    /// with-audio asset. Otherwise returns the last error after retries.
    #[instrument(skip(self, prompt, assets), fields(model = %self.models.narrative, assets = assets.len()))]
    pub async fn generate_narrative(
        &self,
        prompt: &str,
        assets: &[RemoteAsset],
    ) -> Result<String, GenerationError> {
        validate_assets(assets, VideoPurpose::WithAudio)?;
        let request = ContentRequest::user(request_parts(prompt, assets), GenerationConfig::json());

        let response = self.send(&self.models.narrative, &request).await?;
        let text = response.text();
        if text.trim().is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::InvalidResponse(
                format!(
                    "Narrative response contained no text (finish reason: {})",
                    response.finish_reason().unwrap_or("unknown")
                ),
            )));
        }

        info!(chars = text.len(), "Narrative generated");
        Ok(text)
    }

    /// Generate one image from the audio-free assets.
    ///
    /// Returns `Ok(None)` when the response carries no inline data.
    ///
    /// # Errors
    ///
    /// Fails without calling the service when an asset is inactive or not a
    /// no-audio asset, and when inline data is not valid base64. Otherwise
    /// returns the last error after retries.
    #[instrument(skip(self, prompt, assets), fields(model = %self.models.image, assets = assets.len()))]
    pub async fn generate_image(
        &self,
        prompt: &str,
        assets: &[RemoteAsset],
    ) -> Result<Option<InlineImage>, GenerationError> {
        validate_assets(assets, VideoPurpose::NoAudio)?;
        let config = GenerationConfig::image(
            self.image.seed,
            ImageConfig {
                aspect_ratio: self.image.aspect_ratio.clone(),
                image_size: self.image.image_size.clone(),
            },
        );
        let request = ContentRequest::user(request_parts(prompt, assets), config);

        let response = self.send(&self.models.image, &request).await?;
        match response.first_inline_data() {
            Some(inline) => {
                let data = STANDARD.decode(inline.data.as_bytes()).map_err(|e| {
                    GenerationError::new(GenerationErrorKind::Base64Decode(e.to_string()))
                })?;
                debug!(mime_type = %inline.mime_type, bytes = data.len(), "Image generated");
                Ok(Some(InlineImage {
                    mime_type: inline.mime_type.clone(),
                    data,
                }))
            }
            None => {
                let text = response.text();
                warn!(
                    finish_reason = response.finish_reason().unwrap_or("unknown"),
                    text = %text,
                    "Response contained no image data"
                );
                Ok(None)
            }
        }
    }

    async fn send(
        &self,
        model: &str,
        request: &ContentRequest,
    ) -> Result<ContentResponse, GenerationError> {
        let service = self.service.as_ref();
        self.retry
            .execute(model, move || service.generate_content(model, request))
            .await
    }
}

/// Prompt text first, then one file reference per asset.
fn request_parts(prompt: &str, assets: &[RemoteAsset]) -> Vec<Part> {
    std::iter::once(Part::text(prompt))
        .chain(
            assets
                .iter()
                .map(|asset| Part::file(asset.uri(), asset.mime_type())),
        )
        .collect()
}

fn validate_assets(assets: &[RemoteAsset], expected: VideoPurpose) -> Result<(), GenerationError> {
    for asset in assets {
        if !asset.is_active() {
            return Err(GenerationError::new(GenerationErrorKind::InactiveAsset {
                name: asset.name().clone(),
                state: asset.state().to_string(),
            }));
        }
        let actual = *asset.origin().purpose();
        if actual != expected {
            return Err(GenerationError::new(GenerationErrorKind::AssetPurpose {
                name: asset.name().clone(),
                expected: expected.to_string(),
                actual: actual.to_string(),
            }));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use motionmanga_core::{AssetState, DerivedVideo};

    fn asset(state: AssetState, purpose: VideoPurpose) -> RemoteAsset {
        RemoteAsset::new(
            "files/a",
            "https://example.test/files/a",
            "video/mp4",
            state,
            DerivedVideo::passthrough("a.mp4", purpose, "a.mp4"),
        )
    }

    #[test]
    fn test_request_parts_order() {
        let assets = [asset(AssetState::Active, VideoPurpose::NoAudio)];
        let parts = request_parts("prompt", &assets);
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].text.as_deref(), Some("prompt"));
        assert_eq!(
            parts[1].file_data.as_ref().map(|f| f.file_uri.as_str()),
            Some("https://example.test/files/a")
        );
    }

    #[test]
    fn test_validate_rejects_inactive() {
        let assets = [asset(AssetState::Processing, VideoPurpose::WithAudio)];
        let err = validate_assets(&assets, VideoPurpose::WithAudio).unwrap_err();
        assert!(matches!(err.kind, GenerationErrorKind::InactiveAsset { .. }));
    }

    #[test]
    fn test_validate_rejects_wrong_purpose() {
        let assets = [asset(AssetState::Active, VideoPurpose::WithAudio)];
        let err = validate_assets(&assets, VideoPurpose::NoAudio).unwrap_err();
        assert!(matches!(err.kind, GenerationErrorKind::AssetPurpose { .. }));
    }

    #[test]
    fn test_image_settings_builder() {
        let settings = ImageSettingsBuilder::default()
            .aspect_ratio("1:1")
            .build()
            .unwrap();
        assert_eq!(*settings.seed(), 42);
        assert_eq!(settings.aspect_ratio(), "1:1");
        assert_eq!(settings.image_size(), "2K");
    }
}
