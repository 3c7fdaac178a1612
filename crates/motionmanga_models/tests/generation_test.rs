// Tests for narrative and image requests through the retry policy.

mod test_utils;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use motionmanga_core::VideoPurpose;
use motionmanga_error::GenerationErrorKind;
use motionmanga_interface::GenerativeService;
use motionmanga_models::{
    DEFAULT_IMAGE_MODEL, DEFAULT_NARRATIVE_MODEL, GenerationClient, ImageSettings, ModelNames,
};
use motionmanga_retry::RetryPolicy;
use std::sync::Arc;
use std::time::Duration;
use test_utils::{MockGenerativeService, MockResponse, active_asset};

fn client(service: Arc<MockGenerativeService>) -> GenerationClient {
    let service: Arc<dyn GenerativeService> = service;
    GenerationClient::new(
        service,
        RetryPolicy::new(3, Duration::from_millis(1)),
        ModelNames::default(),
        ImageSettings::default(),
    )
}

fn api_error() -> GenerationErrorKind {
    GenerationErrorKind::HttpError {
        status_code: 503,
        message: "The model is overloaded".to_string(),
    }
}

#[tokio::test]
async fn test_narrative_request_shape() -> anyhow::Result<()> {
    let service = Arc::new(MockGenerativeService::new_success(r#"{"pages": {"page_1": "x"}}"#));
    let assets = vec![
        active_asset("files/a", VideoPurpose::WithAudio),
        active_asset("files/b", VideoPurpose::WithAudio),
    ];

    let text = client(service.clone())
        .generate_narrative("Write a story", &assets)
        .await?;

    assert_eq!(text, r#"{"pages": {"page_1": "x"}}"#);
    let requests = service.requests();
    assert_eq!(requests.len(), 1);
    let (model, request) = &requests[0];
    assert_eq!(model, DEFAULT_NARRATIVE_MODEL);
    assert_eq!(request.prompt_text(), "Write a story");
    assert_eq!(
        request.file_uris(),
        [
            "https://files.example.test/files/a",
            "https://files.example.test/files/b"
        ]
    );
    let config = request.generation_config.as_ref().unwrap();
    assert_eq!(config.response_mime_type.as_deref(), Some("application/json"));
    Ok(())
}

#[tokio::test]
async fn test_narrative_retries_then_succeeds() -> anyhow::Result<()> {
    let service = Arc::new(
        MockGenerativeService::new_success("{}").with_responses(vec![
            MockResponse::Error(api_error()),
            MockResponse::Error(api_error()),
            MockResponse::Text(r#"{"page_1": "ok"}"#.to_string()),
        ]),
    );
    let assets = vec![active_asset("files/a", VideoPurpose::WithAudio)];

    let text = client(service.clone())
        .generate_narrative("prompt", &assets)
        .await?;

    assert_eq!(text, r#"{"page_1": "ok"}"#);
    assert_eq!(service.generate_count(), 3);
    Ok(())
}

#[tokio::test]
async fn test_narrative_gives_up_after_max_attempts() {
    let service = Arc::new(
        MockGenerativeService::new_success("{}").with_fallback(MockResponse::Error(api_error())),
    );
    let assets = vec![active_asset("files/a", VideoPurpose::WithAudio)];

    let err = client(service.clone())
        .generate_narrative("prompt", &assets)
        .await
        .unwrap_err();

    assert_eq!(err.kind, api_error());
    assert_eq!(service.generate_count(), 3);
}

#[tokio::test]
async fn test_narrative_rejects_no_audio_assets_without_calling() {
    let service = Arc::new(MockGenerativeService::new_success("{}"));
    let assets = vec![active_asset("files/a", VideoPurpose::NoAudio)];

    let err = client(service.clone())
        .generate_narrative("prompt", &assets)
        .await
        .unwrap_err();

    assert!(matches!(err.kind, GenerationErrorKind::AssetPurpose { .. }));
    assert_eq!(service.generate_count(), 0);
}

#[tokio::test]
async fn test_image_decodes_inline_data() -> anyhow::Result<()> {
    let png = vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a];
    let service = Arc::new(
        MockGenerativeService::new_success("{}").with_fallback(MockResponse::Image {
            mime_type: "image/png".to_string(),
            base64: STANDARD.encode(&png),
        }),
    );
    let assets = vec![active_asset("files/a", VideoPurpose::NoAudio)];

    let image = client(service.clone())
        .generate_image("Draw page 1", &assets)
        .await?
        .expect("inline image");

    assert_eq!(image.mime_type(), "image/png");
    assert_eq!(image.data(), &png);

    let (model, request) = &service.requests()[0];
    assert_eq!(model, DEFAULT_IMAGE_MODEL);
    let config = request.generation_config.as_ref().unwrap();
    assert_eq!(config.seed, Some(42));
    let image_config = config.image_config.as_ref().unwrap();
    assert_eq!(image_config.aspect_ratio, "9:16");
    assert_eq!(image_config.image_size, "2K");
    Ok(())
}

#[tokio::test]
async fn test_image_without_inline_data_is_none() -> anyhow::Result<()> {
    let service = Arc::new(
        MockGenerativeService::new_success("{}")
            .with_fallback(MockResponse::NoImage("I cannot draw that".to_string())),
    );
    let assets = vec![active_asset("files/a", VideoPurpose::NoAudio)];

    let image = client(service.clone())
        .generate_image("Draw page 1", &assets)
        .await?;

    assert!(image.is_none());
    assert_eq!(service.generate_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_image_invalid_base64_is_error() {
    let service = Arc::new(
        MockGenerativeService::new_success("{}").with_fallback(MockResponse::Image {
            mime_type: "image/png".to_string(),
            base64: "not base64!!".to_string(),
        }),
    );
    let assets = vec![active_asset("files/a", VideoPurpose::NoAudio)];

    let err = client(service)
        .generate_image("Draw", &assets)
        .await
        .unwrap_err();

    assert!(matches!(err.kind, GenerationErrorKind::Base64Decode(_)));
}
