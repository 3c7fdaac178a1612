// Tests for upload and activation polling.
//
// Time is paused so poll intervals and deadlines elapse instantly.

mod test_utils;

use motionmanga_core::{AssetState, DerivedVideo, VideoPurpose};
use motionmanga_error::{ActivationErrorKind, MotionMangaErrorKind, UploadErrorKind};
use motionmanga_interface::{GenerativeService, NullReporter};
use motionmanga_models::{ActivationSettings, AssetActivator};
use std::sync::Arc;
use std::time::Duration;
use test_utils::MockGenerativeService;

fn activator(service: Arc<MockGenerativeService>, deadline: Option<Duration>) -> AssetActivator {
    let service: Arc<dyn GenerativeService> = service;
    AssetActivator::new(
        service,
        Arc::new(NullReporter),
        ActivationSettings::new(Duration::from_secs(2), deadline),
    )
}

fn video() -> DerivedVideo {
    DerivedVideo::passthrough("clip_noaudio.mov", VideoPurpose::NoAudio, "clip.mov")
}

#[tokio::test(start_paused = true)]
async fn test_processing_twice_then_active_polls_twice() -> anyhow::Result<()> {
    let service = Arc::new(MockGenerativeService::with_states(vec![
        AssetState::Processing,
        AssetState::Processing,
        AssetState::Active,
    ]));
    let started = tokio::time::Instant::now();

    let asset = activator(service.clone(), None).upload(&video()).await?;

    assert!(asset.is_active());
    assert_eq!(service.upload_count(), 1);
    assert_eq!(service.poll_count(), 2);
    assert_eq!(started.elapsed(), Duration::from_secs(4));
    assert_eq!(asset.origin(), &video());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_immediately_active_does_not_poll() -> anyhow::Result<()> {
    let service = Arc::new(MockGenerativeService::with_states(vec![AssetState::Active]));

    let asset = activator(service.clone(), None).upload(&video()).await?;

    assert_eq!(asset.name(), "files/1");
    assert_eq!(service.poll_count(), 0);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_failed_state_is_activation_error() {
    let service = Arc::new(MockGenerativeService::with_states(vec![
        AssetState::Processing,
        AssetState::Failed,
    ]));

    let err = activator(service.clone(), None)
        .upload(&video())
        .await
        .unwrap_err();

    match err.kind() {
        MotionMangaErrorKind::Activation(e) => match &e.kind {
            ActivationErrorKind::Failed { name, state } => {
                assert_eq!(name, "files/1");
                assert_eq!(state, "FAILED");
            }
            other => panic!("unexpected activation error: {other}"),
        },
        other => panic!("expected activation error, got {other}"),
    }
    assert_eq!(service.poll_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_never_terminal_times_out() {
    let service = Arc::new(MockGenerativeService::with_states(vec![AssetState::Processing]));

    let err = activator(service.clone(), Some(Duration::from_secs(10)))
        .upload(&video())
        .await
        .unwrap_err();

    match err.kind() {
        MotionMangaErrorKind::Timeout(e) => {
            assert_eq!(e.name, "files/1");
            assert!(e.waited >= Duration::from_secs(10));
        }
        other => panic!("expected timeout, got {other}"),
    }
    assert_eq!(service.poll_count(), 5);
}

#[tokio::test(start_paused = true)]
async fn test_pending_is_polled_like_processing() -> anyhow::Result<()> {
    let service = Arc::new(MockGenerativeService::with_states(vec![
        AssetState::Pending,
        AssetState::Active,
    ]));

    activator(service.clone(), None).upload(&video()).await?;

    assert_eq!(service.poll_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_upload_failure_is_upload_error() {
    let service = Arc::new(
        MockGenerativeService::with_states(vec![AssetState::Active]).with_upload_error(
            UploadErrorKind::HttpError {
                status_code: 413,
                message: "Request entity too large".to_string(),
            },
        ),
    );

    let err = activator(service.clone(), None)
        .upload(&video())
        .await
        .unwrap_err();

    assert!(matches!(err.kind(), MotionMangaErrorKind::Upload(_)));
    assert_eq!(service.poll_count(), 0);
}
