// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for the session driver
//!
//! Run with paused tokio time: sleeps auto-advance, so full sessions
//! complete instantly while preserving timer ordering.

use photobooth::{
    CameraSourceManager, FrameCapturer, SessionDriver, SessionMode, StreamConstraints,
    SyntheticBackend,
};

/// Install a log subscriber once per test binary.
/// Set RUST_LOG to see driver output, e.g. RUST_LOG=photobooth=debug
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .with_test_writer()
        .try_init();
}

fn driver_with(backend: SyntheticBackend) -> SessionDriver {
    init_logging();
    let mut camera = CameraSourceManager::new(Box::new(backend));
    camera.init(&StreamConstraints::default());
    SessionDriver::new(camera, FrameCapturer::new(true))
}

async fn run_to_review(driver: &mut SessionDriver) {
    while driver.session().mode() != SessionMode::Review {
        assert!(driver.next_step().await, "driver channel closed early");
    }
}

#[tokio::test(start_paused = true)]
async fn full_run_produces_target_photos() {
    let mut driver = driver_with(SyntheticBackend::new(1).with_frame_size(64, 48));
    driver.handle().start(3);

    run_to_review(&mut driver).await;

    assert_eq!(driver.session().photos().len(), 3);
    for photo in driver.session().photos() {
        assert_eq!(photo.width, 64);
        assert_eq!(photo.height, 48);
        // JPEG SOI marker
        assert_eq!(&photo.data[..2], &[0xFF, 0xD8]);
    }
}

#[tokio::test(start_paused = true)]
async fn unavailable_frame_skips_capture_and_loops() {
    // Zero-dimension frames model a video surface with no data yet
    let mut driver = driver_with(SyntheticBackend::new(1).with_frame_size(0, 0));
    driver.handle().start(2);

    // Start, three ticks, skipped capture, freeze: six messages exactly
    for _ in 0..6 {
        assert!(driver.next_step().await);
    }

    assert_eq!(driver.session().mode(), SessionMode::Countdown);
    assert_eq!(driver.session().countdown_remaining(), Some(3));
    assert!(driver.session().photos().is_empty());
}

#[tokio::test(start_paused = true)]
async fn device_switch_during_countdown_leaves_countdown_intact() {
    let mut driver = driver_with(SyntheticBackend::new(2).with_frame_size(32, 32));
    driver.handle().start(3);

    // Apply Start and the first tick
    assert!(driver.next_step().await);
    assert!(driver.next_step().await);
    assert_eq!(driver.session().countdown_remaining(), Some(2));

    // Old stream torn down, new stream attached; timers untouched
    let second = driver.camera().devices()[1].device_id.clone();
    driver
        .camera_mut()
        .select_device(&second, &StreamConstraints::default());
    assert!(driver.camera().has_stream());
    assert_eq!(driver.session().countdown_remaining(), Some(2));

    run_to_review(&mut driver).await;
    assert_eq!(driver.session().photos().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn reset_during_countdown_cancels_pending_ticks() {
    let mut driver = driver_with(SyntheticBackend::new(1).with_frame_size(32, 32));
    let handle = driver.handle();
    handle.start(3);

    assert!(driver.next_step().await);
    assert!(driver.next_step().await);
    assert_eq!(driver.session().countdown_remaining(), Some(2));

    handle.reset();
    assert!(driver.next_step().await);
    assert_eq!(driver.session().mode(), SessionMode::Idle);

    // The already-scheduled tick from the old session still arrives but is
    // dropped as stale
    assert!(driver.next_step().await);
    assert_eq!(driver.session().mode(), SessionMode::Idle);
    assert!(driver.session().countdown_remaining().is_none());
}

#[tokio::test(start_paused = true)]
async fn restart_from_review_runs_a_fresh_session() {
    let mut driver = driver_with(SyntheticBackend::new(1).with_frame_size(16, 16));
    let handle = driver.handle();

    handle.start(1);
    run_to_review(&mut driver).await;
    assert_eq!(driver.session().photos().len(), 1);
    let first_id = driver.session().photos()[0].id;

    handle.start(2);
    run_to_review(&mut driver).await;
    assert_eq!(driver.session().photos().len(), 2);
    assert!(driver.session().photos().iter().all(|p| p.id != first_id));
}
