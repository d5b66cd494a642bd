use std::time::Duration;

use physio_sensor::feed::SensorFeed;
use physio_sensor::session::run_session;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::{mpsc, oneshot};

#[tokio::test]
async fn session_runs_until_target_reached() {
    let feed = SensorFeed::new(StdRng::seed_from_u64(11), Some(1));
    let (tx, mut rx) = mpsc::channel(16);
    let (_stop_tx, stop_rx) = oneshot::channel();

    let handle = tokio::spawn(run_session(feed, Duration::from_millis(1), tx, stop_rx));

    let mut frames = Vec::new();
    while let Some(frame) = rx.recv().await {
        frames.push(frame);
    }
    let summary = handle.await.unwrap();

    assert!(summary.completed);
    assert_eq!(summary.reps, 1);
    let last = frames.last().unwrap();
    assert!(last.complete);
    assert_eq!(last.peak_angle, summary.peak_rom);
    assert_eq!(frames.len() as u64, summary.ticks);
}

#[tokio::test]
async fn stop_signal_ends_session_early() {
    let feed = SensorFeed::new(StdRng::seed_from_u64(5), Some(u32::MAX));
    let (tx, mut rx) = mpsc::channel(4096);
    let (stop_tx, stop_rx) = oneshot::channel();

    let handle = tokio::spawn(run_session(feed, Duration::from_millis(1), tx, stop_rx));

    rx.recv().await.unwrap();
    stop_tx.send(()).unwrap();
    let summary = handle.await.unwrap();

    assert!(!summary.completed);
    assert!(summary.ticks >= 1);
}

#[tokio::test]
async fn dropped_receiver_ends_session() {
    let feed = SensorFeed::new(StdRng::seed_from_u64(9), Some(u32::MAX));
    let (tx, rx) = mpsc::channel(1);
    let (_stop_tx, stop_rx) = oneshot::channel();
    drop(rx);

    let summary = run_session(feed, Duration::from_millis(1), tx, stop_rx).await;
    assert!(!summary.completed);
    assert_eq!(summary.ticks, 1);
}
