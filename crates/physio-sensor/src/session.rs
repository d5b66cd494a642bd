//! Timed session runner.

use std::time::Duration;

use rand::Rng;
use tokio::sync::{mpsc, oneshot};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::feed::{SensorFeed, SensorFrame, SessionSummary};

pub const TICK_PERIOD: Duration = Duration::from_millis(100);

/// Step `feed` every `period`, sending each frame to `frames`, until the rep
/// target is reached, `stop` fires, or the frame receiver goes away.
///
/// Dropping the `stop` sender without sending does not end the session.
pub async fn run_session<R: Rng + Send>(
    mut feed: SensorFeed<R>,
    period: Duration,
    frames: mpsc::Sender<SensorFrame>,
    mut stop: oneshot::Receiver<()>,
) -> SessionSummary {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut stop_open = true;

    info!(target_reps = feed.target_reps(), "exercise session started");

    loop {
        tokio::select! {
            res = &mut stop, if stop_open => match res {
                Ok(()) => {
                    info!("exercise session stopped");
                    break;
                }
                Err(_) => stop_open = false,
            },
            _ = interval.tick() => {
                let frame = feed.step();
                if frames.send(frame).await.is_err() {
                    debug!("frame receiver dropped");
                    break;
                }
                if frame.complete {
                    break;
                }
            }
        }
    }

    let summary = feed.summary();
    info!(
        peak_rom = summary.peak_rom,
        reps = summary.reps,
        completed = summary.completed,
        "exercise session ended"
    );
    summary
}
