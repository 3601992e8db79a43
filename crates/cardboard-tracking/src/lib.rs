pub mod runtime;
mod types;

pub use runtime::{LifecycleError, StubXrRuntime, XrManager, XrRuntime};
pub use types::HeadPose;

use glam::Quat;
use std::time::Duration;
use tokio::sync::{mpsc, watch};

/// Commands sent to the pose publishing task.
enum TrackingCommand {
    Recenter,
}

/// Client for the head tracking source.
///
/// Owns a background task that publishes the latest fused head pose through
/// a watch channel. The desktop stub publishes the zero-referenced identity
/// pose at a fixed rate; on device the platform XR subsystems feed this.
pub struct TrackingClient {
    pose_rx: watch::Receiver<HeadPose>,
    command_tx: mpsc::UnboundedSender<TrackingCommand>,
    _task: tokio::task::JoinHandle<()>,
}

impl TrackingClient {
    /// Start the stub pose source, publishing at `rate_hz`.
    pub fn stub(rate_hz: u32) -> Self {
        let (pose_tx, pose_rx) = watch::channel(HeadPose::default());
        let (command_tx, command_rx) = mpsc::unbounded_channel();

        tracing::info!(rate_hz, "Starting stub head tracking source");
        let task = tokio::spawn(stub_pose_loop(pose_tx, command_rx, rate_hz));

        Self {
            pose_rx,
            command_tx,
            _task: task,
        }
    }

    /// Create a mock client that never publishes (no head tracking).
    pub fn mock() -> Self {
        let (pose_tx, pose_rx) = watch::channel(HeadPose::default());
        let (command_tx, _) = mpsc::unbounded_channel();
        let task = tokio::spawn(async move {
            // Keep the sender alive.
            let _tx = pose_tx;
            tokio::signal::ctrl_c().await.ok();
        });
        Self {
            pose_rx,
            command_tx,
            _task: task,
        }
    }

    /// Get the latest head pose (non-blocking).
    pub fn pose(&self) -> HeadPose {
        *self.pose_rx.borrow()
    }

    /// A receiver for the pose stream, for callers that want change
    /// notifications instead of polling.
    pub fn pose_receiver(&self) -> watch::Receiver<HeadPose> {
        self.pose_rx.clone()
    }

    /// Make the current head orientation the zero reference.
    pub fn recenter(&self) {
        let _ = self.command_tx.send(TrackingCommand::Recenter);
    }
}

/// Background task: publish zero-referenced poses, handle recenter commands.
async fn stub_pose_loop(
    pose_tx: watch::Sender<HeadPose>,
    mut command_rx: mpsc::UnboundedReceiver<TrackingCommand>,
    rate_hz: u32,
) {
    let period = Duration::from_secs_f64(1.0 / rate_hz.max(1) as f64);
    let mut ticker = tokio::time::interval(period);

    // The stub device orientation never moves; recentering still rebases it.
    let device_orientation = Quat::IDENTITY;
    let mut zero_ref = Quat::IDENTITY;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let relative = zero_ref.conjugate() * device_orientation;
                if pose_tx.send(HeadPose { quaternion: relative }).is_err() {
                    // All receivers dropped.
                    break;
                }
            }
            cmd = command_rx.recv() => {
                match cmd {
                    Some(TrackingCommand::Recenter) => {
                        zero_ref = device_orientation;
                        tracing::debug!("Head pose recentered");
                    }
                    None => break,
                }
            }
        }
    }
}
