use anyhow::Result;
use cardboard_input::{DragMode, DragTracker};
use cardboard_tracking::{HeadPose, XrManager, XrRuntime};
use glam::Quat;
use tokio::sync::watch;
use tracing::info;

use crate::camera::Camera;
use crate::scene::SceneGroups;
use crate::wake::WakeLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Standard,
    Vr,
}

/// The HMD view controller.
///
/// Owns the camera, the drag accumulator, the scene group flags and the XR
/// lifecycle. Every frame [`update`](Self::update) recomposes the camera
/// orientation from the initial rotation and the accumulated drag angles,
/// unless the device head pose is driving the camera.
pub struct ViewController<R: XrRuntime, W: WakeLock> {
    camera: Camera,
    drag: DragTracker,
    groups: SceneGroups,
    mode: ViewMode,
    xr: XrManager<R>,
    wake: W,
    pose_rx: watch::Receiver<HeadPose>,
    /// No device pose available: VR mode runs on the simulated accumulator.
    simulate_head_tracking: bool,
    initial_rotation: Quat,
    default_fov_y_degrees: f32,
    default_aspect_ratio: f32,
}

impl<R: XrRuntime, W: WakeLock> ViewController<R, W> {
    pub fn new(
        camera: Camera,
        drag_rate_deg_per_px: f32,
        xr: XrManager<R>,
        wake: W,
        pose_rx: watch::Receiver<HeadPose>,
        simulate_head_tracking: bool,
    ) -> Self {
        Self {
            initial_rotation: camera.orientation,
            default_fov_y_degrees: camera.fov_y_degrees,
            default_aspect_ratio: camera.aspect_ratio,
            camera,
            drag: DragTracker::new(drag_rate_deg_per_px),
            groups: SceneGroups::new(false),
            mode: ViewMode::Standard,
            xr,
            wake,
            pose_rx,
            simulate_head_tracking,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn vr_active(&self) -> bool {
        self.mode == ViewMode::Vr
    }

    /// The drag mode matching the current view mode, for routing input.
    pub fn drag_mode(&self) -> DragMode {
        match self.mode {
            ViewMode::Standard => DragMode::Standard,
            ViewMode::Vr => DragMode::SimulateHead,
        }
    }

    pub fn drag_mut(&mut self) -> &mut DragTracker {
        &mut self.drag
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn groups(&self) -> SceneGroups {
        self.groups
    }

    /// Track the window aspect ratio. Applied immediately in standard mode;
    /// in VR mode the runtime owns the projection, so the value is only
    /// remembered for the restore on exit.
    pub fn set_window_aspect(&mut self, aspect_ratio: f32) {
        self.default_aspect_ratio = aspect_ratio;
        if self.mode == ViewMode::Standard {
            self.camera.aspect_ratio = aspect_ratio;
        }
    }

    /// Per-frame update: poll the viewer close button, then recompose the
    /// camera orientation.
    pub fn update(&mut self) {
        if self.xr.close_requested() {
            self.disable_vr();
        }

        if self.mode == ViewMode::Vr && !self.simulate_head_tracking {
            // Device pose owns the camera while VR is active.
            self.camera.orientation = self.pose_rx.borrow().quaternion;
            return;
        }

        let drag = self.drag.degrees();
        let attitude = self.initial_rotation * Quat::from_rotation_x(drag.x.to_radians());
        self.camera.orientation = Quat::from_rotation_y(-drag.y.to_radians()) * attitude;
    }

    /// Orientation back to the initial rotation, accumulator to zero.
    pub fn reset_camera(&mut self) {
        self.camera.orientation = self.initial_rotation;
        self.drag.reset();
    }

    /// Enter VR mode: switch scene groups, bring up the XR runtime (awaiting
    /// loader initialization if it has not completed), keep the screen awake,
    /// and reset the camera. On runtime failure the mode reverts to standard
    /// with a reset camera.
    pub async fn enable_vr(&mut self) -> Result<()> {
        self.groups.apply(true);
        self.mode = ViewMode::Vr;

        if let Err(e) = self.xr.activate().await {
            self.groups.apply(false);
            self.mode = ViewMode::Standard;
            // The failed transition still leaves a clean accumulator.
            self.reset_camera();
            return Err(e);
        }

        self.wake.keep_awake();
        self.reset_camera();
        info!("VR mode enabled");
        Ok(())
    }

    /// Leave VR mode: tear down the XR runtime (a no-op when the loader never
    /// initialized), switch scene groups back, reset the camera, and restore
    /// the default projection and sleep policy.
    pub fn disable_vr(&mut self) {
        self.xr.deactivate();
        self.groups.apply(false);
        self.mode = ViewMode::Standard;

        self.reset_camera();
        self.camera
            .reset_projection(self.default_fov_y_degrees, self.default_aspect_ratio);
        self.wake.restore_default();
        info!("VR mode disabled");
    }
}
