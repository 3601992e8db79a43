use serde::{Deserialize, Serialize};

/// Allowed range for the drag rate (degrees per pixel of pointer travel).
pub const DRAG_RATE_MIN: f32 = 0.05;
pub const DRAG_RATE_MAX: f32 = 2.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Degrees of camera rotation per pixel of pointer/touch travel.
    pub drag_rate_deg_per_px: f32,
    /// Whether the app boots directly into VR mode.
    pub start_in_vr: bool,
    /// Camera defaults.
    pub camera: CameraConfig,
    /// Head tracking settings.
    pub tracking: TrackingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            drag_rate_deg_per_px: 0.2,
            start_in_vr: false,
            camera: CameraConfig::default(),
            tracking: TrackingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Clamp values into their supported ranges after deserialization.
    pub fn sanitize(mut self) -> Self {
        self.drag_rate_deg_per_px = self
            .drag_rate_deg_per_px
            .clamp(DRAG_RATE_MIN, DRAG_RATE_MAX);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    /// Near clipping plane (meters).
    pub near: f32,
    /// Far clipping plane (meters).
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_y_degrees: 60.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingConfig {
    /// Publish rate of the stub pose source, in Hz.
    pub stub_pose_rate_hz: u32,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            stub_pose_rate_hz: 60,
        }
    }
}
