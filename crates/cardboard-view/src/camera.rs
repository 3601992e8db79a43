use glam::{Mat4, Quat};

/// Camera for the viewer scene.
///
/// Position is fixed at the origin. Only orientation changes, driven either
/// by the head pose (VR mode) or the drag accumulator (standard mode).
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub orientation: Quat,
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    /// Aspect ratio (width / height).
    pub aspect_ratio: f32,
    /// Near clipping plane (meters).
    pub near: f32,
    /// Far clipping plane (meters).
    pub far: f32,
}

impl Camera {
    pub fn new(fov_y_degrees: f32, near: f32, far: f32) -> Self {
        Self {
            orientation: Quat::IDENTITY,
            fov_y_degrees,
            aspect_ratio: 16.0 / 9.0,
            near,
            far,
        }
    }

    /// View matrix (inverse of camera world transform).
    pub fn view_matrix(&self) -> Mat4 {
        // Camera is at origin, only rotated.
        Mat4::from_quat(self.orientation.conjugate())
    }

    /// Perspective projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_y_degrees.to_radians(),
            self.aspect_ratio,
            self.near,
            self.far,
        )
    }

    /// Restore the projection to the given field of view and aspect ratio.
    /// Used when leaving VR mode, where the runtime may have changed both.
    pub fn reset_projection(&mut self, fov_y_degrees: f32, aspect_ratio: f32) {
        self.fov_y_degrees = fov_y_degrees;
        self.aspect_ratio = aspect_ratio;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn identity_orientation_gives_identity_view() {
        let camera = Camera::new(60.0, 0.1, 100.0);
        let view = camera.view_matrix();
        assert!(view.abs_diff_eq(Mat4::IDENTITY, 1e-6));
    }

    #[test]
    fn view_matrix_inverts_orientation() {
        let mut camera = Camera::new(60.0, 0.1, 100.0);
        camera.orientation = Quat::from_rotation_y(0.5);

        // A point the camera looks at should land on the view-space -Z axis.
        let forward = camera.orientation * -Vec3::Z;
        let in_view = camera.view_matrix().transform_point3(forward);
        assert!((in_view - -Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn reset_projection_restores_fov_and_aspect() {
        let mut camera = Camera::new(60.0, 0.1, 100.0);
        camera.fov_y_degrees = 90.0;
        camera.aspect_ratio = 0.5;

        camera.reset_projection(60.0, 16.0 / 9.0);
        assert!((camera.fov_y_degrees - 60.0).abs() < 1e-6);
        assert!((camera.aspect_ratio - 16.0 / 9.0).abs() < 1e-6);
    }
}
