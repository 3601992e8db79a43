use glam::Quat;

/// Latest head orientation published by the tracking source.
#[derive(Debug, Clone, Copy)]
pub struct HeadPose {
    /// Head orientation as a unit quaternion, relative to the zero reference.
    pub quaternion: Quat,
}

impl Default for HeadPose {
    fn default() -> Self {
        Self {
            quaternion: Quat::IDENTITY,
        }
    }
}
