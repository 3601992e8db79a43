use tracing::debug;

/// The fixed set of scene objects toggled on a mode switch: the standard and
/// VR object groups (reticles, UI roots), per-mode input routing, and the
/// pose driver that lets head tracking write the camera transform.
///
/// Flags flip together in `apply`; there is no observable mixed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneGroups {
    pub standard_group_active: bool,
    pub vr_group_active: bool,
    pub standard_input_enabled: bool,
    pub vr_input_enabled: bool,
    pub pose_driver_enabled: bool,
}

impl SceneGroups {
    pub fn new(vr_active: bool) -> Self {
        Self {
            standard_group_active: !vr_active,
            vr_group_active: vr_active,
            standard_input_enabled: !vr_active,
            vr_input_enabled: vr_active,
            pose_driver_enabled: vr_active,
        }
    }

    pub fn apply(&mut self, vr_active: bool) {
        *self = Self::new(vr_active);
        debug!(vr_active, "Scene groups switched");
    }

    pub fn vr_active(&self) -> bool {
        self.vr_group_active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_are_mutually_exclusive() {
        let mut groups = SceneGroups::new(false);
        assert!(groups.standard_group_active);
        assert!(groups.standard_input_enabled);
        assert!(!groups.vr_group_active);
        assert!(!groups.pose_driver_enabled);

        groups.apply(true);
        assert!(!groups.standard_group_active);
        assert!(!groups.standard_input_enabled);
        assert!(groups.vr_group_active);
        assert!(groups.vr_input_enabled);
        assert!(groups.pose_driver_enabled);
    }
}
