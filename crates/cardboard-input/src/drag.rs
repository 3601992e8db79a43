use glam::Vec2;
use winit::event::{ElementState, MouseButton, TouchPhase};
use winit::keyboard::ModifiersState;

/// How pointer motion feeds the accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    /// Standard camera control: left-button drag (or touch) rotates the view.
    Standard,
    /// Head-motion simulation: ALT+mouse substitutes for device tracking.
    SimulateHead,
}

/// Accumulates pointer/touch deltas into pitch/yaw drag angles.
///
/// `degrees().x` is pitch, `degrees().y` is yaw, both in degrees. Cursor
/// position is tracked continuously so that pressing a button never produces
/// a jump from a stale position.
///
/// Window coordinates have y growing downward; the accumulated angles are
/// stored so that dragging up looks up and dragging right turns right in
/// standard mode. The simulation path uses the opposite sign: moving the
/// simulated device up means dragging the view down.
#[derive(Debug)]
pub struct DragTracker {
    rate_deg_per_px: f32,
    drag_degrees: Vec2,
    alt_held: bool,
    pointer_held: bool,
    last_cursor: Option<Vec2>,
    /// First active touch: (id, last position).
    touch: Option<(u64, Vec2)>,
}

impl DragTracker {
    pub fn new(rate_deg_per_px: f32) -> Self {
        Self {
            rate_deg_per_px,
            drag_degrees: Vec2::ZERO,
            alt_held: false,
            pointer_held: false,
            last_cursor: None,
            touch: None,
        }
    }

    /// Accumulated (pitch, yaw) in degrees.
    pub fn degrees(&self) -> Vec2 {
        self.drag_degrees
    }

    /// Zero the accumulator and forget remembered positions.
    pub fn reset(&mut self) {
        self.drag_degrees = Vec2::ZERO;
        self.last_cursor = None;
        self.touch = None;
    }

    pub fn on_modifiers_changed(&mut self, modifiers: ModifiersState) {
        self.alt_held = modifiers.alt_key();
    }

    pub fn on_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button != MouseButton::Left {
            return;
        }
        self.pointer_held = state == ElementState::Pressed;
    }

    /// Feed a cursor move. Accumulates only while the mode's gate is held
    /// (left button in standard mode, ALT in simulation mode).
    pub fn on_cursor_moved(&mut self, mode: DragMode, x: f64, y: f64) {
        let pos = Vec2::new(x as f32, y as f32);
        let delta = match self.last_cursor {
            Some(last) => pos - last,
            None => Vec2::ZERO,
        };
        self.last_cursor = Some(pos);

        match mode {
            DragMode::Standard if self.pointer_held => {
                self.drag_degrees.x += -delta.y * self.rate_deg_per_px;
                self.drag_degrees.y += delta.x * self.rate_deg_per_px;
            }
            DragMode::SimulateHead if self.alt_held => {
                self.drag_degrees.x += delta.y * self.rate_deg_per_px;
                self.drag_degrees.y += -delta.x * self.rate_deg_per_px;
            }
            _ => {}
        }
    }

    /// Feed a touch event. Only the first touch rotates the view, and only
    /// in standard mode (in VR mode the device pose owns the camera).
    pub fn on_touch(&mut self, mode: DragMode, id: u64, phase: TouchPhase, x: f64, y: f64) {
        if mode != DragMode::Standard {
            return;
        }

        let pos = Vec2::new(x as f32, y as f32);
        match phase {
            TouchPhase::Started => {
                if self.touch.is_none() {
                    self.touch = Some((id, pos));
                }
            }
            TouchPhase::Moved => {
                if let Some((active_id, last)) = self.touch {
                    if active_id == id {
                        let delta = pos - last;
                        self.drag_degrees.x += -delta.y * self.rate_deg_per_px;
                        self.drag_degrees.y += delta.x * self.rate_deg_per_px;
                        self.touch = Some((active_id, pos));
                    }
                }
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                if self.touch.map_or(false, |(active_id, _)| active_id == id) {
                    self.touch = None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATE: f32 = 0.2;

    #[test]
    fn unheld_pointer_moves_accumulate_nothing() {
        let mut tracker = DragTracker::new(RATE);
        tracker.on_cursor_moved(DragMode::Standard, 10.0, 10.0);
        tracker.on_cursor_moved(DragMode::Standard, 50.0, 80.0);
        assert_eq!(tracker.degrees(), Vec2::ZERO);
    }

    #[test]
    fn held_drag_accumulates_with_rate_and_sign() {
        let mut tracker = DragTracker::new(RATE);
        tracker.on_cursor_moved(DragMode::Standard, 100.0, 100.0);
        tracker.on_mouse_button(MouseButton::Left, ElementState::Pressed);
        // Drag right 10px and up 20px.
        tracker.on_cursor_moved(DragMode::Standard, 110.0, 80.0);

        let d = tracker.degrees();
        assert!((d.x - 20.0 * RATE).abs() < 1e-5, "pitch: {}", d.x);
        assert!((d.y - 10.0 * RATE).abs() < 1e-5, "yaw: {}", d.y);
    }

    #[test]
    fn first_move_after_press_does_not_jump() {
        let mut tracker = DragTracker::new(RATE);
        // No hover history at all; pressing then moving once sees no last
        // position and must contribute nothing.
        tracker.on_mouse_button(MouseButton::Left, ElementState::Pressed);
        tracker.on_cursor_moved(DragMode::Standard, 500.0, 500.0);
        assert_eq!(tracker.degrees(), Vec2::ZERO);
    }

    #[test]
    fn simulation_requires_alt_and_inverts_sign() {
        let mut tracker = DragTracker::new(RATE);
        tracker.on_cursor_moved(DragMode::SimulateHead, 0.0, 0.0);

        // Without ALT nothing accumulates.
        tracker.on_cursor_moved(DragMode::SimulateHead, 10.0, 10.0);
        assert_eq!(tracker.degrees(), Vec2::ZERO);

        tracker.on_modifiers_changed(ModifiersState::ALT);
        tracker.on_cursor_moved(DragMode::SimulateHead, 20.0, 30.0);

        let d = tracker.degrees();
        assert!((d.x - 20.0 * RATE).abs() < 1e-5, "pitch: {}", d.x);
        assert!((d.y + 10.0 * RATE).abs() < 1e-5, "yaw: {}", d.y);
    }

    #[test]
    fn right_button_does_not_gate_drag() {
        let mut tracker = DragTracker::new(RATE);
        tracker.on_cursor_moved(DragMode::Standard, 0.0, 0.0);
        tracker.on_mouse_button(MouseButton::Right, ElementState::Pressed);
        tracker.on_cursor_moved(DragMode::Standard, 40.0, 40.0);
        assert_eq!(tracker.degrees(), Vec2::ZERO);
    }

    #[test]
    fn touch_drag_accumulates_and_end_clears() {
        let mut tracker = DragTracker::new(RATE);
        tracker.on_touch(DragMode::Standard, 7, TouchPhase::Started, 100.0, 100.0);
        // Start itself contributes nothing.
        assert_eq!(tracker.degrees(), Vec2::ZERO);

        tracker.on_touch(DragMode::Standard, 7, TouchPhase::Moved, 100.0, 50.0);
        let d = tracker.degrees();
        assert!((d.x - 50.0 * RATE).abs() < 1e-5);

        tracker.on_touch(DragMode::Standard, 7, TouchPhase::Ended, 100.0, 50.0);

        // A fresh touch far away must not spike the accumulator.
        tracker.on_touch(DragMode::Standard, 8, TouchPhase::Started, 900.0, 900.0);
        let d2 = tracker.degrees();
        assert!((d2 - d).length() < 1e-5);
    }

    #[test]
    fn secondary_touch_is_ignored() {
        let mut tracker = DragTracker::new(RATE);
        tracker.on_touch(DragMode::Standard, 1, TouchPhase::Started, 0.0, 0.0);
        tracker.on_touch(DragMode::Standard, 2, TouchPhase::Started, 200.0, 200.0);
        tracker.on_touch(DragMode::Standard, 2, TouchPhase::Moved, 250.0, 250.0);
        assert_eq!(tracker.degrees(), Vec2::ZERO);
    }

    #[test]
    fn touch_is_ignored_while_vr_pose_owns_the_camera() {
        let mut tracker = DragTracker::new(RATE);
        tracker.on_touch(DragMode::SimulateHead, 1, TouchPhase::Started, 0.0, 0.0);
        tracker.on_touch(DragMode::SimulateHead, 1, TouchPhase::Moved, 50.0, 50.0);
        assert_eq!(tracker.degrees(), Vec2::ZERO);
    }

    #[test]
    fn reset_zeroes_accumulator_and_history() {
        let mut tracker = DragTracker::new(RATE);
        tracker.on_cursor_moved(DragMode::Standard, 0.0, 0.0);
        tracker.on_mouse_button(MouseButton::Left, ElementState::Pressed);
        tracker.on_cursor_moved(DragMode::Standard, 100.0, 100.0);
        assert_ne!(tracker.degrees(), Vec2::ZERO);

        tracker.reset();
        assert_eq!(tracker.degrees(), Vec2::ZERO);

        // History forgotten: next move contributes nothing even while held.
        tracker.on_cursor_moved(DragMode::Standard, 300.0, 300.0);
        assert_eq!(tracker.degrees(), Vec2::ZERO);
    }
}
