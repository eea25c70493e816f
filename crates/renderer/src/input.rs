use winit::event::{ElementState, TouchPhase};

/// Decides which input events overwrite the view's last-touch slot.
///
/// Single-owner state living on the event-loop thread next to the view.
/// Each handler returns `Some(position)` when the slot should be
/// overwritten; nothing is buffered, last write wins.
///
/// Touch semantics: the first touch to go down wins, additional simultaneous
/// touches are ignored until it lifts. A move without a preceding begin is
/// adopted as-is. Lifting or cancelling a touch releases the tracked id but
/// the last position outlives it.
#[derive(Debug, Default)]
pub struct TouchTracker {
    active_touch: Option<u64>,
    cursor: Option<(f32, f32)>,
    mouse_pressed: bool,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a touch event given in view-local coordinates.
    pub fn handle_touch(
        &mut self,
        phase: TouchPhase,
        id: u64,
        position: (f32, f32),
    ) -> Option<(f32, f32)> {
        match phase {
            TouchPhase::Started => {
                if self.active_touch.is_none() {
                    self.active_touch = Some(id);
                    return Some(position);
                }
                None
            }
            TouchPhase::Moved => match self.active_touch {
                None => {
                    self.active_touch = Some(id);
                    Some(position)
                }
                Some(active) if active == id => Some(position),
                Some(_) => None,
            },
            TouchPhase::Ended | TouchPhase::Cancelled => {
                if self.active_touch == Some(id) {
                    self.active_touch = None;
                }
                None
            }
        }
    }

    /// Desktop stand-in for touch input: a left-button drag feeds the same
    /// slot a finger would.
    pub fn handle_cursor_moved(&mut self, position: (f32, f32)) -> Option<(f32, f32)> {
        self.cursor = Some(position);
        self.mouse_pressed.then_some(position)
    }

    pub fn handle_mouse_button(&mut self, state: ElementState) -> Option<(f32, f32)> {
        match state {
            ElementState::Pressed => {
                self.mouse_pressed = true;
                self.cursor
            }
            ElementState::Released => {
                self.mouse_pressed = false;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpu::FrameState;

    fn apply(state: &mut FrameState, update: Option<(f32, f32)>) {
        if let Some(position) = update {
            state.last_touch = position;
        }
    }

    #[test]
    fn begin_then_move_at_same_location_is_idempotent() {
        let mut tracker = TouchTracker::new();
        let mut state = FrameState::new();

        apply(&mut state, tracker.handle_touch(TouchPhase::Started, 1, (40.0, 60.0)));
        apply(&mut state, tracker.handle_touch(TouchPhase::Moved, 1, (40.0, 60.0)));

        assert_eq!(state.last_touch, (40.0, 60.0));
    }

    #[test]
    fn move_without_begin_still_updates() {
        let mut tracker = TouchTracker::new();
        let mut state = FrameState::new();

        apply(&mut state, tracker.handle_touch(TouchPhase::Moved, 7, (12.0, 8.0)));

        assert_eq!(state.last_touch, (12.0, 8.0));
    }

    #[test]
    fn only_the_first_touch_wins() {
        let mut tracker = TouchTracker::new();
        let mut state = FrameState::new();

        apply(&mut state, tracker.handle_touch(TouchPhase::Started, 1, (10.0, 10.0)));
        apply(&mut state, tracker.handle_touch(TouchPhase::Started, 2, (99.0, 99.0)));
        apply(&mut state, tracker.handle_touch(TouchPhase::Moved, 2, (88.0, 88.0)));
        assert_eq!(state.last_touch, (10.0, 10.0));

        apply(&mut state, tracker.handle_touch(TouchPhase::Moved, 1, (20.0, 30.0)));
        assert_eq!(state.last_touch, (20.0, 30.0));
    }

    #[test]
    fn lifting_the_touch_retains_the_last_position() {
        let mut tracker = TouchTracker::new();
        let mut state = FrameState::new();

        apply(&mut state, tracker.handle_touch(TouchPhase::Started, 1, (5.0, 5.0)));
        apply(&mut state, tracker.handle_touch(TouchPhase::Moved, 1, (6.0, 7.0)));
        apply(&mut state, tracker.handle_touch(TouchPhase::Ended, 1, (0.0, 0.0)));
        assert_eq!(state.last_touch, (6.0, 7.0));

        // A new touch can be adopted once the old one lifted.
        apply(&mut state, tracker.handle_touch(TouchPhase::Started, 2, (50.0, 51.0)));
        assert_eq!(state.last_touch, (50.0, 51.0));
    }

    #[test]
    fn cancel_releases_tracking_without_clearing_the_position() {
        let mut tracker = TouchTracker::new();
        let mut state = FrameState::new();

        apply(&mut state, tracker.handle_touch(TouchPhase::Started, 3, (1.0, 2.0)));
        apply(&mut state, tracker.handle_touch(TouchPhase::Cancelled, 3, (0.0, 0.0)));

        assert_eq!(state.last_touch, (1.0, 2.0));
        assert!(tracker.handle_touch(TouchPhase::Started, 4, (9.0, 9.0)).is_some());
    }

    #[test]
    fn left_drag_feeds_the_touch_slot() {
        let mut tracker = TouchTracker::new();
        let mut state = FrameState::new();

        assert!(tracker.handle_cursor_moved((30.0, 30.0)).is_none());
        apply(&mut state, tracker.handle_mouse_button(ElementState::Pressed));
        assert_eq!(state.last_touch, (30.0, 30.0));

        apply(&mut state, tracker.handle_cursor_moved((31.0, 35.0)));
        assert_eq!(state.last_touch, (31.0, 35.0));

        assert!(tracker.handle_mouse_button(ElementState::Released).is_none());
        assert!(tracker.handle_cursor_moved((90.0, 90.0)).is_none());
        assert_eq!(state.last_touch, (31.0, 35.0));
    }
}
