//! Latest pointer position, fed by the runtime's pointer-move events.

use gridglow_engine::input::InputEvent;

/// Pointer position in screen (logical pixel) coordinates, top-left origin.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Holds the pointer position as of the most recent pointer-move event.
///
/// Single writer (the input callback), read once per frame. Every event
/// overwrites the previous value; nothing is queued. Leaving the window does
/// not clear the position, so the grid keeps glowing where the pointer exited.
#[derive(Debug)]
pub struct PointerTracker {
    latest: PointerState,
    attached: bool,
}

impl PointerTracker {
    /// Creates an attached tracker positioned at the screen origin.
    pub fn new() -> Self {
        Self {
            latest: PointerState::default(),
            attached: true,
        }
    }

    /// Records pointer moves; other events are ignored.
    ///
    /// Returns `true` when the tracked position changed.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::PointerMoved { x, y } => self.record(*x, *y),
            _ => false,
        }
    }

    /// Overwrites the tracked position. No-op once detached.
    pub fn record(&mut self, x: f32, y: f32) -> bool {
        if !self.attached {
            return false;
        }
        let next = PointerState::new(x, y);
        let changed = next != self.latest;
        self.latest = next;
        changed
    }

    #[inline]
    pub fn position(&self) -> PointerState {
        self.latest
    }

    /// Stops listening. Called when the owning window is torn down.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    #[inline]
    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moved(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerMoved { x, y }
    }

    #[test]
    fn starts_at_origin() {
        let tracker = PointerTracker::new();
        assert_eq!(tracker.position(), PointerState::new(0.0, 0.0));
        assert!(tracker.is_attached());
    }

    #[test]
    fn last_move_before_frame_wins() {
        let mut tracker = PointerTracker::new();
        tracker.handle_event(&moved(10.0, 10.0));
        tracker.handle_event(&moved(20.0, 20.0));
        assert_eq!(tracker.position(), PointerState::new(20.0, 20.0));
    }

    #[test]
    fn repeated_position_reports_unchanged() {
        let mut tracker = PointerTracker::new();
        assert!(tracker.handle_event(&moved(5.0, 6.0)));
        assert!(!tracker.handle_event(&moved(5.0, 6.0)));
    }

    #[test]
    fn pointer_left_keeps_last_position() {
        let mut tracker = PointerTracker::new();
        tracker.handle_event(&moved(42.0, 7.0));
        assert!(!tracker.handle_event(&InputEvent::PointerLeft));
        assert_eq!(tracker.position(), PointerState::new(42.0, 7.0));
    }

    #[test]
    fn detached_tracker_ignores_events() {
        let mut tracker = PointerTracker::new();
        tracker.handle_event(&moved(1.0, 1.0));
        tracker.detach();
        assert!(!tracker.handle_event(&moved(2.0, 2.0)));
        assert_eq!(tracker.position(), PointerState::new(1.0, 1.0));
    }
}
