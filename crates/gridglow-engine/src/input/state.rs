use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState, Modifiers};

/// Current input state for a single window.
#[derive(Debug, Default)]
pub struct InputState {
    pub modifiers: Modifiers,

    pub focused: bool,

    /// Pointer position in logical pixels; `None` while the pointer is outside.
    pub pointer_pos: Option<(f32, f32)>,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: &InputEvent) {
        match ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = *m;
            }

            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Focus loss mid-press would otherwise leave keys stuck down.
                    self.keys_down.clear();
                }
            }

            InputEvent::PointerMoved { x, y } => {
                self.pointer_pos = Some((*x, *y));
                frame.pointer_moves = frame.pointer_moves.saturating_add(1);
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::Key {
                key,
                state,
                modifiers,
                ..
            } => {
                self.modifiers = *modifiers;

                match state {
                    KeyState::Pressed => {
                        if self.keys_down.insert(*key) {
                            frame.keys_pressed.insert(*key);
                        }
                    }
                    KeyState::Released => {
                        if self.keys_down.remove(key) {
                            frame.keys_released.insert(*key);
                        }
                    }
                }
            }
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, state: KeyState) -> InputEvent {
        InputEvent::Key {
            key,
            state,
            modifiers: Modifiers::default(),
            repeat: false,
        }
    }

    #[test]
    fn pointer_move_updates_position_and_counts() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, &InputEvent::PointerMoved { x: 10.0, y: 10.0 });
        state.apply_event(&mut frame, &InputEvent::PointerMoved { x: 20.0, y: 20.0 });

        assert_eq!(state.pointer_pos, Some((20.0, 20.0)));
        assert_eq!(frame.pointer_moves, 2);
    }

    #[test]
    fn pointer_left_clears_position() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, &InputEvent::PointerMoved { x: 1.0, y: 2.0 });
        state.apply_event(&mut frame, &InputEvent::PointerLeft);

        assert_eq!(state.pointer_pos, None);
    }

    #[test]
    fn held_key_is_pressed_once() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, &key(Key::ArrowUp, KeyState::Pressed));
        frame.clear();
        // Auto-repeat delivers another press while the key is still down.
        state.apply_event(&mut frame, &key(Key::ArrowUp, KeyState::Pressed));

        assert!(state.key_down(Key::ArrowUp));
        assert!(frame.keys_pressed.is_empty());
    }

    #[test]
    fn release_is_recorded() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, &key(Key::D, KeyState::Pressed));
        state.apply_event(&mut frame, &key(Key::D, KeyState::Released));

        assert!(!state.key_down(Key::D));
        assert!(frame.keys_pressed.contains(&Key::D));
        assert!(frame.keys_released.contains(&Key::D));
    }

    #[test]
    fn focus_loss_releases_keys() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, &key(Key::R, KeyState::Pressed));
        state.apply_event(&mut frame, &InputEvent::Focused(false));

        assert!(!state.focused);
        assert!(state.keys_down.is_empty());
    }
}
