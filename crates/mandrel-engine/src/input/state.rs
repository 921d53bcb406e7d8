use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState, Modifiers};

/// Current input state for a single window.
///
/// Holds "is down" information; per-frame transitions are recorded into an
/// `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    /// Current modifier state.
    pub modifiers: Modifiers,

    /// Whether the window is focused.
    pub focused: bool,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state and
    /// writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = m;
            }

            InputEvent::Focused(f) => {
                self.focused = f;
                if !f {
                    // On focus loss, clear the "down" set. Avoids stuck keys
                    // when focus changes mid-press.
                    self.keys_down.clear();
                }
            }

            InputEvent::Key {
                key,
                state,
                modifiers,
                ..
            } => {
                self.modifiers = modifiers;

                match state {
                    KeyState::Pressed => {
                        let inserted = self.keys_down.insert(key);
                        if inserted {
                            frame.keys_pressed.insert(key);
                        }
                    }
                    KeyState::Released => {
                        let removed = self.keys_down.remove(&key);
                        if removed {
                            frame.keys_released.insert(key);
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

    fn key_event(key: Key, state: KeyState) -> InputEvent {
        InputEvent::Key {
            key,
            state,
            modifiers: Modifiers::default(),
            repeat: false,
        }
    }

    // ── press / release tracking ──────────────────────────────────────────

    #[test]
    fn press_records_down_and_frame_delta() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key_event(Key::F5, KeyState::Pressed));

        assert!(state.key_down(Key::F5));
        assert!(frame.key_pressed(Key::F5));
        assert!(!frame.key_released(Key::F5));
    }

    #[test]
    fn release_clears_down_and_records_delta() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key_event(Key::Escape, KeyState::Pressed));
        frame.clear();
        state.apply_event(&mut frame, key_event(Key::Escape, KeyState::Released));

        assert!(!state.key_down(Key::Escape));
        assert!(frame.key_released(Key::Escape));
        assert!(!frame.key_pressed(Key::Escape));
    }

    #[test]
    fn repeat_press_does_not_duplicate_delta() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key_event(Key::Space, KeyState::Pressed));
        frame.clear();
        // OS key-repeat arrives as another press while the key is held.
        state.apply_event(&mut frame, key_event(Key::Space, KeyState::Pressed));

        assert!(state.key_down(Key::Space));
        assert!(!frame.key_pressed(Key::Space));
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key_event(Key::F1, KeyState::Released));

        assert!(!frame.key_released(Key::F1));
    }

    // ── focus ─────────────────────────────────────────────────────────────

    #[test]
    fn focus_loss_clears_held_keys() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key_event(Key::Space, KeyState::Pressed));
        state.apply_event(&mut frame, InputEvent::Focused(false));

        assert!(!state.focused);
        assert!(!state.key_down(Key::Space));
    }
}
