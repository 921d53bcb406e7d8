use std::collections::HashSet;

use super::types::Key;

/// Per-frame input deltas.
///
/// `InputState` provides the current state (held keys, modifiers).
/// `InputFrame` provides the transition sets for the current frame; the
/// runtime clears it after each `on_frame` call.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Keys pressed this frame.
    pub keys_pressed: HashSet<Key>,

    /// Keys released this frame.
    pub keys_released: HashSet<Key>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
    }

    /// True when `key` transitioned to pressed during this frame.
    pub fn key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// True when `key` transitioned to released during this frame.
    pub fn key_released(&self, key: Key) -> bool {
        self.keys_released.contains(&key)
    }
}
