//! Keyboard input state
//!
//! Tracks the set of currently held camera keys plus the latched close
//! request. The host application feeds winit key events in; the camera
//! controller reads the held set once per frame tick.

use rustc_hash::FxHashSet;
use winit::keyboard::KeyCode;

/// Camera control keys
///
/// Bindings follow the original tool: W/S move along the view axis,
/// A/D orbit around the world up axis, Q/Z pitch the orbit up and down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraKey {
    /// Move toward the look target (W)
    Forward,
    /// Move away from the look target (S)
    Backward,
    /// Orbit left around the world up axis (A)
    RotateLeft,
    /// Orbit right around the world up axis (D)
    RotateRight,
    /// Pitch the orbit upward (Q)
    PitchUp,
    /// Pitch the orbit downward (Z)
    PitchDown,
}

impl CameraKey {
    /// Map a physical key code to its camera action, if any
    pub fn from_key_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::KeyW => Some(CameraKey::Forward),
            KeyCode::KeyS => Some(CameraKey::Backward),
            KeyCode::KeyA => Some(CameraKey::RotateLeft),
            KeyCode::KeyD => Some(CameraKey::RotateRight),
            KeyCode::KeyQ => Some(CameraKey::PitchUp),
            KeyCode::KeyZ => Some(CameraKey::PitchDown),
            _ => None,
        }
    }
}

/// Set of currently held camera keys plus the close request flag.
///
/// The close request latches: once Escape has been pressed it stays
/// requested for the rest of the run.
#[derive(Debug, Default)]
pub struct InputState {
    held: FxHashSet<CameraKey>,
    close_requested: bool,
}

impl InputState {
    /// Create a new empty input state
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a raw key event from the host window.
    ///
    /// Escape latches the close request; other keys update the held set.
    /// Unbound keys are ignored.
    pub fn apply_key(&mut self, code: KeyCode, pressed: bool) {
        if code == KeyCode::Escape {
            if pressed {
                self.close_requested = true;
            }
            return;
        }
        if let Some(key) = CameraKey::from_key_code(code) {
            if pressed {
                self.held.insert(key);
            } else {
                self.held.remove(&key);
            }
        }
    }

    /// Mark a camera key as held
    pub fn press(&mut self, key: CameraKey) {
        self.held.insert(key);
    }

    /// Mark a camera key as released
    pub fn release(&mut self, key: CameraKey) {
        self.held.remove(&key);
    }

    /// Whether a camera key is currently held
    pub fn is_held(&self, key: CameraKey) -> bool {
        self.held.contains(&key)
    }

    /// Number of currently held camera keys
    pub fn held_count(&self) -> usize {
        self.held.len()
    }

    /// Latch the close request
    pub fn request_close(&mut self) {
        self.close_requested = true;
    }

    /// Whether close has been requested
    pub fn close_requested(&self) -> bool {
        self.close_requested
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
