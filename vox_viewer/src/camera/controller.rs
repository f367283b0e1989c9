/// CameraController — applies held keys to the orbit camera state.
///
/// Pure function of (state, input, delta_time): translation is scaled by
/// `move_speed * delta_time`; the rotation step is a fixed angle applied
/// once per update tick and is NOT scaled by delta_time (the original
/// tool's behavior, preserved deliberately).

use glam::{Quat, Vec3};
use crate::config::ViewerConfig;
use crate::input::{CameraKey, InputState};
use super::camera::CameraState;

/// Key-driven controller for the orbit camera.
///
/// `&self` because the controller is stateless — all mutable state lives
/// in the `CameraState` passed to `update`.
#[derive(Debug, Clone, Copy)]
pub struct CameraController {
    move_speed: f32,
    rotation_step_rad: f32,
}

impl CameraController {
    /// Create a controller with explicit speeds
    ///
    /// # Arguments
    ///
    /// * `move_speed` - translation speed in world units per second
    /// * `rotation_step_rad` - rotation step in radians per update tick
    pub fn new(move_speed: f32, rotation_step_rad: f32) -> Self {
        Self {
            move_speed,
            rotation_step_rad,
        }
    }

    /// Create a controller from the viewer configuration
    pub fn from_config(config: &ViewerConfig) -> Self {
        Self::new(config.move_speed, config.rotation_step_rad)
    }

    /// Translation speed in world units per second
    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    /// Rotation step in radians per update tick
    pub fn rotation_step_rad(&self) -> f32 {
        self.rotation_step_rad
    }

    /// Apply the currently held keys to the camera state.
    ///
    /// # Arguments
    ///
    /// * `state` - camera state to mutate
    /// * `input` - currently held camera keys
    /// * `delta_time` - elapsed frame time in seconds (scales translation only)
    pub fn update(&self, state: &mut CameraState, input: &InputState, delta_time: f32) {
        let speed = self.move_speed * delta_time;
        let step = self.rotation_step_rad;

        if input.is_held(CameraKey::Forward) {
            state.position += speed * state.front;
        }
        if input.is_held(CameraKey::Backward) {
            state.position -= speed * state.front;
        }
        if input.is_held(CameraKey::RotateLeft) {
            state.position = Self::rotate_about(state.position, Vec3::Y, step);
        }
        if input.is_held(CameraKey::RotateRight) {
            state.position = Self::rotate_about(state.position, Vec3::Y, -step);
        }
        if input.is_held(CameraKey::PitchUp) {
            Self::pitch(state, -step);
        }
        if input.is_held(CameraKey::PitchDown) {
            Self::pitch(state, step);
        }
    }

    /// Rotate a position vector about an axis through the origin
    fn rotate_about(position: Vec3, axis: Vec3, angle_rad: f32) -> Vec3 {
        Quat::from_axis_angle(axis, angle_rad) * position
    }

    /// Pitch the orbit: rotate `position` about the horizontal axis
    /// perpendicular to the camera-to-origin vector, `(z, 0, -x)`.
    ///
    /// When the camera sits on the world up axis that axis is the zero
    /// vector and the update is a no-op.
    fn pitch(state: &mut CameraState, angle_rad: f32) {
        let axis = Vec3::new(state.position.z, 0.0, -state.position.x);
        if axis.length_squared() <= f32::EPSILON {
            return;
        }
        state.position = Self::rotate_about(state.position, axis.normalize(), angle_rad);
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
