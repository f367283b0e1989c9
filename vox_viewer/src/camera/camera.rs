/// CameraState — orbit camera state around the world origin.
///
/// Holds the position/front/up vectors. The rotation keys rotate `position`
/// around the origin; `front` and `up` are never touched by rotations, so
/// the view matrix always looks from `position` toward the origin.

use glam::{Mat4, Vec3};

/// Orbit camera state.
///
/// The camera orbits the world origin: the view matrix is always computed
/// as "look from `position` toward the origin with `up`". `front` is only
/// used by the forward/backward translation keys.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Camera position in world space
    pub position: Vec3,
    /// Translation axis for the forward/backward keys (unit length)
    pub front: Vec3,
    /// World up vector
    pub up: Vec3,
}

impl Default for CameraState {
    /// Starting state of the original tool: 20 units back on +Z,
    /// looking down -Z, Y up.
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 20.0),
            front: Vec3::new(0.0, 0.0, -1.0),
            up: Vec3::Y,
        }
    }
}

impl CameraState {
    /// Create a camera state with explicit vectors
    pub fn new(position: Vec3, front: Vec3, up: Vec3) -> Self {
        Self { position, front, up }
    }

    /// View matrix: look from `position` toward the world origin with `up`.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, Vec3::ZERO, self.up)
    }

    /// Distance from the camera to the orbit center (world origin)
    pub fn orbit_radius(&self) -> f32 {
        self.position.length()
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
