/// Voxel — a unit cube at an arbitrary position with a fixed RGBA tint.
///
/// Immutable after load. Position and color are always constructed
/// together from one well-formed scene file line.

use glam::{Vec3, Vec4};

/// One voxel record: position and RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Voxel {
    position: Vec3,
    color: Vec4,
}

impl Voxel {
    /// Create a voxel from a position and an RGBA color
    pub fn new(position: Vec3, color: Vec4) -> Self {
        Self { position, color }
    }

    /// World-space position of the cube center
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// RGBA tint
    pub fn color(&self) -> Vec4 {
        self.color
    }
}
