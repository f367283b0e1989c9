/// Scene — ordered, immutable collection of voxels.
///
/// Insertion order equals file line order equals render order.

use super::voxel::Voxel;

/// A loaded voxel scene.
///
/// Read-only after load; the render pass iterates it every frame without
/// copying.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    voxels: Vec<Voxel>,
}

impl Scene {
    /// Create a scene from an ordered voxel list
    pub fn new(voxels: Vec<Voxel>) -> Self {
        Self { voxels }
    }

    /// Create an empty scene (used when the scene file is unreadable)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of voxels
    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    /// Whether the scene has no voxels
    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    /// Get a voxel by index (file line order)
    pub fn voxel(&self, index: usize) -> Option<&Voxel> {
        self.voxels.get(index)
    }

    /// Iterate voxels in render order
    pub fn voxels(&self) -> impl Iterator<Item = &Voxel> {
        self.voxels.iter()
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
