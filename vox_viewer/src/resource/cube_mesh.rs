/// CubeMesh — the static unit-cube vertex table.
///
/// One immutable asset uploaded once at startup and referenced (not
/// copied) by every voxel draw. Each cube face is split into 4 triangles
/// meeting at the face center: 24 triangles, 72 vertices, positions only.

use glam::Vec3;

/// Unit cube centered at the origin, half-extent 0.5.
///
/// Four triangles per face, fanned around the face center.
/// Grouped by face axis: Z faces, X faces, Y faces.
static CUBE_VERTICES: [Vec3; 72] = [
    // -Z / +Z faces
    Vec3::new(-0.5, -0.5, -0.5), Vec3::new(0.0, 0.0, -0.5), Vec3::new(0.5, -0.5, -0.5),
    Vec3::new(-0.5, -0.5, 0.5), Vec3::new(0.0, 0.0, 0.5), Vec3::new(0.5, -0.5, 0.5),
    Vec3::new(0.5, 0.5, -0.5), Vec3::new(0.0, 0.0, -0.5), Vec3::new(-0.5, 0.5, -0.5),
    Vec3::new(0.5, 0.5, 0.5), Vec3::new(0.0, 0.0, 0.5), Vec3::new(-0.5, 0.5, 0.5),
    Vec3::new(-0.5, 0.5, -0.5), Vec3::new(0.0, 0.0, -0.5), Vec3::new(-0.5, -0.5, -0.5),
    Vec3::new(-0.5, 0.5, 0.5), Vec3::new(0.0, 0.0, 0.5), Vec3::new(-0.5, -0.5, 0.5),
    Vec3::new(0.5, 0.5, -0.5), Vec3::new(0.0, 0.0, -0.5), Vec3::new(0.5, -0.5, -0.5),
    Vec3::new(0.5, 0.5, 0.5), Vec3::new(0.0, 0.0, 0.5), Vec3::new(0.5, -0.5, 0.5),
    // -X / +X faces
    Vec3::new(-0.5, 0.5, 0.5), Vec3::new(-0.5, 0.0, 0.0), Vec3::new(-0.5, 0.5, -0.5),
    Vec3::new(0.5, 0.5, 0.5), Vec3::new(0.5, 0.0, 0.0), Vec3::new(0.5, 0.5, -0.5),
    Vec3::new(-0.5, -0.5, 0.5), Vec3::new(-0.5, 0.0, 0.0), Vec3::new(-0.5, -0.5, -0.5),
    Vec3::new(0.5, -0.5, 0.5), Vec3::new(0.5, 0.0, 0.0), Vec3::new(0.5, -0.5, -0.5),
    Vec3::new(-0.5, 0.5, -0.5), Vec3::new(-0.5, 0.0, 0.0), Vec3::new(-0.5, -0.5, -0.5),
    Vec3::new(0.5, 0.5, -0.5), Vec3::new(0.5, 0.0, 0.0), Vec3::new(0.5, -0.5, -0.5),
    Vec3::new(-0.5, 0.5, 0.5), Vec3::new(-0.5, 0.0, 0.0), Vec3::new(-0.5, -0.5, 0.5),
    Vec3::new(0.5, 0.5, 0.5), Vec3::new(0.5, 0.0, 0.0), Vec3::new(0.5, -0.5, 0.5),
    // -Y / +Y faces
    Vec3::new(-0.5, 0.5, -0.5), Vec3::new(0.0, 0.5, 0.0), Vec3::new(0.5, 0.5, -0.5),
    Vec3::new(-0.5, -0.5, -0.5), Vec3::new(0.0, -0.5, 0.0), Vec3::new(0.5, -0.5, -0.5),
    Vec3::new(-0.5, 0.5, 0.5), Vec3::new(0.0, 0.5, 0.0), Vec3::new(0.5, 0.5, 0.5),
    Vec3::new(-0.5, -0.5, 0.5), Vec3::new(0.0, -0.5, 0.0), Vec3::new(0.5, -0.5, 0.5),
    Vec3::new(-0.5, 0.5, 0.5), Vec3::new(0.0, 0.5, 0.0), Vec3::new(-0.5, 0.5, -0.5),
    Vec3::new(-0.5, -0.5, 0.5), Vec3::new(0.0, -0.5, 0.0), Vec3::new(-0.5, -0.5, -0.5),
    Vec3::new(0.5, 0.5, -0.5), Vec3::new(0.0, 0.5, 0.0), Vec3::new(0.5, 0.5, 0.5),
    Vec3::new(0.5, -0.5, -0.5), Vec3::new(0.0, -0.5, 0.0), Vec3::new(0.5, -0.5, 0.5),
];

/// The shared unit-cube mesh asset.
pub struct CubeMesh;

impl CubeMesh {
    /// Vertex positions, 3 consecutive vertices per triangle
    pub fn vertices() -> &'static [Vec3] {
        &CUBE_VERTICES
    }

    /// Vertex data as raw bytes for upload (tightly packed vec3 floats)
    pub fn vertex_bytes() -> &'static [u8] {
        bytemuck::cast_slice(&CUBE_VERTICES)
    }

    /// Number of vertices
    pub fn vertex_count() -> usize {
        CUBE_VERTICES.len()
    }

    /// Number of triangles
    pub fn triangle_count() -> usize {
        CUBE_VERTICES.len() / 3
    }
}

#[cfg(test)]
#[path = "cube_mesh_tests.rs"]
mod tests;
