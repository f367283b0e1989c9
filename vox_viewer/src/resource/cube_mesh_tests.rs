use glam::Vec3;
use super::*;

// ============================================================================
// Shape counts
// ============================================================================

#[test]
fn test_vertex_and_triangle_counts() {
    assert_eq!(CubeMesh::vertex_count(), 72);
    assert_eq!(CubeMesh::triangle_count(), 24);
    assert_eq!(CubeMesh::vertices().len(), 72);
}

#[test]
fn test_vertex_bytes_are_tightly_packed_vec3() {
    // 72 vertices * 3 floats * 4 bytes
    assert_eq!(CubeMesh::vertex_bytes().len(), 864);
}

// ============================================================================
// Geometry
// ============================================================================

#[test]
fn test_vertices_stay_within_half_extent() {
    for vertex in CubeMesh::vertices() {
        assert!(vertex.x.abs() <= 0.5);
        assert!(vertex.y.abs() <= 0.5);
        assert!(vertex.z.abs() <= 0.5);
    }
}

#[test]
fn test_corner_vertices_lie_on_cube_surface() {
    // First and last vertex of every triangle is a cube corner
    for triangle in CubeMesh::vertices().chunks_exact(3) {
        for corner in [triangle[0], triangle[2]] {
            assert_eq!(corner.x.abs(), 0.5);
            assert_eq!(corner.y.abs(), 0.5);
            assert_eq!(corner.z.abs(), 0.5);
        }
    }
}

#[test]
fn test_middle_vertex_is_a_face_center() {
    // The fan apex sits at the center of its face: one axis at +-0.5,
    // the other two at zero
    for triangle in CubeMesh::vertices().chunks_exact(3) {
        let center = triangle[1];
        let on_face = [center.x, center.y, center.z]
            .iter()
            .filter(|c| c.abs() == 0.5)
            .count();
        let at_zero = [center.x, center.y, center.z]
            .iter()
            .filter(|c| **c == 0.0)
            .count();
        assert_eq!(on_face, 1);
        assert_eq!(at_zero, 2);
    }
}

#[test]
fn test_no_degenerate_triangles() {
    for triangle in CubeMesh::vertices().chunks_exact(3) {
        let edge_a = triangle[1] - triangle[0];
        let edge_b = triangle[2] - triangle[0];
        assert!(edge_a.cross(edge_b).length() > 1e-6);
    }
}

#[test]
fn test_each_face_carries_four_triangles() {
    // Count triangles per face by their fan apex
    let mut per_face = std::collections::HashMap::new();
    for triangle in CubeMesh::vertices().chunks_exact(3) {
        let center = triangle[1];
        *per_face.entry(format!("{:?}", center)).or_insert(0u32) += 1;
    }

    assert_eq!(per_face.len(), 6);
    for (_, count) in per_face {
        assert_eq!(count, 4);
    }
}

#[test]
fn test_mesh_is_centered_at_origin() {
    let sum: Vec3 = CubeMesh::vertices().iter().copied().sum();
    assert!(sum.length() < 1e-6);
}
