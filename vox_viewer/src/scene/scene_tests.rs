use glam::{Vec3, Vec4};
use super::*;
use crate::scene::Voxel;

fn sample_voxels() -> Vec<Voxel> {
    vec![
        Voxel::new(Vec3::new(0.0, 0.0, 0.0), Vec4::new(1.0, 0.0, 0.0, 1.0)),
        Voxel::new(Vec3::new(1.0, 0.0, 0.0), Vec4::new(0.0, 1.0, 0.0, 1.0)),
        Voxel::new(Vec3::new(2.0, 0.0, 0.0), Vec4::new(0.0, 0.0, 1.0, 1.0)),
    ]
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_scene_new() {
    let scene = Scene::new(sample_voxels());
    assert_eq!(scene.len(), 3);
    assert!(!scene.is_empty());
}

#[test]
fn test_scene_empty() {
    let scene = Scene::empty();
    assert_eq!(scene.len(), 0);
    assert!(scene.is_empty());
    assert!(scene.voxel(0).is_none());
}

// ============================================================================
// Access & ordering
// ============================================================================

#[test]
fn test_voxel_by_index() {
    let scene = Scene::new(sample_voxels());

    let voxel = scene.voxel(1).unwrap();
    assert_eq!(voxel.position(), Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(voxel.color(), Vec4::new(0.0, 1.0, 0.0, 1.0));

    assert!(scene.voxel(3).is_none());
}

#[test]
fn test_iteration_preserves_insertion_order() {
    let scene = Scene::new(sample_voxels());

    let positions: Vec<Vec3> = scene.voxels().map(|v| v.position()).collect();
    assert_eq!(
        positions,
        vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
        ]
    );
}

#[test]
fn test_scene_clone_is_independent_copy() {
    let scene = Scene::new(sample_voxels());
    let cloned = scene.clone();

    assert_eq!(cloned.len(), scene.len());
    assert_eq!(cloned.voxel(0), scene.voxel(0));
}
