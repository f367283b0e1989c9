//! Scene module
//!
//! Provides the voxel record, the immutable scene container, and the
//! CSV scene file loader.

mod loader;
mod scene;
mod voxel;

pub use loader::{MalformedLinePolicy, SceneLoader};
pub use scene::Scene;
pub use voxel::Voxel;
