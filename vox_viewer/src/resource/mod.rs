//! Resource module
//!
//! Static immutable assets shared by every draw call.

mod cube_mesh;

pub use cube_mesh::CubeMesh;
