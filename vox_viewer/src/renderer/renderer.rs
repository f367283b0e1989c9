/// Renderer trait - abstract rendering capability consumed by the Viewer
///
/// The core never talks to a graphics API directly. Backends implement
/// this trait ("compile/link shaders, upload vertex data, issue draw
/// calls") and are registered with the Engine singleton by the host
/// application.

use glam::{Mat4, Vec4};
use crate::error::Result;
use crate::renderer::ShaderProgramDesc;

// ============================================================================
// Common types
// ============================================================================

/// Renderer statistics
#[derive(Debug, Clone, Copy, Default)]
pub struct RendererStats {
    /// Number of draw calls this frame
    pub draw_calls: u32,
    /// Number of triangles drawn this frame
    pub triangles: u32,
}

// ============================================================================
// Renderer trait
// ============================================================================

/// Abstract rendering backend.
///
/// The Viewer drives one frame as: `begin_frame` → `set_view_projection` →
/// one `draw_voxel` per scene voxel in insertion order → `end_frame`.
/// `create_shader_program` and `upload_mesh` are called once at startup.
pub trait Renderer: Send + Sync {
    /// Compile and link the shader program.
    ///
    /// # Arguments
    ///
    /// * `desc` - Shader program descriptor (vertex + fragment source)
    ///
    /// # Errors
    ///
    /// `ShaderCompileFailed` / `ShaderLinkFailed`. Startup treats either
    /// as fatal.
    fn create_shader_program(&mut self, desc: &ShaderProgramDesc) -> Result<()>;

    /// Upload the shared cube mesh vertex data.
    ///
    /// # Arguments
    ///
    /// * `vertex_bytes` - tightly packed vec3 float positions
    fn upload_mesh(&mut self, vertex_bytes: &[u8]) -> Result<()>;

    /// Notify the backend that the window has been resized
    ///
    /// # Arguments
    ///
    /// * `width` - New window width
    /// * `height` - New window height
    fn resize(&mut self, width: u32, height: u32);

    /// Begin a new frame, clearing to the given color
    fn begin_frame(&mut self, clear_color: Vec4) -> Result<()>;

    /// Set the view and projection matrices for this frame
    fn set_view_projection(&mut self, view: Mat4, projection: Mat4) -> Result<()>;

    /// Draw one voxel: the shared cube mesh under `model`, tinted `color`
    fn draw_voxel(&mut self, model: Mat4, color: Vec4) -> Result<()>;

    /// End the current frame and present
    fn end_frame(&mut self) -> Result<()>;

    /// Get statistics about the current frame
    fn stats(&self) -> RendererStats;
}
