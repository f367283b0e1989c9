/// Mock Renderer for unit tests (no GPU required)
///
/// This mock renderer allows testing the Viewer frame sequence and the
/// Engine singleton without requiring a real graphics backend. It records
/// every call in order.

#[cfg(test)]
use glam::{Mat4, Vec4};

#[cfg(test)]
use crate::error::{Error, Result};
#[cfg(test)]
use crate::renderer::{Renderer, RendererStats, ShaderProgramDesc};

// ============================================================================
// Mock Renderer
// ============================================================================

#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockRenderer {
    /// Ordered call log ("create_shader_program", "begin_frame", ...)
    pub commands: Vec<String>,
    /// Name of the compiled shader program, if any
    pub shader_program: Option<String>,
    /// Uploaded mesh size in bytes
    pub uploaded_mesh_bytes: usize,
    /// Draws recorded this run, in call order
    pub draws: Vec<(Mat4, Vec4)>,
    /// Last view/projection pair set
    pub view_projection: Option<(Mat4, Mat4)>,
    /// Last clear color
    pub clear_color: Option<Vec4>,
    /// Last resize dimensions
    pub size: Option<(u32, u32)>,
    /// Frames completed (end_frame calls)
    pub frames_ended: u32,
    /// Draw calls in the current frame
    pub frame_draw_calls: u32,
    /// When set, create_shader_program fails with ShaderCompileFailed
    pub fail_shader_compile: bool,
}

#[cfg(test)]
impl MockRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mock whose shader compilation always fails
    pub fn failing_shader() -> Self {
        Self {
            fail_shader_compile: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
impl Renderer for MockRenderer {
    fn create_shader_program(&mut self, desc: &ShaderProgramDesc) -> Result<()> {
        self.commands.push("create_shader_program".to_string());
        if self.fail_shader_compile {
            return Err(Error::ShaderCompileFailed(format!(
                "mock compile failure for program '{}'",
                desc.name
            )));
        }
        self.shader_program = Some(desc.name.clone());
        Ok(())
    }

    fn upload_mesh(&mut self, vertex_bytes: &[u8]) -> Result<()> {
        self.commands.push("upload_mesh".to_string());
        self.uploaded_mesh_bytes = vertex_bytes.len();
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.commands.push("resize".to_string());
        self.size = Some((width, height));
    }

    fn begin_frame(&mut self, clear_color: Vec4) -> Result<()> {
        self.commands.push("begin_frame".to_string());
        self.clear_color = Some(clear_color);
        self.frame_draw_calls = 0;
        Ok(())
    }

    fn set_view_projection(&mut self, view: Mat4, projection: Mat4) -> Result<()> {
        self.commands.push("set_view_projection".to_string());
        self.view_projection = Some((view, projection));
        Ok(())
    }

    fn draw_voxel(&mut self, model: Mat4, color: Vec4) -> Result<()> {
        self.commands.push("draw_voxel".to_string());
        self.draws.push((model, color));
        self.frame_draw_calls += 1;
        Ok(())
    }

    fn end_frame(&mut self) -> Result<()> {
        self.commands.push("end_frame".to_string());
        self.frames_ended += 1;
        Ok(())
    }

    fn stats(&self) -> RendererStats {
        RendererStats {
            draw_calls: self.frame_draw_calls,
            triangles: self.frame_draw_calls * crate::resource::CubeMesh::triangle_count() as u32,
        }
    }
}

#[cfg(test)]
#[path = "mock_renderer_tests.rs"]
mod tests;
