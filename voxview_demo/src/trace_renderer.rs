//! Trace renderer backend
//!
//! A headless Renderer implementation that validates the call sequence and
//! logs per-frame statistics. It stands in for a GPU backend so the demo
//! runs anywhere; a real backend would plug into the same seam.

use glam::{Mat4, Vec4};
use vox_viewer::voxview::render::{Renderer, RendererStats, ShaderProgramDesc};
use vox_viewer::voxview::resource::CubeMesh;
use vox_viewer::voxview::{Error, Result};
use vox_viewer::{viewer_debug, viewer_info};

/// How often per-frame statistics are logged (in frames)
const STATS_LOG_INTERVAL: u64 = 120;

/// Headless renderer that traces the frame stream to the log.
pub struct TraceRenderer {
    shader_ready: bool,
    mesh_vertex_count: usize,
    in_frame: bool,
    frame_index: u64,
    frame_draw_calls: u32,
}

impl TraceRenderer {
    pub fn new() -> Self {
        Self {
            shader_ready: false,
            mesh_vertex_count: 0,
            in_frame: false,
            frame_index: 0,
            frame_draw_calls: 0,
        }
    }
}

impl Default for TraceRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TraceRenderer {
    fn create_shader_program(&mut self, desc: &ShaderProgramDesc) -> Result<()> {
        if desc.vertex_source.is_empty() || desc.fragment_source.is_empty() {
            return Err(Error::ShaderCompileFailed(format!(
                "Program '{}' has an empty shader stage",
                desc.name
            )));
        }
        self.shader_ready = true;
        viewer_info!(
            "voxview_demo::TraceRenderer",
            "Shader program '{}' ready ({} + {} bytes of GLSL)",
            desc.name,
            desc.vertex_source.len(),
            desc.fragment_source.len()
        );
        Ok(())
    }

    fn upload_mesh(&mut self, vertex_bytes: &[u8]) -> Result<()> {
        // Tightly packed vec3 positions, 12 bytes per vertex
        if vertex_bytes.len() % 12 != 0 {
            return Err(Error::BackendError(format!(
                "Mesh upload of {} bytes is not a whole number of vertices",
                vertex_bytes.len()
            )));
        }
        self.mesh_vertex_count = vertex_bytes.len() / 12;
        viewer_info!(
            "voxview_demo::TraceRenderer",
            "Mesh uploaded: {} vertices",
            self.mesh_vertex_count
        );
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) {
        viewer_debug!(
            "voxview_demo::TraceRenderer",
            "Resized to {}x{}",
            width,
            height
        );
    }

    fn begin_frame(&mut self, _clear_color: Vec4) -> Result<()> {
        if !self.shader_ready {
            return Err(Error::BackendError(
                "begin_frame before shader setup".to_string(),
            ));
        }
        if self.in_frame {
            return Err(Error::BackendError(
                "begin_frame while a frame is already open".to_string(),
            ));
        }
        self.in_frame = true;
        self.frame_draw_calls = 0;
        Ok(())
    }

    fn set_view_projection(&mut self, _view: Mat4, _projection: Mat4) -> Result<()> {
        if !self.in_frame {
            return Err(Error::BackendError(
                "set_view_projection outside a frame".to_string(),
            ));
        }
        Ok(())
    }

    fn draw_voxel(&mut self, _model: Mat4, _color: Vec4) -> Result<()> {
        if !self.in_frame {
            return Err(Error::BackendError("draw_voxel outside a frame".to_string()));
        }
        self.frame_draw_calls += 1;
        Ok(())
    }

    fn end_frame(&mut self) -> Result<()> {
        if !self.in_frame {
            return Err(Error::BackendError("end_frame without begin_frame".to_string()));
        }
        self.in_frame = false;
        self.frame_index += 1;
        if self.frame_index % STATS_LOG_INTERVAL == 0 {
            let stats = self.stats();
            viewer_debug!(
                "voxview_demo::TraceRenderer",
                "Frame {}: {} draw calls, {} triangles",
                self.frame_index,
                stats.draw_calls,
                stats.triangles
            );
        }
        Ok(())
    }

    fn stats(&self) -> RendererStats {
        RendererStats {
            draw_calls: self.frame_draw_calls,
            triangles: self.frame_draw_calls * CubeMesh::triangle_count() as u32,
        }
    }
}
