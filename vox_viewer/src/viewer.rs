/// Viewer — per-frame orchestration of the voxel viewer.
///
/// Owns the scene, the camera state, the controller, and the frame clock,
/// and drives the renderer through one strict per-frame sequence:
/// input → camera update → render pass.

use glam::{Mat4, Vec4};
use std::sync::{Arc, Mutex};
use crate::camera::{CameraController, CameraState, FrameClock};
use crate::config::ViewerConfig;
use crate::error::{Error, Result};
use crate::input::InputState;
use crate::renderer::{Renderer, ShaderProgramDesc};
use crate::resource::CubeMesh;
use crate::scene::{Scene, SceneLoader};
use crate::{viewer_info, viewer_warn};

/// Vertical field of view of the perspective projection
const FOV_Y_RAD: f32 = std::f32::consts::PI / 3.0; // 60 degrees

/// Near clip plane distance
const Z_NEAR: f32 = 0.1;

/// Far clip plane distance
const Z_FAR: f32 = 100.0;

/// Frame clear color (opaque black)
const CLEAR_COLOR: Vec4 = Vec4::new(0.0, 0.0, 0.0, 1.0);

/// Outcome of one frame tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Keep running
    Continue,
    /// Escape was pressed; the host loop should exit
    CloseRequested,
}

/// The viewer frame orchestrator.
///
/// Single-threaded by design: the host calls `frame` once per tick from
/// its event loop. The scene is read-only after construction; the camera
/// state is mutated only through the controller.
pub struct Viewer {
    config: ViewerConfig,
    scene: Scene,
    camera: CameraState,
    controller: CameraController,
    clock: FrameClock,
    aspect_ratio: f32,
    renderer: Arc<Mutex<dyn Renderer>>,
}

impl Viewer {
    /// Set up the viewer: compile the shader program, upload the cube
    /// mesh, and load the scene.
    ///
    /// Shader failures are fatal. An unreadable scene file is not: the
    /// viewer logs a warning and renders an empty scene. A malformed
    /// scene line is fatal under the default `Abort` policy.
    ///
    /// # Arguments
    ///
    /// * `config` - viewer configuration
    /// * `renderer` - shared renderer handle (typically from `Engine::renderer()`)
    pub fn new(config: ViewerConfig, renderer: Arc<Mutex<dyn Renderer>>) -> Result<Self> {
        {
            let mut renderer_guard = renderer
                .lock()
                .map_err(|_| Error::BackendError("Renderer lock poisoned".to_string()))?;
            renderer_guard.create_shader_program(&ShaderProgramDesc::voxel_default())?;
            renderer_guard.upload_mesh(CubeMesh::vertex_bytes())?;
        }

        let loader = SceneLoader::new(config.malformed_line_policy);
        let scene = match loader.load(&config.scene_path) {
            Ok(scene) => scene,
            Err(Error::FileUnreadable(msg)) => {
                viewer_warn!(
                    "voxview::Viewer",
                    "Scene file unreadable, rendering empty scene: {}",
                    msg
                );
                Scene::empty()
            }
            Err(err) => return Err(err),
        };

        viewer_info!(
            "voxview::Viewer",
            "Viewer ready: {} voxels, {} triangles per voxel",
            scene.len(),
            CubeMesh::triangle_count()
        );

        Ok(Self {
            controller: CameraController::from_config(&config),
            camera: CameraState::default(),
            clock: FrameClock::new(),
            aspect_ratio: config.aspect_ratio(),
            config,
            scene,
            renderer,
        })
    }

    /// Run one frame tick: close check, clock tick, camera update, render.
    ///
    /// # Arguments
    ///
    /// * `input` - current keyboard input state
    pub fn frame(&mut self, input: &InputState) -> Result<FrameOutcome> {
        if input.close_requested() {
            return Ok(FrameOutcome::CloseRequested);
        }

        let delta_time = self.clock.tick();
        self.controller.update(&mut self.camera, input, delta_time);
        self.render()?;

        Ok(FrameOutcome::Continue)
    }

    /// Issue the render pass: clear, set matrices, one draw per voxel in
    /// insertion order, present.
    fn render(&self) -> Result<()> {
        let mut renderer = self
            .renderer
            .lock()
            .map_err(|_| Error::BackendError("Renderer lock poisoned".to_string()))?;

        renderer.begin_frame(CLEAR_COLOR)?;
        renderer.set_view_projection(self.camera.view_matrix(), self.projection_matrix())?;

        for voxel in self.scene.voxels() {
            renderer.draw_voxel(Mat4::from_translation(voxel.position()), voxel.color())?;
        }

        renderer.end_frame()
    }

    /// Perspective projection for the current aspect ratio
    fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(FOV_Y_RAD, self.aspect_ratio, Z_NEAR, Z_FAR)
    }

    /// Handle a window resize: update the projection aspect and notify
    /// the renderer. Zero-sized dimensions (minimized window) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.aspect_ratio = width as f32 / height as f32;
        let mut renderer = self
            .renderer
            .lock()
            .map_err(|_| Error::BackendError("Renderer lock poisoned".to_string()))?;
        renderer.resize(width, height);
        Ok(())
    }

    /// The loaded scene
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Current camera state
    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    /// The viewer configuration
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }
}

#[cfg(test)]
#[path = "viewer_tests.rs"]
mod tests;
