//! VoxView demo application
//!
//! Opens a window, loads the scene file given on the command line (or
//! `voxeldata.txt` by default) and drives the viewer frame loop with the
//! trace renderer backend.
//!
//! Controls: W/S move, A/D orbit, Q/Z pitch, Escape quits.

mod trace_renderer;

use std::process::ExitCode;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use trace_renderer::TraceRenderer;
use vox_viewer::voxview::input::InputState;
use vox_viewer::voxview::{Engine, FrameOutcome, Viewer, ViewerConfig};
use vox_viewer::{viewer_error, viewer_info};

/// Application state driven by the winit event loop.
struct DemoApp {
    config: ViewerConfig,
    window: Option<Window>,
    viewer: Option<Viewer>,
    input: InputState,
    failed: bool,
}

impl DemoApp {
    fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            window: None,
            viewer: None,
            input: InputState::new(),
            failed: false,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, message: String) {
        viewer_error!("voxview_demo", "{}", message);
        self.failed = true;
        event_loop.exit();
    }
}

impl ApplicationHandler for DemoApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(self.config.window_title.clone())
            .with_inner_size(LogicalSize::new(
                self.config.window_width,
                self.config.window_height,
            ));
        let window = match event_loop.create_window(attrs) {
            Ok(window) => window,
            Err(err) => {
                return self.fail(event_loop, format!("Window creation failed: {}", err));
            }
        };

        let renderer = match Engine::renderer() {
            Ok(renderer) => renderer,
            Err(err) => {
                return self.fail(event_loop, format!("Renderer unavailable: {}", err));
            }
        };

        match Viewer::new(self.config.clone(), renderer) {
            Ok(viewer) => {
                self.viewer = Some(viewer);
                self.window = Some(window);
            }
            Err(err) => self.fail(event_loop, format!("Viewer setup failed: {}", err)),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(viewer) = self.viewer.as_mut() {
                    if let Err(err) = viewer.resize(size.width, size.height) {
                        self.fail(event_loop, format!("Resize failed: {}", err));
                    }
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.input.apply_key(code, event.state.is_pressed());
                }
            }
            WindowEvent::RedrawRequested => {
                let Some(viewer) = self.viewer.as_mut() else {
                    return;
                };
                match viewer.frame(&self.input) {
                    Ok(FrameOutcome::Continue) => {}
                    Ok(FrameOutcome::CloseRequested) => {
                        viewer_info!("voxview_demo", "Escape pressed, exiting");
                        event_loop.exit();
                    }
                    Err(err) => self.fail(event_loop, format!("Frame failed: {}", err)),
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // Continuous rendering: request the next frame as soon as the
        // current one is done
        if let Some(window) = self.window.as_ref() {
            window.request_redraw();
        }
    }
}

fn run() -> Result<(), String> {
    let config = ViewerConfig::from_args(std::env::args().skip(1))
        .map_err(|err| format!("Invalid arguments: {}", err))?;

    Engine::initialize().map_err(|err| format!("Engine initialization failed: {}", err))?;
    Engine::create_renderer(TraceRenderer::new())
        .map_err(|err| format!("Renderer creation failed: {}", err))?;

    viewer_info!(
        "voxview_demo",
        "Starting viewer for scene '{}'",
        config.scene_path.display()
    );

    let event_loop = EventLoop::new().map_err(|err| format!("Event loop failed: {}", err))?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = DemoApp::new(config);
    let result = event_loop.run_app(&mut app);

    Engine::shutdown();

    result.map_err(|err| format!("Event loop error: {}", err))?;
    if app.failed {
        return Err("Viewer terminated after an error".to_string());
    }
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            viewer_error!("voxview_demo", "{}", message);
            ExitCode::FAILURE
        }
    }
}
