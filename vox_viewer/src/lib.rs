/*!
# VoxView

Core types for the VoxView voxel-cube viewer.

This crate provides the platform-agnostic logic of the viewer: the scene
loader, the orbit camera controller, the frame clock, keyboard input state,
configuration, and the `Viewer` frame orchestrator. Rendering goes through
the `Renderer` trait; window/graphics backends live in host applications
(e.g. `voxview_demo`) and plug into that seam.

## Architecture

- **SceneLoader**: parses the `x,y,z,r,g,b,a` CSV scene file into a Scene
- **CameraController**: orbit camera around the world origin, key-driven
- **Renderer**: abstract "compile shaders, upload mesh, draw" capability
- **Viewer**: per-frame sequence (input → camera update → render pass)

Backend implementations provide concrete types that implement `Renderer`.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod config;
pub mod input;
pub mod camera;
pub mod renderer;
pub mod resource;
pub mod scene;
pub mod viewer;

// Main voxview namespace module
pub mod voxview {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton
    pub use crate::engine::Engine;

    // Configuration
    pub use crate::config::ViewerConfig;

    // Frame orchestrator
    pub use crate::viewer::{FrameOutcome, Viewer};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{DefaultLogger, LogEntry, LogSeverity, Logger};
        // Note: viewer_* macros are NOT re-exported here - they are exported at crate root
    }

    // Render sub-module with all rendering types
    pub mod render {
        pub use crate::renderer::*;
    }

    // Resource sub-module
    pub mod resource {
        pub use crate::resource::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Input sub-module
    pub mod input {
        pub use crate::input::*;
    }
}

// Re-export math library at crate root
pub use glam;
