/// Renderer module - the abstract rendering seam and related types

// Module declarations
pub mod renderer;
pub mod shader;
pub mod mock_renderer;

// Re-export everything from renderer.rs
pub use renderer::*;

// Re-export from other modules
pub use shader::*;

// Mock renderer for unit tests
#[cfg(test)]
pub use mock_renderer::MockRenderer;
