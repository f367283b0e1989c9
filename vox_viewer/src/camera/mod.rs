//! Camera module
//!
//! Provides the orbit camera state, the key-driven camera controller,
//! and the frame clock that supplies delta time.

mod camera;
mod controller;
mod frame_clock;

pub use camera::CameraState;
pub use controller::CameraController;
pub use frame_clock::FrameClock;
