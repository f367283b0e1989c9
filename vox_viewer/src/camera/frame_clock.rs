/// FrameClock — monotonic delta-time source for the frame loop.
///
/// Replaces the original tool's global `deltaTime`/`lastFrame` variables
/// with an explicit struct owned by the Viewer and ticked once per frame.

use std::time::Instant;

/// Monotonic per-frame clock.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last_frame: Instant,
}

impl FrameClock {
    /// Create a clock anchored at the current instant
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
        }
    }

    /// Elapsed seconds since the previous tick (or since creation for the
    /// first tick). Advances the clock.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta_time = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        delta_time
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "frame_clock_tests.rs"]
mod tests;
