//! Viewer configuration
//!
//! Externalizes the constants the original tool hardcoded: the scene file
//! path, the camera rotation step, and the movement speed, plus the window
//! parameters the host application needs.

use crate::error::{Error, Result};
use crate::scene::MalformedLinePolicy;
use std::path::PathBuf;

/// Viewer configuration
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Path of the voxel scene file (`x,y,z,r,g,b,a` per line)
    pub scene_path: PathBuf,

    /// Angular step in radians applied per update tick by the rotation keys
    pub rotation_step_rad: f32,

    /// Translation speed in world units per second
    pub move_speed: f32,

    /// What the scene loader does with a malformed line
    pub malformed_line_policy: MalformedLinePolicy,

    /// Window title
    pub window_title: String,

    /// Initial window width in pixels
    pub window_width: u32,

    /// Initial window height in pixels
    pub window_height: u32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            scene_path: PathBuf::from("voxeldata.txt"),
            rotation_step_rad: 0.001,
            move_speed: 2.5,
            malformed_line_policy: MalformedLinePolicy::Abort,
            window_title: "VoxelRender".to_string(),
            window_width: 800,
            window_height: 600,
        }
    }
}

impl ViewerConfig {
    /// Build a configuration from command-line arguments.
    ///
    /// The first positional argument is the scene file path. Recognized flags:
    ///
    /// * `--move-speed <f32>` - translation speed in units per second
    /// * `--rotation-step <f32>` - rotation step in radians per tick
    /// * `--skip-malformed` - skip malformed scene lines instead of aborting
    /// * `--width <u32>` / `--height <u32>` - initial window size
    /// * `--title <string>` - window title
    ///
    /// # Arguments
    ///
    /// * `args` - argument iterator WITHOUT the program name (e.g. `env::args().skip(1)`)
    ///
    /// # Errors
    ///
    /// Returns `InitializationFailed` on an unknown flag, a missing flag
    /// value, an unparsable value, or a second positional argument.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut scene_path_set = false;
        let mut iter = args.into_iter();

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--move-speed" => {
                    config.move_speed = Self::parse_flag_value(&arg, iter.next())?;
                }
                "--rotation-step" => {
                    config.rotation_step_rad = Self::parse_flag_value(&arg, iter.next())?;
                }
                "--skip-malformed" => {
                    config.malformed_line_policy = MalformedLinePolicy::Skip;
                }
                "--width" => {
                    config.window_width = Self::parse_flag_value(&arg, iter.next())?;
                }
                "--height" => {
                    config.window_height = Self::parse_flag_value(&arg, iter.next())?;
                }
                "--title" => {
                    config.window_title = iter.next().ok_or_else(|| {
                        Error::InitializationFailed("--title requires a value".to_string())
                    })?;
                }
                other if other.starts_with("--") => {
                    return Err(Error::InitializationFailed(format!(
                        "Unknown argument: {}",
                        other
                    )));
                }
                positional => {
                    if scene_path_set {
                        return Err(Error::InitializationFailed(format!(
                            "Unexpected extra argument: {}",
                            positional
                        )));
                    }
                    config.scene_path = PathBuf::from(positional);
                    scene_path_set = true;
                }
            }
        }

        Ok(config)
    }

    /// Parse the value following a flag
    fn parse_flag_value<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T> {
        let value = value.ok_or_else(|| {
            Error::InitializationFailed(format!("{} requires a value", flag))
        })?;
        value.parse::<T>().map_err(|_| {
            Error::InitializationFailed(format!("Invalid value for {}: '{}'", flag, value))
        })
    }

    /// Window aspect ratio (width / height)
    pub fn aspect_ratio(&self) -> f32 {
        self.window_width as f32 / self.window_height as f32
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
