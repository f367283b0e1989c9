/// SceneLoader — parses the voxel scene file into a Scene.
///
/// One voxel per non-empty line, exactly 7 comma-separated floats in fixed
/// order `x,y,z,r,g,b,a`. A voxel is built atomically from its line, so a
/// malformed line can never desynchronize positions from colors: the whole
/// line is either rejected (Abort) or dropped (Skip).

use glam::{Vec3, Vec4};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use crate::error::{Error, Result};
use crate::viewer_info;
use crate::viewer_warn;
use super::scene::Scene;
use super::voxel::Voxel;

/// Number of comma-separated fields per scene file line
const FIELDS_PER_LINE: usize = 7;

/// What the loader does when a line fails the 7-float contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedLinePolicy {
    /// Abort the whole load with a MalformedLine error (the original
    /// tool's behavior)
    #[default]
    Abort,
    /// Drop the whole line, log a warning, and continue
    Skip,
}

/// Scene file loader.
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneLoader {
    policy: MalformedLinePolicy,
}

impl SceneLoader {
    /// Create a loader with the given malformed-line policy
    pub fn new(policy: MalformedLinePolicy) -> Self {
        Self { policy }
    }

    /// The loader's malformed-line policy
    pub fn policy(&self) -> MalformedLinePolicy {
        self.policy
    }

    /// Load a scene file.
    ///
    /// Empty and whitespace-only lines are skipped. Voxel order in the
    /// returned scene equals file line order.
    ///
    /// # Arguments
    ///
    /// * `path` - path of the scene file
    ///
    /// # Errors
    ///
    /// * `FileUnreadable` - the file cannot be opened or read. The caller
    ///   may treat this as non-fatal and render an empty scene.
    /// * `MalformedLine` - a line violates the 7-float contract and the
    ///   policy is `Abort`.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Scene> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            Error::FileUnreadable(format!("{}: {}", path.display(), e))
        })?;
        let reader = BufReader::new(file);

        let mut voxels = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            let line = line.map_err(|e| {
                Error::FileUnreadable(format!("{} (line {}): {}", path.display(), line_number, e))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            match Self::parse_line(&line, line_number) {
                Ok(voxel) => voxels.push(voxel),
                Err(err) => match self.policy {
                    MalformedLinePolicy::Abort => return Err(err),
                    MalformedLinePolicy::Skip => {
                        viewer_warn!("voxview::SceneLoader", "{}", err);
                    }
                },
            }
        }

        viewer_info!(
            "voxview::SceneLoader",
            "Loaded {} voxels from {}",
            voxels.len(),
            path.display()
        );
        Ok(Scene::new(voxels))
    }

    /// Parse one scene file line into a voxel.
    ///
    /// # Arguments
    ///
    /// * `line` - raw line text (known non-empty)
    /// * `line_number` - 1-based line number for error reporting
    fn parse_line(line: &str, line_number: usize) -> Result<Voxel> {
        let tokens: Vec<&str> = line.split(',').collect();
        if tokens.len() != FIELDS_PER_LINE {
            return Err(Error::MalformedLine {
                line: line_number,
                reason: format!(
                    "expected {} comma-separated fields, found {}",
                    FIELDS_PER_LINE,
                    tokens.len()
                ),
            });
        }

        let mut fields = [0.0f32; FIELDS_PER_LINE];
        for (i, token) in tokens.iter().enumerate() {
            let token = token.trim();
            fields[i] = token.parse::<f32>().map_err(|_| Error::MalformedLine {
                line: line_number,
                reason: format!("field {} is not a number: '{}'", i + 1, token),
            })?;
        }

        Ok(Voxel::new(
            Vec3::new(fields[0], fields[1], fields[2]),
            Vec4::new(fields[3], fields[4], fields[5], fields[6]),
        ))
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
