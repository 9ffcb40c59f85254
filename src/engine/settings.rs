use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::error::{BlendError, BlendResult};

/// Engine-wide knobs for a blend call.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BlendSettings {
    /// How pixel work is scheduled.
    pub threading: BlendThreading,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Threading and banding controls for per-pixel kernels.
pub struct BlendThreading {
    /// Run kernels over row bands on a rayon pool when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count (parallel mode only).
    pub threads: Option<usize>,
    /// Rows handed to one task.
    pub rows_per_task: usize,
}

impl Default for BlendThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            threads: None,
            rows_per_task: 64,
        }
    }
}

impl BlendSettings {
    /// Settings with parallel banding enabled on the global rayon pool.
    pub fn parallel() -> Self {
        Self {
            threading: BlendThreading {
                parallel: true,
                ..BlendThreading::default()
            },
        }
    }

    /// Parse settings from a JSON reader. Missing fields take their defaults.
    pub fn from_reader<R: std::io::Read>(r: R) -> BlendResult<Self> {
        let settings: Self = serde_json::from_reader(r)
            .map_err(|e| BlendError::validation(format!("parse blend settings JSON: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parse settings from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> BlendResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            BlendError::validation(format!("open blend settings '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject settings that cannot drive a blend.
    pub fn validate(&self) -> BlendResult<()> {
        if self.threading.threads == Some(0) {
            return Err(BlendError::validation(
                "blend threading 'threads' must be >= 1 when set",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/settings.rs"]
mod tests;
