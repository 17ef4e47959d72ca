//! Pipeline configuration, loadable from JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DrtError, Result};

/// Which transform pair the pipeline runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Engine {
    /// Dyadic O(n² log n) transform on power-of-two square images.
    #[default]
    Fast,
    /// Line-integration transform on any image shape.
    Slow,
}

fn default_expansion() -> usize {
    1
}

/// Settings for [`Pipeline`](crate::reconstruct::Pipeline).
///
/// ```json
/// { "engine": "fast", "expansion": 2, "rays": 64, "angles": 128, "fill_value": 0.0 }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReconConfig {
    #[serde(default)]
    pub engine: Engine,
    /// Expansion factor for the fast engine (power of two, 1 = none).
    #[serde(default = "default_expansion")]
    pub expansion: usize,
    /// Parallel rays of the conventional sinogram.
    #[serde(default)]
    pub rays: Option<usize>,
    /// Projection directions of the conventional sinogram.
    #[serde(default)]
    pub angles: Option<usize>,
    /// Value used for interpolation queries outside the sampled domain.
    #[serde(default)]
    pub fill_value: f64,
}

impl Default for ReconConfig {
    fn default() -> Self {
        Self {
            engine: Engine::Fast,
            expansion: default_expansion(),
            rays: None,
            angles: None,
            fill_value: 0.0,
        }
    }
}

impl ReconConfig {
    pub fn validate(&self) -> Result<()> {
        if self.expansion == 0 || !self.expansion.is_power_of_two() {
            return Err(DrtError::Config(format!(
                "expansion must be a power of two, got {}",
                self.expansion
            )));
        }
        if self.engine == Engine::Slow && self.expansion != 1 {
            return Err(DrtError::Config(
                "expansion only applies to the fast engine".into(),
            ));
        }
        if let Some(rays) = self.rays {
            if rays < 2 {
                return Err(DrtError::Config(format!("rays must be at least 2, got {rays}")));
            }
            // the slow engine filters its own sinogram, so rays feed the FFT
            if self.engine == Engine::Slow && !rays.is_power_of_two() {
                return Err(DrtError::Config(format!(
                    "slow engine needs a power-of-two ray count, got {rays}"
                )));
            }
        }
        if self.angles == Some(0) {
            return Err(DrtError::Config("angles must be at least 1".into()));
        }
        if !self.fill_value.is_finite() {
            return Err(DrtError::Config("fill_value must be finite".into()));
        }
        Ok(())
    }
}

/// Read and validate a JSON configuration file.
pub fn load_config(path: &Path) -> Result<ReconConfig> {
    let contents = fs::read_to_string(path)
        .map_err(|e| DrtError::Config(format!("failed to read {}: {e}", path.display())))?;
    let config: ReconConfig = serde_json::from_str(&contents)
        .map_err(|e| DrtError::Config(format!("failed to parse {}: {e}", path.display())))?;
    config.validate()?;
    Ok(config)
}
