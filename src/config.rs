//! Export configuration.
//!
//! Defaults reproduce the stock fastLM toy model: one block, `d_model = 4`,
//! written to `models/model.bin`.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ExportError, Result};
use crate::weights::format;

/// Default output path, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "models/model.bin";

/// Parameters for generating a model file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Number of transformer blocks recorded in the header.
    pub layers: i32,

    /// Hidden dimension of each projection matrix.
    pub d_model: i32,

    /// Destination file. The parent directory must already exist.
    pub output: PathBuf,

    /// Fixed RNG seed for reproducible weights. OS entropy when unset.
    pub seed: Option<u64>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            layers: 1,
            d_model: 4,
            output: PathBuf::from(DEFAULT_OUTPUT),
            seed: None,
        }
    }
}

impl ExportConfig {
    /// Check that both dimensions are positive and the weight count fits an i32.
    pub fn validate(&self) -> Result<()> {
        if self.layers <= 0 {
            return Err(ExportError::InvalidConfig(format!(
                "layers must be positive (got {})",
                self.layers
            )));
        }
        if self.d_model <= 0 {
            return Err(ExportError::InvalidConfig(format!(
                "d_model must be positive (got {})",
                self.d_model
            )));
        }

        let d = self.d_model as usize;
        let count = d
            .checked_mul(d)
            .and_then(|n| n.checked_mul(format::MATRICES_PER_BLOCK))
            .filter(|&n| n <= i32::MAX as usize)
            .ok_or_else(|| {
                ExportError::InvalidConfig(format!(
                    "d_model {d} gives more than {} weights",
                    i32::MAX
                ))
            })?;
        count
            .checked_mul(std::mem::size_of::<f32>())
            .and_then(|n| n.checked_add(format::HEADER_SIZE))
            .ok_or_else(|| {
                ExportError::InvalidConfig(format!("d_model {d} is too large"))
            })?;

        Ok(())
    }

    /// Apply explicitly set values on top of this config.
    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(layers) = overrides.layers {
            self.layers = layers;
        }
        if let Some(d_model) = overrides.d_model {
            self.d_model = d_model;
        }
        if let Some(output) = overrides.output {
            self.output = output;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
    }

    /// Number of f32 weights this config produces (independent of `layers`).
    pub fn weight_count(&self) -> usize {
        format::weight_count(self.d_model as usize)
    }

    /// Expected size of the output file in bytes.
    pub fn file_size(&self) -> usize {
        format::expected_file_size(self.d_model as usize)
    }
}

/// Values given on the command line. `None` keeps the underlying setting.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub layers: Option<i32>,
    pub d_model: Option<i32>,
    pub output: Option<PathBuf>,
    pub seed: Option<u64>,
}

/// Load the base config (file or defaults) and apply overrides.
pub fn resolve_config(path: Option<&Path>, overrides: ConfigOverrides) -> Result<ExportConfig> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => ExportConfig::default(),
    };
    config.apply(overrides);
    Ok(config)
}

/// Load an export config from a JSON file. Missing fields take their defaults.
pub fn load_config(path: &Path) -> Result<ExportConfig> {
    let data = std::fs::read_to_string(path)?;
    let config: ExportConfig = serde_json::from_str(&data)?;
    Ok(config)
}
