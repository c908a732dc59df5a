//! TOML configuration of a draft.
//!
//! ```toml
//! [measurements]
//! waist = 100.33
//! seat = 107.95
//! body_rise = 29.21
//! inseam = 86.36
//! trouser_bottom_width = 22.6
//! waistband_depth = 4.0
//!
//! [draft]
//! method = "classic"      # or "split_ratio"
//! back_fork = "diagonal"  # or "fixed_x"
//!
//! [fit]
//! samples = 100
//! ```
//!
//! Only `[measurements]` is required.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::draft::{Draft, DraftOptions, PointSet};
use crate::error::{DraftError, Result};
use crate::fit::{CurveFitter, FitConfig};
use crate::measurements::Measurements;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SloperConfig {
    pub measurements: Measurements,
    #[serde(default)]
    pub draft: DraftOptions,
    #[serde(default)]
    pub fit: FitConfig,
}

impl SloperConfig {
    pub fn new(measurements: Measurements) -> Self {
        SloperConfig {
            measurements,
            draft: DraftOptions::default(),
            fit: FitConfig::default(),
        }
    }

    /// Parse and validate a configuration.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SloperConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| DraftError::Config(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| DraftError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        self.measurements.validate()?;
        self.fit.validate()
    }

    pub fn fitter(&self) -> CurveFitter {
        CurveFitter::new(self.fit)
    }

    /// Draft the configured measurements with the configured options.
    pub fn build(&self) -> Result<PointSet> {
        Draft::new(self.draft).build(&self.measurements)
    }
}
