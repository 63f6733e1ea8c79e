//! Health threshold configuration.
//!
//! Thresholds ship with the benchmark defaults from the cost model but can be
//! tuned per project through a `.tcomap.toml` file in the working directory.
//! Only the command layer reads the file; the analysis functions take
//! thresholds as an argument and never touch the filesystem themselves.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Health assessment thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthThresholds {
    /// Cookbook ratio (per 1K nodes) above which the estate is flagged
    #[serde(default = "default_ratio_healthy")]
    pub ratio_healthy: f64,

    /// Cookbook ratio above which the estate is critical
    #[serde(default = "default_ratio_critical")]
    pub ratio_critical: f64,

    /// Cookbooks-per-FTE below which efficiency is flagged
    #[serde(default = "default_per_fte_low")]
    pub per_fte_low: f64,

    /// Cookbooks-per-FTE above which understaffing is flagged
    #[serde(default = "default_per_fte_high")]
    pub per_fte_high: f64,
}

fn default_ratio_healthy() -> f64 {
    25.0
}

fn default_ratio_critical() -> f64 {
    100.0
}

fn default_per_fte_low() -> f64 {
    150.0
}

fn default_per_fte_high() -> f64 {
    300.0
}

impl Default for HealthThresholds {
    fn default() -> Self {
        Self {
            ratio_healthy: default_ratio_healthy(),
            ratio_critical: default_ratio_critical(),
            per_fte_low: default_per_fte_low(),
            per_fte_high: default_per_fte_high(),
        }
    }
}

impl HealthThresholds {
    /// Validate that thresholds are ordered and non-negative
    pub fn validate(&self) -> Result<(), String> {
        if self.ratio_healthy < 0.0 || self.per_fte_low < 0.0 {
            return Err("health thresholds must be non-negative".to_string());
        }
        if self.ratio_critical <= self.ratio_healthy {
            return Err(format!(
                "ratio_critical ({}) must exceed ratio_healthy ({})",
                self.ratio_critical, self.ratio_healthy
            ));
        }
        if self.per_fte_high <= self.per_fte_low {
            return Err(format!(
                "per_fte_high ({}) must exceed per_fte_low ({})",
                self.per_fte_high, self.per_fte_low
            ));
        }
        Ok(())
    }
}

/// Top-level tcomap configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TcomapConfig {
    #[serde(default)]
    pub thresholds: HealthThresholds,
}

impl TcomapConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, String> {
        let config: TcomapConfig =
            toml::from_str(content).map_err(|e| format!("invalid configuration: {e}"))?;
        config.thresholds.validate()?;
        Ok(config)
    }

    /// Load configuration from a file path
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
        Self::from_toml(&content)
    }
}

/// Load `.tcomap.toml` from the working directory, falling back to defaults
/// when the file is absent. A malformed file is reported to the log and
/// ignored. Intended for the command layer only.
pub fn load_or_default() -> TcomapConfig {
    let path = Path::new(".tcomap.toml");
    if crate::io::file_exists(path) {
        match TcomapConfig::from_file(path) {
            Ok(config) => return config,
            Err(e) => log::warn!("ignoring .tcomap.toml: {e}"),
        }
    }
    TcomapConfig::default()
}
