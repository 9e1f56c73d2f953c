//! Run configuration.
//!
//! Groups every denoising parameter in one serde-friendly struct so runs
//! can be described in TOML. Validation is fail-fast and happens before
//! any transform work; the same checks are applied again when the values
//! reach [`crate::WaveletDenoiser`].

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::denoise::{Dispersion, Thresholding};
use crate::dwt::{BorderMode, Wavelet};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("config validation error: {0}")]
    Validation(String),
}

/// Denoising run parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DenoiseConfig {
    /// Shrinkage rule: "hard" or "soft".
    pub threshold_type: String,
    /// Wavelet family name (case-sensitive, see [`crate::dwt::wavelist`]).
    pub wavelet: String,
    /// Decomposition depth.
    pub level: usize,
    /// Border extension mode.
    #[serde(default = "default_mode")]
    pub mode: String,
    /// Dispersion estimator: "median" or "mean".
    #[serde(default = "default_estimator")]
    pub estimator: String,
    /// One threshold for all bands (true) or one per band (false).
    #[serde(default)]
    pub universal: bool,
    /// Multiplier applied to every threshold.
    #[serde(default = "default_scaling_factor")]
    pub scaling_factor: f64,
}

fn default_mode() -> String {
    "symmetric".to_string()
}

fn default_estimator() -> String {
    "median".to_string()
}

fn default_scaling_factor() -> f64 {
    1.0
}

impl Default for DenoiseConfig {
    fn default() -> Self {
        Self {
            threshold_type: "soft".to_string(),
            wavelet: "db4".to_string(),
            level: 3,
            mode: default_mode(),
            estimator: default_estimator(),
            universal: true,
            scaling_factor: default_scaling_factor(),
        }
    }
}

impl DenoiseConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Check every field against the sets the denoiser accepts. The
    /// (level, signal length) combination can only be checked once a
    /// signal is known, so it stays with [`crate::WaveletDenoiser::new`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        Wavelet::parse(&self.wavelet).map_err(|e| ConfigError::Validation(e.to_string()))?;
        Thresholding::parse(&self.threshold_type)
            .map_err(|e| ConfigError::Validation(e.to_string()))?;
        BorderMode::parse(&self.mode).map_err(|e| ConfigError::Validation(e.to_string()))?;
        Dispersion::parse(&self.estimator)
            .map_err(|e| ConfigError::Validation(e.to_string()))?;
        if self.level == 0 {
            return Err(ConfigError::Validation(
                "level must be at least 1".to_string(),
            ));
        }
        if !self.scaling_factor.is_finite() || self.scaling_factor < 0.0 {
            return Err(ConfigError::Validation(format!(
                "scaling factor must be finite and non-negative, got {}",
                self.scaling_factor
            )));
        }
        Ok(())
    }
}
