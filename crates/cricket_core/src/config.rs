//! Model configuration
//!
//! Loaded from a JSON file whose path comes from `CRICKET_CONFIG_PATH`.
//! Missing fields fall back to their defaults; an unset or blank variable
//! means the default configuration. A set variable that points at a missing
//! or invalid file is an error, never a silent fallback.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::{env, fs};

pub const CONFIG_PATH_ENV: &str = "CRICKET_CONFIG_PATH";

/// Upper bound on configurable roster capacity.
pub const MAX_ROSTER_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Slots in a roster built from this config (default: 11)
    #[serde(default = "default_roster_capacity")]
    pub roster_capacity: usize,

    /// Run record validation before records are accepted (default: false)
    #[serde(default)]
    pub strict_validation: bool,

    /// Allowed gap between a stored derived figure and its formula (default: 1e-4)
    #[serde(default = "default_float_tolerance")]
    pub float_tolerance: f32,
}

fn default_roster_capacity() -> usize {
    crate::roster::TEAM_SIZE
}

fn default_float_tolerance() -> f32 {
    1e-4
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            roster_capacity: default_roster_capacity(),
            strict_validation: false,
            float_tolerance: default_float_tolerance(),
        }
    }
}

impl ModelConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ModelConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&content)?;
        log::info!("Loaded model config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let Ok(path) = env::var(CONFIG_PATH_ENV) else {
            return Ok(Self::default());
        };

        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }

        Self::from_path(path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.roster_capacity == 0 || self.roster_capacity > MAX_ROSTER_CAPACITY {
            return Err(ConfigError::Invalid(format!(
                "roster_capacity must be 1-{}, got {}",
                MAX_ROSTER_CAPACITY, self.roster_capacity
            )));
        }
        if !self.float_tolerance.is_finite() || self.float_tolerance <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "float_tolerance must be a positive number, got {}",
                self.float_tolerance
            )));
        }
        Ok(())
    }
}
