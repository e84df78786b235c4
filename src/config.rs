/// Runtime configuration
///
/// Read once at start-up from a JSON file. Every field is optional; missing
/// fields fall back to their defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::SPAWN_INTERVAL_MS;
use crate::error::ConfigError;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "RADIAL_SHOOTER_CONFIG";
/// Config file picked up from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "radial_shooter.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Target frame period in milliseconds
    pub frame_ms: u64,
    /// Enemy spawn period in milliseconds
    pub spawn_interval_ms: u64,
    /// Fixed RNG seed for reproducible runs; entropy when absent
    pub seed: Option<u64>,
    /// World units per terminal column
    pub cell_width: f32,
    /// World units per terminal row
    pub cell_height: f32,
    /// Where log output goes while the terminal is taken over
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame_ms: 16,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            seed: None,
            cell_width: 8.0,
            cell_height: 16.0,
            log_file: PathBuf::from("radial_shooter.log"),
        }
    }
}

impl Config {
    /// Parse and validate a JSON config string.
    pub fn from_json(json: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json, path)
    }

    /// Load from `$RADIAL_SHOOTER_CONFIG`, else `./radial_shooter.json` if it
    /// exists, else defaults.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Self::from_file(Path::new(&path));
        }
        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.exists() {
            return Self::from_file(local);
        }
        Ok(Self::default())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_ms == 0 {
            return Err(invalid("frame_ms", "must be at least 1"));
        }
        if self.spawn_interval_ms == 0 {
            return Err(invalid("spawn_interval_ms", "must be at least 1"));
        }
        if !(self.cell_width > 0.0) {
            return Err(invalid("cell_width", "must be positive"));
        }
        if !(self.cell_height > 0.0) {
            return Err(invalid("cell_height", "must be positive"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}
