//! Simulation configuration.

use serde::{Deserialize, Serialize};

use lighthouse_core::types::ScreenBounds;

use crate::error::ConfigError;

/// Configuration for starting a new encounter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same high-floor rosters.
    pub seed: u64,
    /// Screen size the floors are laid out in.
    pub bounds: ScreenBounds,
    /// Floor the encounter starts on (1-based).
    pub starting_floor: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            bounds: ScreenBounds::default(),
            starting_floor: 1,
        }
    }
}

impl SimConfig {
    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let ScreenBounds { width, height } = self.bounds;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidBounds { width, height });
        }
        if self.starting_floor == 0 {
            return Err(ConfigError::ZeroFloor);
        }
        Ok(())
    }
}
