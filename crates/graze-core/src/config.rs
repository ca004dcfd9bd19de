//! Configuration types for the simulation.

use crate::error::{Error, Result};
use crate::types::SpeciesParams;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest accepted grid side length; keeps the cell count well inside
/// addressable range.
pub const MAX_GRID_SIZE: i32 = 4096;

/// World configuration parameters.
///
/// Defaults match the original interactive demo's control defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Side length of the square toroidal grid
    pub size: i32,
    /// Initial sheep population
    pub init_sheep_count: usize,
    /// Initial wolf population
    pub init_wolf_count: usize,
    /// Sheep reproduction probability per tick (0.0 to 1.0)
    pub sheep_born_rate: f64,
    /// Wolf reproduction probability per tick (0.0 to 1.0)
    pub wolf_born_rate: f64,
    /// Energy a sheep gains from grazing a grown cell
    pub sheep_gain: f64,
    /// Energy a wolf gains from taking a sheep
    pub wolf_gain: f64,
    /// Ticks a depleted cell takes to regrow
    pub grass_time: i32,
    /// Maximum sheep step length per tick
    pub sheep_speed: f64,
    /// Maximum wolf step length per tick
    pub wolf_speed: f64,
    /// Random seed for reproducibility
    pub seed: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            size: 50,
            init_sheep_count: 100,
            init_wolf_count: 50,
            sheep_born_rate: 0.05,
            wolf_born_rate: 0.03,
            sheep_gain: 4.0,
            wolf_gain: 20.0,
            grass_time: 30,
            sheep_speed: 1.0,
            wolf_speed: 2.0,
            seed: 0,
        }
    }
}

impl WorldConfig {
    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Validate the configuration eagerly, before any simulation state is
    /// built. Degenerate values (zero grid, non-positive gains) are rejected
    /// here rather than producing undefined behavior downstream.
    pub fn validate(&self) -> Result<()> {
        if self.size <= 0 || self.size > MAX_GRID_SIZE {
            return Err(Error::InvalidConfig(format!(
                "grid size must be in 1..={}, got {}",
                MAX_GRID_SIZE, self.size
            )));
        }
        if self.grass_time <= 0 {
            return Err(Error::InvalidConfig(format!(
                "grass_time must be positive, got {}",
                self.grass_time
            )));
        }
        for (name, value) in [
            ("sheep_gain", self.sheep_gain),
            ("wolf_gain", self.wolf_gain),
            ("sheep_speed", self.sheep_speed),
            ("wolf_speed", self.wolf_speed),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{} must be positive and finite, got {}",
                    name, value
                )));
            }
        }
        for (name, rate) in [
            ("sheep_born_rate", self.sheep_born_rate),
            ("wolf_born_rate", self.wolf_born_rate),
        ] {
            if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
                return Err(Error::InvalidConfig(format!(
                    "{} must be within [0, 1], got {}",
                    name, rate
                )));
            }
        }
        Ok(())
    }

    /// Behavior constants for the sheep species
    pub fn sheep_params(&self) -> SpeciesParams {
        SpeciesParams {
            gain: self.sheep_gain,
            born_rate: self.sheep_born_rate,
            speed: self.sheep_speed,
        }
    }

    /// Behavior constants for the wolf species
    pub fn wolf_params(&self) -> SpeciesParams {
        SpeciesParams {
            gain: self.wolf_gain,
            born_rate: self.wolf_born_rate,
            speed: self.wolf_speed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = WorldConfig::default();
        assert_eq!(config.size, 50);
        assert_eq!(config.init_sheep_count, 100);
        assert_eq!(config.init_wolf_count, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_grid() {
        let config = WorldConfig {
            size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_oversized_grid() {
        let config = WorldConfig {
            size: MAX_GRID_SIZE + 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_gain() {
        let config = WorldConfig {
            wolf_gain: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_born_rate_above_one() {
        let config = WorldConfig {
            sheep_born_rate: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_roundtrips_through_json() {
        let config = WorldConfig {
            seed: 42,
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: WorldConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seed, 42);
        assert_eq!(back.size, config.size);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: WorldConfig = serde_json::from_str(r#"{"size": 10, "seed": 7}"#).unwrap();
        assert_eq!(config.size, 10);
        assert_eq!(config.seed, 7);
        assert_eq!(config.grass_time, 30);
    }

    #[test]
    fn test_load_from_json_file() {
        let path = std::env::temp_dir().join("graze-config-load.json");
        std::fs::write(&path, r#"{"size": 12, "seed": 5}"#).unwrap();
        let config = WorldConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.size, 12);
        assert_eq!(config.seed, 5);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = WorldConfig::load("/nonexistent/graze-config.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_load_malformed_json_is_serialization_error() {
        let path = std::env::temp_dir().join("graze-config-malformed.json");
        std::fs::write(&path, "not json").unwrap();
        let err = WorldConfig::load(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(matches!(err, Error::Serialization(_)));
    }
}
