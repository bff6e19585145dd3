//! Configuration types for the simulation.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env::VarError;
use std::path::Path;
use tracing::debug;

/// Environment variable naming an optional JSON configuration file
pub const CONFIG_ENV_VAR: &str = "LIFE_CONFIG";

/// Driver loop parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Maximum number of generations to display before stopping
    pub generations: u64,
    /// Pause between frames (milliseconds)
    pub frame_delay_ms: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            generations: 100,
            frame_delay_ms: 100,
        }
    }
}

/// Accepted range for user-supplied grid dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundsConfig {
    pub min_dimension: i32,
    pub max_dimension: i32,
}

impl BoundsConfig {
    /// Clamp a requested width or height into the accepted range
    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.min_dimension, self.max_dimension)
    }
}

impl Default for BoundsConfig {
    fn default() -> Self {
        Self {
            min_dimension: 10,
            max_dimension: 100,
        }
    }
}

/// Console rendering parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub alive_glyph: char,
    pub dead_glyph: char,
    /// Prefix written before every frame line
    pub indent: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            alive_glyph: '@',
            dead_glyph: ' ',
            indent: "\t".to_string(),
        }
    }
}

/// Random soup seeding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomConfig {
    /// Probability that a cell starts alive (0.0 to 1.0)
    pub density: f64,
    /// Fixed seed for reproducible soups; drawn from entropy when absent
    pub seed: Option<u64>,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            density: 0.3,
            seed: None,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    pub run: RunConfig,
    pub bounds: BoundsConfig,
    pub render: RenderConfig,
    pub random: RandomConfig,
}

impl LifeConfig {
    /// Load from the file named by `LIFE_CONFIG`, or fall back to defaults
    pub fn load() -> Result<Self> {
        Self::from_env_value(std::env::var(CONFIG_ENV_VAR))
    }

    fn from_env_value(value: std::result::Result<String, VarError>) -> Result<Self> {
        match value {
            Ok(path) => Self::from_file(path),
            Err(VarError::NotPresent) => {
                debug!("{} not set, using default configuration", CONFIG_ENV_VAR);
                Ok(Self::default())
            }
            Err(VarError::NotUnicode(path)) => Err(Error::Config(format!(
                "{} is not valid UTF-8: {:?}",
                CONFIG_ENV_VAR, path
            ))),
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from {:?}", path);
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse a JSON document; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.bounds.min_dimension < 1 {
            return Err(Error::Config(format!(
                "min_dimension must be at least 1, got {}",
                self.bounds.min_dimension
            )));
        }

        if self.bounds.min_dimension > self.bounds.max_dimension {
            return Err(Error::Config(format!(
                "min_dimension {} exceeds max_dimension {}",
                self.bounds.min_dimension, self.bounds.max_dimension
            )));
        }

        if !(0.0..=1.0).contains(&self.random.density) {
            return Err(Error::Config(format!(
                "density must be within [0, 1], got {}",
                self.random.density
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configs() {
        let config = LifeConfig::default();
        assert_eq!(config.run.generations, 100);
        assert_eq!(config.run.frame_delay_ms, 100);
        assert_eq!(config.bounds.min_dimension, 10);
        assert_eq!(config.bounds.max_dimension, 100);
        assert_eq!(config.render.alive_glyph, '@');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bounds_clamp() {
        let bounds = BoundsConfig::default();
        assert_eq!(bounds.clamp(5), 10);
        assert_eq!(bounds.clamp(60), 60);
        assert_eq!(bounds.clamp(250), 100);
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let config = LifeConfig::from_json(r#"{ "run": { "generations": 7 } }"#).unwrap();
        assert_eq!(config.run.generations, 7);
        assert_eq!(config.run.frame_delay_ms, 100);
        assert_eq!(config.bounds, BoundsConfig::default());
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        let result =
            LifeConfig::from_json(r#"{ "bounds": { "min_dimension": 50, "max_dimension": 20 } }"#);
        assert!(matches!(result, Err(Error::Config(_))));

        let result = LifeConfig::from_json(r#"{ "bounds": { "min_dimension": 0 } }"#);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_invalid_density_rejected() {
        let result = LifeConfig::from_json(r#"{ "random": { "density": 1.5 } }"#);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_unset_env_var_uses_defaults() {
        let config = LifeConfig::from_env_value(Err(VarError::NotPresent)).unwrap();
        assert_eq!(config, LifeConfig::default());
    }

    #[test]
    fn test_non_unicode_env_var_is_config_error() {
        let value = Err(VarError::NotUnicode("bad\u{fffd}path".into()));
        let result = LifeConfig::from_env_value(value);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        let result = LifeConfig::from_env_value(Ok("/nonexistent/life-config.json".to_string()));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let result = LifeConfig::from_json("{ run: ");
        assert!(matches!(result, Err(Error::Serialization(_))));
    }

    #[test]
    fn test_config_serialization() {
        let config = LifeConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: LifeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
