//! Colony configuration, loadable from TOML.
//!
//! ```toml
//! deposit_reward = 10.0
//! max_walks = 50000
//! seed = 7
//! ```
//!
//! Every field is optional; missing fields take their defaults.

use crate::ant::PHEROMONE_REWARD;
use formica_core::error::{FormicaError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable parameters for a [`Colony`](crate::colony::Colony).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColonyConfig {
    /// Total pheromone an arriving ant spreads over its path (default: 10.0).
    #[serde(default = "default_deposit_reward")]
    pub deposit_reward: f64,
    /// Walk budget for `swarm_until_static`; `None` means unbounded.
    #[serde(default)]
    pub max_walks: Option<u64>,
    /// RNG seed for reproducible runs; `None` seeds from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_deposit_reward() -> f64 {
    PHEROMONE_REWARD
}

impl Default for ColonyConfig {
    fn default() -> Self {
        Self {
            deposit_reward: default_deposit_reward(),
            max_walks: None,
            seed: None,
        }
    }
}

impl ColonyConfig {
    /// Parse a configuration from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| FormicaError::invalid_config(format!("failed to parse: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            FormicaError::Io(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Serialize to a TOML document.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self)
            .map_err(|e| FormicaError::invalid_config(format!("failed to serialize: {}", e)))
    }

    /// Reject rewards that would break the pheromone model.
    pub fn validate(&self) -> Result<()> {
        if !self.deposit_reward.is_finite() || self.deposit_reward < 0.0 {
            return Err(FormicaError::invalid_config(format!(
                "deposit_reward must be a finite non-negative number, got {}",
                self.deposit_reward
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = ColonyConfig::from_toml_str("").unwrap();
        assert_eq!(config, ColonyConfig::default());
        assert_eq!(config.deposit_reward, 10.0);
    }

    #[test]
    fn fields_override_defaults() {
        let config = ColonyConfig::from_toml_str("max_walks = 500\nseed = 3\n").unwrap();
        assert_eq!(config.max_walks, Some(500));
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.deposit_reward, 10.0);
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = ColonyConfig::from_toml_str("max_walks = \"lots\"").unwrap_err();
        assert!(matches!(err, FormicaError::Config(_)));
    }

    #[test]
    fn negative_reward_is_rejected() {
        let err = ColonyConfig::from_toml_str("deposit_reward = -1.0").unwrap_err();
        assert!(matches!(err, FormicaError::Config(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = ColonyConfig::load("/nonexistent/formica.toml").unwrap_err();
        assert!(matches!(err, FormicaError::Io(_)));
    }
}
