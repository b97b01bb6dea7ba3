//! Configuration system for cardtrade.
//!
//! Load allocation settings from TOML or YAML to control the contest target,
//! contest size, batch size and requested tier without code changes.
//!
//! # Examples
//!
//! ```
//! use cardtrade_config::AllocationConfig;
//! use cardtrade_core::QualityTier;
//!
//! let config = AllocationConfig::from_toml_str(r#"
//!     number_of_contests = 4
//!     size_of_contests = 3
//!     tier = "silver"
//!     solve_pass_limit = 500
//! "#).unwrap();
//!
//! assert_eq!(config.number_of_contests, 4);
//! assert_eq!(config.batch_size, 3);
//! assert_eq!(config.tier, QualityTier::Silver);
//! assert_eq!(config.solve_pass_limit, Some(500));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use cardtrade_config::AllocationConfig;
//!
//! let config = AllocationConfig::load("allocation.toml").unwrap_or_default();
//! assert_eq!(config.size_of_contests, 3);
//! ```

use std::path::Path;

use cardtrade_core::QualityTier;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Contest batch construction settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct AllocationConfig {
    /// Target number of contests.
    pub number_of_contests: usize,

    /// Participants per contest.
    pub size_of_contests: usize,

    /// Contests proposed and validated together.
    pub batch_size: usize,

    /// Tier requested for every participant/contest pair in a solve pass.
    pub tier: QualityTier,

    /// Maximum solve passes tried per batch (None = exhaust every grouping).
    pub solve_pass_limit: Option<u64>,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            number_of_contests: 6,
            size_of_contests: 3,
            batch_size: 3,
            tier: QualityTier::Bronze,
            solve_pass_limit: None,
        }
    }
}

impl AllocationConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings under which no contest can ever be formed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size_of_contests == 0 {
            return Err(ConfigError::Invalid(
                "size_of_contests must be at least 1".to_string(),
            ));
        }
        if self.batch_size == 0 {
            return Err(ConfigError::Invalid(
                "batch_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Sets the target number of contests.
    pub fn with_number_of_contests(mut self, count: usize) -> Self {
        self.number_of_contests = count;
        self
    }

    /// Sets the contest size.
    pub fn with_size_of_contests(mut self, size: usize) -> Self {
        self.size_of_contests = size;
        self
    }

    /// Sets the batch size.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Sets the requested tier.
    pub fn with_tier(mut self, tier: QualityTier) -> Self {
        self.tier = tier;
        self
    }

    /// Caps the solve passes tried per batch.
    pub fn with_solve_pass_limit(mut self, limit: u64) -> Self {
        self.solve_pass_limit = Some(limit);
        self
    }
}
