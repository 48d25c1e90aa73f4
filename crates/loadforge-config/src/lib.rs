//! Configuration system for LoadForge.
//!
//! Load search configuration from TOML or YAML files to control result
//! count, masterwork assumptions, pruning and termination without code
//! changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use loadforge_config::SearchConfig;
//! use std::time::Duration;
//!
//! let config = SearchConfig::from_toml_str(r#"
//!     max_results = 25
//!     parallel = true
//!
//!     [termination]
//!     node_limit = 5000000
//!     seconds_spent_limit = 2
//! "#).unwrap();
//!
//! assert_eq!(config.max_results, 25);
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(2)));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use loadforge_config::SearchConfig;
//!
//! let config = SearchConfig::load("loadforge.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;
use std::time::Duration;

use loadforge_core::{LoadForgeError, DEFAULT_MASTERWORK_BONUS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of builds returned by a search.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Default optimistic per-slot, per-stat ceiling used for pruning.
pub const DEFAULT_SLOT_STAT_CEILING: u32 = 30;

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

impl From<ConfigError> for LoadForgeError {
    fn from(err: ConfigError) -> Self {
        LoadForgeError::Config(err.to_string())
    }
}

/// Main search configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct SearchConfig {
    /// Number of builds to keep (K).
    pub max_results: usize,

    /// Flat bonus per masterworked piece per stat.
    pub masterwork_bonus: u32,

    /// Optimistic per-slot, per-stat value assumed when pruning.
    ///
    /// A piece with a single stat above this value can be pruned away
    /// even though it would have met the targets.
    pub slot_stat_ceiling: u32,

    /// Fan the first slot out across the rayon thread pool.
    pub parallel: bool,

    /// Termination configuration.
    pub termination: Option<TerminationConfig>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            masterwork_bonus: DEFAULT_MASTERWORK_BONUS,
            slot_stat_ceiling: DEFAULT_SLOT_STAT_CEILING,
            parallel: false,
            termination: None,
        }
    }
}

impl SearchConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML or fails
    /// validation.
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

    /// Checks values that parse but cannot drive a search.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(termination) = &self.termination {
            if termination.node_limit == Some(0) {
                return Err(ConfigError::Invalid(
                    "termination.node_limit must be positive".to_string(),
                ));
            }
        }
        Ok(())
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_masterwork_bonus(mut self, bonus: u32) -> Self {
        self.masterwork_bonus = bonus;
        self
    }

    pub fn with_slot_stat_ceiling(mut self, ceiling: u32) -> Self {
        self.slot_stat_ceiling = ceiling;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the node-expansion budget.
    pub fn with_node_limit(mut self, node_limit: u64) -> Self {
        self.termination = Some(TerminationConfig {
            node_limit: Some(node_limit),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the termination time limit.
    pub fn with_termination_seconds(mut self, seconds: u64) -> Self {
        self.termination = Some(TerminationConfig {
            seconds_spent_limit: Some(seconds),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Returns the termination time limit, if configured.
    pub fn time_limit(&self) -> Option<Duration> {
        self.termination.as_ref().and_then(|t| t.time_limit())
    }

    /// Returns the node-expansion budget, if configured.
    pub fn node_limit(&self) -> Option<u64> {
        self.termination.as_ref().and_then(|t| t.node_limit)
    }
}

/// Termination configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum number of search nodes to expand.
    pub node_limit: Option<u64>,

    /// Maximum seconds to spend searching.
    pub seconds_spent_limit: Option<u64>,

    /// Maximum milliseconds to spend searching, added to the seconds limit.
    pub millis_spent_limit: Option<u64>,
}

impl TerminationConfig {
    /// Returns the time limit as a Duration, if any.
    ///
    /// Seconds and milliseconds are summed with saturation, so an absurdly
    /// large limit just never fires.
    pub fn time_limit(&self) -> Option<Duration> {
        let limit = Duration::from_secs(self.seconds_spent_limit.unwrap_or(0))
            .saturating_add(Duration::from_millis(self.millis_spent_limit.unwrap_or(0)));
        if limit.is_zero() {
            None
        } else {
            Some(limit)
        }
    }
}
