//! Configuration loading and validation
//!
//! This module handles the engine configuration value and loading it from
//! a `conveyor.yaml` file.
//!
//! The configuration is immutable once an engine is constructed: the engine
//! takes it by value and no operation mutates it afterwards.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Engine configuration from `conveyor.yaml`
///
/// `max_retries` and `verbose` are recognized options that current engine
/// behavior does not consult; they are kept for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngineConfig {
    /// Engine name (identifying string, no uniqueness enforced)
    pub name: String,

    /// Retry bound for future retry-aware operations
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Verbosity flag reserved for future use
    #[serde(default)]
    pub verbose: bool,
}

fn default_max_retries() -> u32 {
    3
}

impl EngineConfig {
    /// Create a configuration with default retry bound and verbosity
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            max_retries: default_max_retries(),
            verbose: false,
        }
    }

    /// Load configuration from a directory or file path
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the project directory or conveyor.yaml file
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let config = EngineConfig::load("./my-project")?;
    /// println!("Engine: {}", config.name);
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let config_path = if path.is_dir() {
            path.join("conveyor.yaml")
        } else {
            path.to_path_buf()
        };

        if !config_path.exists() {
            return Err(Error::ConfigNotFound {
                path: config_path.display().to_string(),
            });
        }

        let contents = std::fs::read_to_string(&config_path)?;
        let config: EngineConfig = serde_yaml::from_str(&contents)?;
        Ok(config)
    }
}
