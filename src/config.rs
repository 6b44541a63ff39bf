use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::arena::ArenaConfig;
use crate::error::ConfigError;
use crate::search::SearchConfig;

/// The config file read by the CLI, relative to the working directory
pub const CONFIG_PATH: &str = "connect4.toml";

/// Top-level configuration, loadable from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Pause between moves when both players are AI controlled
    pub ai_delay_ms: u64,
    pub search: SearchConfig,
    pub arena: ArenaConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            ai_delay_ms: 1000,
            search: SearchConfig::default(),
            arena: ArenaConfig::default(),
        }
    }
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.depth == 0 {
            return Err(ConfigError::Validation("search.depth must be >= 1".into()));
        }
        if self.search.node_limit == Some(0) {
            return Err(ConfigError::Validation(
                "search.node_limit must be >= 1".into(),
            ));
        }
        if self.arena.games == 0 {
            return Err(ConfigError::Validation("arena.games must be >= 1".into()));
        }
        if self.arena.depth_one == 0 || self.arena.depth_two == 0 {
            return Err(ConfigError::Validation(
                "arena depths must be >= 1".into(),
            ));
        }
        Ok(())
    }
}
