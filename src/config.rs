//! Game configuration loaded from TOML.
//!
//! Every key is optional:
//!
//! ```toml
//! size = 4
//! initial_tiles = 4
//! seed = 12345
//! spawn_policy = "on-change"   # or "always"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::types::{SpawnPolicy, DEFAULT_GRID_SIZE, DEFAULT_INITIAL_TILES, MAX_GRID_SIZE};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Grid side length.
    pub size: usize,
    /// Tiles placed when a game starts or restarts.
    pub initial_tiles: usize,
    /// RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    #[serde(deserialize_with = "spawn_policy_from_str")]
    pub spawn_policy: SpawnPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            initial_tiles: DEFAULT_INITIAL_TILES,
            seed: None,
            spawn_policy: SpawnPolicy::default(),
        }
    }
}

impl GameConfig {
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Check the limits the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_GRID_SIZE).contains(&self.size) {
            return Err(ConfigError::Invalid(format!(
                "size must be between 1 and {MAX_GRID_SIZE}, got {}",
                self.size
            )));
        }
        let cells = self.size * self.size;
        if self.initial_tiles > cells {
            return Err(ConfigError::Invalid(format!(
                "initial_tiles ({}) exceeds the {cells} cells of a {}x{} grid",
                self.initial_tiles, self.size, self.size
            )));
        }
        Ok(())
    }
}

fn spawn_policy_from_str<'de, D: Deserializer<'de>>(d: D) -> Result<SpawnPolicy, D::Error> {
    let s = String::deserialize(d)?;
    SpawnPolicy::from_str(&s)
        .ok_or_else(|| serde::de::Error::custom(format!("unknown spawn policy: {s}")))
}
