use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::world::Biome;

/// Levels a player may sit below a dungeon's minimum and still enter it.
pub const LEVEL_TOLERANCE: i32 = 2;

/// Edge length of the square collision rectangle around a portal.
pub const PORTAL_SIZE: i32 = 48;
pub const PORTAL_HALF_EXTENT: i32 = PORTAL_SIZE / 2;

pub const UNKNOWN_DUNGEON_NAME: &str = "Unknown Dungeon";

/// Environment variable naming a JSON file with an [`AtlasConfig`].
pub const CONFIG_ENV: &str = "LAZARUS_ATLAS_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed atlas config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Simulated player progress and level data used by the atlas browser.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtlasConfig {
    pub player_level: i32,
    pub held_flags: Vec<String>,
    pub start_biome: Biome,
    pub level_file: Option<PathBuf>,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            player_level: 1,
            held_flags: Vec::new(),
            start_biome: Biome::Fringe,
            level_file: None,
        }
    }
}

impl AtlasConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Reads the file named by [`CONFIG_ENV`], or falls back to defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_path(PathBuf::from(path)),
            None => Ok(Self::default()),
        }
    }

    pub fn held_flag_set(&self) -> HashSet<String> {
        self.held_flags.iter().cloned().collect()
    }
}
