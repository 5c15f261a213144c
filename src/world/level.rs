use std::{
    fs,
    path::{Path, PathBuf},
};

use bracket_geometry::prelude::Point;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{data::FlagRequirement, world::Biome};

use super::PortalEntity;

#[derive(Debug, Error)]
pub enum LevelDataError {
    #[error("failed to read level file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed portal placements: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One portal as authored in level data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalPlacement {
    pub dungeon_id: String,
    pub biome: Biome,
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub required_flag: Option<String>,
    #[serde(default = "active_by_default")]
    pub active: bool,
}

fn active_by_default() -> bool {
    true
}

impl PortalPlacement {
    pub fn into_portal(self) -> PortalEntity {
        let mut portal = PortalEntity::new(self.dungeon_id, self.biome, Point::new(self.x, self.y));
        portal.required_flag = FlagRequirement::from(self.required_flag);
        portal.is_active = self.active;
        portal
    }
}

pub fn load_placements(json: &str) -> Result<Vec<PortalPlacement>, LevelDataError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_placements_from<P: AsRef<Path>>(path: P) -> Result<Vec<PortalPlacement>, LevelDataError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| LevelDataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_placements(&json)
}

/// Placements for the hub level, one portal per biome opener plus a stale entry.
pub fn demo_level() -> Vec<PortalPlacement> {
    let placement = |dungeon_id: &str, biome: Biome, x: i32, y: i32| PortalPlacement {
        dungeon_id: dungeon_id.to_string(),
        biome,
        x,
        y,
        required_flag: None,
        active: true,
    };
    vec![
        placement("fringe_sewers", Biome::Fringe, 120, 240),
        placement("rust_foundry", Biome::Rust, 480, 200),
        placement("green_greenhouse", Biome::Green, 820, 260),
        PortalPlacement {
            required_flag: Some("hollow_key".to_string()),
            ..placement("quiet_library", Biome::Quiet, 1100, 180)
        },
        placement("teeth_maw", Biome::Teeth, 1400, 320),
        placement("glow_reactor", Biome::Glow, 1700, 140),
        PortalPlacement {
            active: false,
            ..placement("scar_index", Biome::ArchiveScar, 2000, 400)
        },
        placement("fringe_drowned_annex", Biome::Fringe, 160, 480),
    ]
}
