pub mod dungeons;

use std::collections::HashSet;

use bracket_terminal::prelude::RGB;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    config::LEVEL_TOLERANCE,
    world::{Biome, biome_color},
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("dungeon definition has an empty id")]
    EmptyId,
    #[error("{id}: level band {min_level}-{max_level} is inverted")]
    InvalidLevelBand {
        id: String,
        min_level: i32,
        max_level: i32,
    },
    #[error("{id}: a dungeon needs at least one room")]
    EmptyRoomList { id: String },
    #[error("{id}: mid boss room {mid_boss_room} must come before final boss room {final_boss_room}")]
    BossRoomOrder {
        id: String,
        mid_boss_room: u32,
        final_boss_room: u32,
    },
    #[error("{id}: final boss room {final_boss_room} exceeds room count {room_count}")]
    BossRoomOutOfRange {
        id: String,
        final_boss_room: u32,
        room_count: u32,
    },
}

/// A progress flag a dungeon or portal may ask for.
///
/// `None` on a dungeon that is not unlocked by default leaves it permanently
/// locked. That state is legal content and is not treated as an error.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlagRequirement {
    #[default]
    None,
    Required(String),
}

impl FlagRequirement {
    pub fn required<S: Into<String>>(flag: S) -> Self {
        FlagRequirement::Required(flag.into())
    }

    pub fn flag(&self) -> Option<&str> {
        match self {
            FlagRequirement::None => None,
            FlagRequirement::Required(flag) => Some(flag),
        }
    }

    /// True only when a flag is required and present in `held_flags`.
    pub fn held_in(&self, held_flags: &HashSet<String>) -> bool {
        self.flag().is_some_and(|flag| held_flags.contains(flag))
    }

    /// Gate check where no requirement means open access.
    pub fn permits(&self, held_flags: &HashSet<String>) -> bool {
        match self {
            FlagRequirement::None => true,
            FlagRequirement::Required(flag) => held_flags.contains(flag),
        }
    }
}

impl From<Option<String>> for FlagRequirement {
    fn from(flag: Option<String>) -> Self {
        flag.map_or(FlagRequirement::None, FlagRequirement::Required)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RoomRole {
    Regular,
    MidBoss,
    FinalBoss,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    pub biome: Biome,
    pub min_level: i32,
    pub max_level: i32,
    pub room_count: u32,
    /// 1-based.
    pub mid_boss_room: u32,
    /// 1-based.
    pub final_boss_room: u32,
    pub regular_enemy_ids: Vec<String>,
    pub mid_boss_id: String,
    pub mid_boss_name: String,
    pub final_boss_id: String,
    pub final_boss_name: String,
    pub objective_text: String,
    pub base_exp_reward: u32,
    pub base_currency_reward: u32,
    pub ambient_color: String,
    pub unlocked_by_default: bool,
    pub required_flag: FlagRequirement,
}

impl DungeonDefinition {
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.id.is_empty() {
            return Err(ContentError::EmptyId);
        }
        if self.min_level > self.max_level {
            return Err(ContentError::InvalidLevelBand {
                id: self.id.clone(),
                min_level: self.min_level,
                max_level: self.max_level,
            });
        }
        if self.room_count == 0 {
            return Err(ContentError::EmptyRoomList {
                id: self.id.clone(),
            });
        }
        if self.mid_boss_room < 1 || self.mid_boss_room >= self.final_boss_room {
            return Err(ContentError::BossRoomOrder {
                id: self.id.clone(),
                mid_boss_room: self.mid_boss_room,
                final_boss_room: self.final_boss_room,
            });
        }
        if self.final_boss_room > self.room_count {
            return Err(ContentError::BossRoomOutOfRange {
                id: self.id.clone(),
                final_boss_room: self.final_boss_room,
                room_count: self.room_count,
            });
        }
        Ok(())
    }

    pub fn is_available(&self, held_flags: &HashSet<String>, player_level: i32) -> bool {
        let unlocked = self.unlocked_by_default || self.required_flag.held_in(held_flags);
        unlocked && player_level >= self.min_level.saturating_sub(LEVEL_TOLERANCE)
    }

    /// Flag conventionally granted when this dungeon's final boss falls.
    pub fn completion_flag(&self) -> String {
        format!("{}_cleared", self.id)
    }

    pub fn room_role(&self, room: u32) -> Option<RoomRole> {
        if room == 0 || room > self.room_count {
            return None;
        }
        Some(if room == self.final_boss_room {
            RoomRole::FinalBoss
        } else if room == self.mid_boss_room {
            RoomRole::MidBoss
        } else {
            RoomRole::Regular
        })
    }

    pub fn ambient_rgb(&self) -> RGB {
        RGB::from_hex(&self.ambient_color).unwrap_or_else(|_| biome_color(self.biome))
    }

    pub fn level_band_label(&self) -> String {
        format!("Lv {}-{}", self.min_level, self.max_level)
    }
}
