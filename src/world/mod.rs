pub mod level;
pub mod portal;

use bracket_terminal::prelude::RGB;
use serde::{Deserialize, Serialize};

pub use self::portal::PortalEntity;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Biome {
    #[default]
    Fringe,
    Rust,
    Green,
    Quiet,
    Teeth,
    Glow,
    ArchiveScar,
}

pub fn biome_color(biome: Biome) -> RGB {
    match biome {
        Biome::Fringe => RGB::from_u8(156, 142, 110),
        Biome::Rust => RGB::from_u8(196, 98, 45),
        Biome::Green => RGB::from_u8(96, 186, 84),
        Biome::Quiet => RGB::from_u8(132, 150, 178),
        Biome::Teeth => RGB::from_u8(226, 214, 190),
        Biome::Glow => RGB::from_u8(150, 255, 170),
        Biome::ArchiveScar => RGB::from_u8(170, 96, 210),
    }
}

impl Biome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Biome::Fringe => "Fringe",
            Biome::Rust => "Rust",
            Biome::Green => "Green",
            Biome::Quiet => "Quiet",
            Biome::Teeth => "Teeth",
            Biome::Glow => "Glow",
            Biome::ArchiveScar => "Archive Scar",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Biome::Fringe => 0,
            Biome::Rust => 1,
            Biome::Green => 2,
            Biome::Quiet => 3,
            Biome::Teeth => 4,
            Biome::Glow => 5,
            Biome::ArchiveScar => 6,
        }
    }

    pub fn cycle(self, delta: i32) -> Self {
        let idx = self.index() as i32;
        let next = (idx + delta).rem_euclid(BIOMES.len() as i32) as usize;
        BIOMES[next]
    }
}

/// Biomes in the order the world is traversed.
pub const BIOMES: [Biome; 7] = [
    Biome::Fringe,
    Biome::Rust,
    Biome::Green,
    Biome::Quiet,
    Biome::Teeth,
    Biome::Glow,
    Biome::ArchiveScar,
];
