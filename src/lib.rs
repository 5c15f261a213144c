//! Dungeon content for Lazarus.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`data`] | Dungeon definitions and the built-in catalog |
//! | [`registry`] | Id-keyed registry with biome and availability views |
//! | [`world`] | Biomes, portals, and portal placements from level data |
//! | [`ecs`] | Portal entities hosted in a `specs` world |
//! | [`config`] | Tunables and the atlas browser's settings |

pub mod config;
pub mod data;
pub mod ecs;
pub mod registry;
pub mod world;
