use std::sync::Arc;

use bracket_geometry::prelude::{Point, Rect};

use crate::{
    config::{PORTAL_HALF_EXTENT, PORTAL_SIZE, UNKNOWN_DUNGEON_NAME},
    data::{DungeonDefinition, FlagRequirement},
    registry::{self, ContentRegistry},
    world::Biome,
};

/// A world-placed entrance into a dungeon.
///
/// The dungeon is held by id and looked up on every read, so a portal placed
/// before the registry is seeded, or pointing at a retired id, still renders
/// with a fallback name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortalEntity {
    pub dungeon_id: String,
    pub position: Point,
    /// Not checked against the dungeon's own biome.
    pub biome: Biome,
    pub is_active: bool,
    /// Gates the portal itself, separately from the dungeon's unlock flag.
    pub required_flag: FlagRequirement,
}

impl PortalEntity {
    pub fn new<S: Into<String>>(dungeon_id: S, biome: Biome, position: Point) -> Self {
        Self {
            dungeon_id: dungeon_id.into(),
            position,
            biome,
            is_active: true,
            required_flag: FlagRequirement::None,
        }
    }

    pub fn with_required_flag<S: Into<String>>(mut self, flag: S) -> Self {
        self.required_flag = FlagRequirement::required(flag);
        self
    }

    /// 48x48 square centred on the current position.
    pub fn bounds(&self) -> Rect {
        Rect::with_size(
            self.position.x - PORTAL_HALF_EXTENT,
            self.position.y - PORTAL_HALF_EXTENT,
            PORTAL_SIZE,
            PORTAL_SIZE,
        )
    }

    pub fn contains(&self, point: Point) -> bool {
        self.bounds().point_in_rect(point)
    }

    pub fn dungeon(&self) -> Option<Arc<DungeonDefinition>> {
        registry::get(&self.dungeon_id)
    }

    pub fn dungeon_in(&self, registry: &ContentRegistry) -> Option<Arc<DungeonDefinition>> {
        registry.get(&self.dungeon_id)
    }

    pub fn display_name(&self) -> String {
        name_or_fallback(self.dungeon())
    }

    pub fn display_name_in(&self, registry: &ContentRegistry) -> String {
        name_or_fallback(self.dungeon_in(registry))
    }
}

fn name_or_fallback(dungeon: Option<Arc<DungeonDefinition>>) -> String {
    dungeon
        .map(|def| def.name.clone())
        .unwrap_or_else(|| UNKNOWN_DUNGEON_NAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_centred_on_position() {
        let portal = PortalEntity::new("fringe_sewers", Biome::Fringe, Point::new(100, 100));
        let bounds = portal.bounds();
        assert_eq!((bounds.x1, bounds.y1), (76, 76));
        assert_eq!((bounds.width(), bounds.height()), (48, 48));
    }

    #[test]
    fn bounds_follow_position_changes() {
        let mut portal = PortalEntity::new("fringe_sewers", Biome::Fringe, Point::new(100, 100));
        portal.position = Point::new(0, 10);
        let bounds = portal.bounds();
        assert_eq!((bounds.x1, bounds.y1), (-24, -14));
        assert!(portal.contains(Point::new(0, 10)));
        assert!(!portal.contains(Point::new(100, 100)));
    }

    #[test]
    fn hit_test_is_half_open() {
        let portal = PortalEntity::new("fringe_sewers", Biome::Fringe, Point::new(100, 100));
        assert!(portal.contains(Point::new(76, 76)));
        assert!(portal.contains(Point::new(123, 123)));
        assert!(!portal.contains(Point::new(124, 100)));
    }

    #[test]
    fn unknown_dungeon_uses_fallback_name() {
        let registry = ContentRegistry::with_catalog();
        let portal = PortalEntity::new("no_such_dungeon", Biome::Rust, Point::new(0, 0));
        assert!(portal.dungeon_in(&registry).is_none());
        assert_eq!(portal.display_name_in(&registry), UNKNOWN_DUNGEON_NAME);
        assert_eq!(portal.display_name(), UNKNOWN_DUNGEON_NAME);
    }

    #[test]
    fn portal_biome_may_differ_from_dungeon() {
        let registry = ContentRegistry::with_catalog();
        let portal = PortalEntity::new("rust_foundry", Biome::Fringe, Point::new(0, 0));
        let dungeon = portal.dungeon_in(&registry).unwrap();
        assert_eq!(dungeon.biome, Biome::Rust);
        assert_eq!(portal.biome, Biome::Fringe);
    }

    #[test]
    fn new_portals_are_active_and_ungated() {
        let portal = PortalEntity::new("fringe_sewers", Biome::Fringe, Point::new(3, 4));
        assert!(portal.is_active);
        assert_eq!(portal.required_flag, FlagRequirement::None);
        let gated = portal.with_required_flag("sewer_key");
        assert_eq!(gated.required_flag.flag(), Some("sewer_key"));
    }
}
