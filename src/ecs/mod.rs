pub mod components;

use bracket_geometry::prelude::Point;
use smallvec::SmallVec;
use specs::prelude::{Builder, Entity, Join, World as SpecsWorld, WorldExt};
use tracing::{debug, warn};

use crate::{
    registry::{self, ContentRegistry},
    world::{PortalEntity, level::PortalPlacement},
};

use self::components::UnresolvedTag;

/// The game-world side of portals: owns every placed portal as an entity.
///
/// Portals only ever reach the registry through their dungeon id.
pub struct PortalWorld {
    specs_world: SpecsWorld,
}

impl Default for PortalWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl PortalWorld {
    pub fn new() -> Self {
        let mut specs_world = SpecsWorld::new();
        specs_world.register::<PortalEntity>();
        specs_world.register::<UnresolvedTag>();
        Self { specs_world }
    }

    /// Spawns `portal`, checking its dungeon id against the process-wide registry.
    pub fn spawn_portal(&mut self, portal: PortalEntity) -> Entity {
        let resolved = registry::global().contains(&portal.dungeon_id);
        self.spawn(portal, resolved)
    }

    pub fn spawn_portal_in(&mut self, portal: PortalEntity, registry: &ContentRegistry) -> Entity {
        let resolved = registry.contains(&portal.dungeon_id);
        self.spawn(portal, resolved)
    }

    pub fn spawn_from_placements<I>(&mut self, placements: I) -> Vec<Entity>
    where
        I: IntoIterator<Item = PortalPlacement>,
    {
        placements
            .into_iter()
            .map(|placement| self.spawn_portal(placement.into_portal()))
            .collect()
    }

    fn spawn(&mut self, portal: PortalEntity, resolved: bool) -> Entity {
        if resolved {
            debug!(dungeon = %portal.dungeon_id, x = portal.position.x, y = portal.position.y, "placed portal");
        } else {
            warn!(dungeon = %portal.dungeon_id, "portal references unknown dungeon");
        }
        let builder = self.specs_world.create_entity().with(portal);
        if resolved {
            builder.build()
        } else {
            builder.with(UnresolvedTag).build()
        }
    }

    pub fn portal(&self, entity: Entity) -> Option<PortalEntity> {
        let portals = self.specs_world.read_component::<PortalEntity>();
        portals.get(entity).cloned()
    }

    pub fn len(&self) -> usize {
        let portals = self.specs_world.read_component::<PortalEntity>();
        (&portals).join().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Active portals whose bounds contain `point`.
    pub fn portals_at(&self, point: Point) -> SmallVec<[Entity; 4]> {
        let entities = self.specs_world.entities();
        let portals = self.specs_world.read_component::<PortalEntity>();
        (&entities, &portals)
            .join()
            .filter(|(_, portal)| portal.is_active && portal.contains(point))
            .map(|(entity, _)| entity)
            .collect()
    }

    pub fn set_active(&mut self, entity: Entity, active: bool) -> bool {
        let mut portals = self.specs_world.write_component::<PortalEntity>();
        match portals.get_mut(entity) {
            Some(portal) => {
                portal.is_active = active;
                true
            }
            None => false,
        }
    }

    pub fn move_portal(&mut self, entity: Entity, point: Point) -> bool {
        let mut portals = self.specs_world.write_component::<PortalEntity>();
        match portals.get_mut(entity) {
            Some(portal) => {
                portal.position = point;
                true
            }
            None => false,
        }
    }

    pub fn each_portal<F>(&self, mut f: F)
    where
        F: FnMut(Entity, &PortalEntity),
    {
        let entities = self.specs_world.entities();
        let portals = self.specs_world.read_component::<PortalEntity>();
        for (entity, portal) in (&entities, &portals).join() {
            f(entity, portal);
        }
    }

    /// Portals flagged at spawn time as pointing at an unknown dungeon.
    pub fn unresolved_portals(&self) -> Vec<Entity> {
        let entities = self.specs_world.entities();
        let unresolved = self.specs_world.read_component::<UnresolvedTag>();
        (&entities, &unresolved)
            .join()
            .map(|(entity, _)| entity)
            .collect()
    }
}
