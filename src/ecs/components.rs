use specs::prelude::{Component, NullStorage, VecStorage};

use crate::world::PortalEntity;

impl Component for PortalEntity {
    type Storage = VecStorage<Self>;
}

/// Marks portals whose dungeon id was unknown to the registry when spawned.
#[derive(Default)]
pub struct UnresolvedTag;

impl Component for UnresolvedTag {
    type Storage = NullStorage<Self>;
}
