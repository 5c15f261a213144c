//! Cross-module behaviour of the process-wide registry and portals.
//!
//! Tests in this file share one registry. Anything registered here uses an id
//! that no other test reads, and catalog ids are never overwritten.

use std::collections::HashSet;
use std::thread;

use bracket_geometry::prelude::Point;
use lazarus_atlas::{
    config::UNKNOWN_DUNGEON_NAME,
    data::{DungeonDefinition, FlagRequirement, dungeons::builtin_catalog},
    ecs::PortalWorld,
    registry,
    world::{BIOMES, Biome, PortalEntity, level::demo_level},
};
use pretty_assertions::assert_eq;

fn catalog_ids() -> Vec<String> {
    builtin_catalog().into_iter().map(|def| def.id).collect()
}

fn custom(id: &str) -> DungeonDefinition {
    let mut def = builtin_catalog().remove(0);
    def.id = id.to_string();
    def.name = format!("Custom {id}");
    def
}

#[test]
fn portal_resolves_sewers_end_to_end() {
    registry::initialize();
    let portal = PortalEntity::new("fringe_sewers", Biome::Fringe, Point::new(100, 100));

    let dungeon = portal.dungeon().expect("sewers are part of the catalog");
    assert_eq!(dungeon.name, "The Forgotten Sewers");
    assert!(dungeon.unlocked_by_default);
    assert_eq!(portal.display_name(), "The Forgotten Sewers");
}

#[test]
fn unknown_portal_falls_back_after_initialization() {
    registry::initialize();
    let portal = PortalEntity::new("fringe_drowned_annex", Biome::Fringe, Point::new(0, 0));
    assert!(portal.dungeon().is_none());
    assert_eq!(portal.display_name(), UNKNOWN_DUNGEON_NAME);
}

#[test]
fn repeated_initialization_does_not_duplicate() {
    registry::initialize();
    registry::initialize();

    let registry = registry::global();
    let all: Vec<String> = registry.all().iter().map(|def| def.id.clone()).collect();
    let ids = catalog_ids();
    let seeded: Vec<&String> = all.iter().filter(|id| ids.contains(id)).collect();
    assert_eq!(seeded.len(), ids.len());
    assert_eq!(seeded, ids.iter().collect::<Vec<_>>());
}

#[test]
fn concurrent_initialization_seeds_once() {
    let handles: Vec<_> = (0..8).map(|_| thread::spawn(registry::initialize)).collect();
    for handle in handles {
        handle.join().unwrap();
    }
    let registry = registry::global();
    assert!(registry.is_initialized());
    for id in catalog_ids() {
        assert!(registry.contains(&id), "{id}");
    }
}

#[test]
fn global_register_then_get_and_replace() {
    let first = custom("itest_replace");
    registry::register(first.clone()).unwrap();
    assert_eq!(registry::get("itest_replace").as_deref(), Some(&first));

    let mut second = custom("itest_replace");
    second.name = "Second".to_string();
    second.regular_enemy_ids.clear();
    registry::register(second.clone()).unwrap();
    assert_eq!(registry::get("itest_replace").as_deref(), Some(&second));
}

#[test]
fn global_register_rejects_malformed_definition() {
    let mut bad = custom("itest_bad");
    bad.final_boss_room = bad.room_count + 5;
    assert!(registry::register(bad).is_err());
    assert!(registry::get("itest_bad").is_none());
}

#[test]
fn biome_views_cover_the_catalog() {
    registry::initialize();
    let registry = registry::global();
    for biome in BIOMES {
        let expected: Vec<String> = registry
            .all()
            .iter()
            .filter(|def| def.biome == biome)
            .map(|def| def.id.clone())
            .collect();
        let actual: Vec<String> = registry
            .by_biome(biome)
            .iter()
            .map(|def| def.id.clone())
            .collect();
        assert_eq!(actual, expected, "{}", biome.as_str());
    }
}

#[test]
fn clearing_a_dungeon_opens_the_next_one() {
    registry::initialize();
    let registry = registry::global();
    let sewers = registry.get("fringe_sewers").unwrap();
    let depot = registry.get("fringe_depot").unwrap();

    let mut held = HashSet::new();
    assert!(!depot.is_available(&held, depot.min_level));

    held.insert(sewers.completion_flag());
    assert!(depot.is_available(&held, depot.min_level - 2));
    assert!(!depot.is_available(&held, depot.min_level - 3));
    assert_eq!(
        depot.required_flag,
        FlagRequirement::required("fringe_sewers_cleared")
    );
}

#[test]
fn demo_level_reports_its_stale_portal() {
    registry::initialize();
    let mut world = PortalWorld::new();
    world.spawn_from_placements(demo_level());

    let unresolved = world.unresolved_portals();
    assert_eq!(unresolved.len(), 1);
    let stale = world.portal(unresolved[0]).unwrap();
    assert_eq!(stale.dungeon_id, "fringe_drowned_annex");
    assert_eq!(stale.display_name(), UNKNOWN_DUNGEON_NAME);

    let hits = world.portals_at(Point::new(120, 240));
    assert_eq!(hits.len(), 1);
    assert_eq!(
        world.portal(hits[0]).unwrap().display_name(),
        "The Forgotten Sewers"
    );
}
