//! Dungeon content registry.
//!
//! [`ContentRegistry`] is an ordinary owned value. The free functions at the
//! bottom of this module wrap one process-wide instance behind a lock for code
//! that only holds a dungeon id, such as portals.

use std::{collections::HashSet, sync::Arc};

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use parking_lot::{RwLock, RwLockReadGuard, RwLockUpgradableReadGuard, RwLockWriteGuard};
use tracing::{debug, info, warn};

use crate::{
    data::{ContentError, DungeonDefinition, FlagRequirement, dungeons::builtin_catalog},
    world::Biome,
};

#[derive(Debug, Default)]
pub struct ContentRegistry {
    dungeons: IndexMap<String, Arc<DungeonDefinition>>,
    initialized: bool,
}

impl ContentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry already seeded with [`builtin_catalog`].
    pub fn with_catalog() -> Self {
        let mut registry = Self::new();
        registry.initialize();
        registry
    }

    /// Seeds the built-in catalog. Later calls do nothing.
    pub fn initialize(&mut self) {
        if self.initialized {
            return;
        }
        let seeded = builtin_catalog()
            .into_iter()
            .filter_map(|def| self.register(def).ok())
            .count();
        self.initialized = true;
        info!(seeded, "seeded dungeon catalog");
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Inserts `def`, replacing any entry with the same id wholesale.
    ///
    /// Definitions that break their room or level invariants are rejected and
    /// leave the registry untouched.
    pub fn register(&mut self, def: DungeonDefinition) -> Result<(), ContentError> {
        if let Err(err) = def.validate() {
            warn!(%err, "rejected dungeon definition");
            return Err(err);
        }
        let id = def.id.clone();
        if self.dungeons.insert(id.clone(), Arc::new(def)).is_some() {
            debug!(%id, "replaced dungeon definition");
        } else {
            debug!(%id, "registered dungeon definition");
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<Arc<DungeonDefinition>> {
        self.dungeons.get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.dungeons.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.dungeons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dungeons.is_empty()
    }

    /// Every definition in first-registration order.
    pub fn all(&self) -> Vec<Arc<DungeonDefinition>> {
        self.dungeons.values().cloned().collect()
    }

    pub fn by_biome(&self, biome: Biome) -> Vec<Arc<DungeonDefinition>> {
        self.filtered(|def| def.biome == biome)
    }

    /// Dungeons a player with `held_flags` at `player_level` may enter.
    pub fn available(
        &self,
        held_flags: &HashSet<String>,
        player_level: i32,
    ) -> Vec<Arc<DungeonDefinition>> {
        self.filtered(|def| def.is_available(held_flags, player_level))
    }

    /// Dungeons gated on exactly `flag`.
    pub fn unlocked_by(&self, flag: &str) -> Vec<Arc<DungeonDefinition>> {
        self.filtered(|def| def.required_flag.flag() == Some(flag))
    }

    /// Locked dungeons whose flag no registered dungeon grants on completion,
    /// as `(dungeon id, flag)` pairs.
    pub fn unlock_chain_issues(&self) -> Vec<(String, String)> {
        let granted: HashSet<String> = self
            .dungeons
            .values()
            .map(|def| def.completion_flag())
            .collect();
        self.dungeons
            .values()
            .filter(|def| !def.unlocked_by_default)
            .filter_map(|def| match &def.required_flag {
                FlagRequirement::Required(flag) if !granted.contains(flag) => {
                    Some((def.id.clone(), flag.clone()))
                }
                _ => None,
            })
            .collect()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let defs: Vec<&DungeonDefinition> =
            self.dungeons.values().map(|def| def.as_ref()).collect();
        serde_json::to_string_pretty(&defs)
    }

    fn filtered<F>(&self, mut keep: F) -> Vec<Arc<DungeonDefinition>>
    where
        F: FnMut(&DungeonDefinition) -> bool,
    {
        self.dungeons
            .values()
            .filter(|def| keep(def))
            .cloned()
            .collect()
    }
}

static REGISTRY: Lazy<RwLock<ContentRegistry>> =
    Lazy::new(|| RwLock::new(ContentRegistry::new()));

/// Seeds the process-wide registry. Safe to call from any thread, any number of times.
pub fn initialize() {
    REGISTRY.write().initialize();
}

/// Read access to the process-wide registry, seeding it on first use.
///
/// [`get`] stays lazy and reports nothing until something has seeded the registry.
pub fn global() -> RwLockReadGuard<'static, ContentRegistry> {
    let registry = REGISTRY.upgradable_read();
    if registry.is_initialized() {
        return RwLockUpgradableReadGuard::downgrade(registry);
    }
    let mut registry = RwLockUpgradableReadGuard::upgrade(registry);
    registry.initialize();
    RwLockWriteGuard::downgrade(registry)
}

pub fn register(def: DungeonDefinition) -> Result<(), ContentError> {
    REGISTRY.write().register(def)
}

pub fn get(id: &str) -> Option<Arc<DungeonDefinition>> {
    REGISTRY.read().get(id)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::world::BIOMES;

    fn gated(id: &str, min_level: i32, flag: &str) -> DungeonDefinition {
        let mut def = builtin_catalog().remove(0);
        def.id = id.to_string();
        def.min_level = min_level;
        def.max_level = min_level + 3;
        def.unlocked_by_default = false;
        def.required_flag = FlagRequirement::required(flag);
        def
    }

    fn flags(list: &[&str]) -> HashSet<String> {
        list.iter().map(|flag| flag.to_string()).collect()
    }

    fn ids(defs: &[Arc<DungeonDefinition>]) -> Vec<&str> {
        defs.iter().map(|def| def.id.as_str()).collect()
    }

    #[test]
    fn get_returns_registered_value() {
        let mut registry = ContentRegistry::new();
        let def = gated("vault", 10, "X");
        registry.register(def.clone()).unwrap();
        assert_eq!(registry.get("vault").as_deref(), Some(&def));
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn register_replaces_without_merging() {
        let mut registry = ContentRegistry::new();
        registry.register(gated("vault", 10, "X")).unwrap();
        let mut replacement = gated("vault", 4, "Y");
        replacement.name = "Replacement".to_string();
        replacement.regular_enemy_ids = vec!["only_one".to_string()];
        registry.register(replacement.clone()).unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("vault").as_deref(), Some(&replacement));
    }

    #[test]
    fn invalid_definition_is_rejected_and_not_stored() {
        let mut registry = ContentRegistry::new();
        let mut def = gated("broken", 10, "X");
        def.mid_boss_room = def.final_boss_room + 1;
        assert!(registry.register(def).is_err());
        assert!(!registry.contains("broken"));
    }

    #[test]
    fn all_keeps_insertion_order() {
        let mut registry = ContentRegistry::new();
        for id in ["c", "a", "b"] {
            registry.register(gated(id, 1, "X")).unwrap();
        }
        registry.register(gated("a", 2, "X")).unwrap();
        assert_eq!(ids(&registry.all()), vec!["c", "a", "b"]);
    }

    #[test]
    fn by_biome_partitions_the_catalog() {
        let registry = ContentRegistry::with_catalog();
        let mut total = 0;
        for biome in BIOMES {
            let subset = registry.by_biome(biome);
            assert!(subset.iter().all(|def| def.biome == biome));
            total += subset.len();
        }
        assert_eq!(total, registry.len());
    }

    #[test]
    fn by_biome_is_empty_for_unused_biome() {
        let mut registry = ContentRegistry::new();
        registry.register(gated("vault", 1, "X")).unwrap();
        assert!(registry.by_biome(Biome::Glow).is_empty());
    }

    #[test]
    fn available_honours_level_tolerance() {
        let mut registry = ContentRegistry::new();
        registry.register(gated("vault", 10, "X")).unwrap();

        assert_eq!(ids(&registry.available(&flags(&["X"]), 8)), vec!["vault"]);
        assert!(registry.available(&flags(&["X"]), 7).is_empty());
        assert!(registry.available(&flags(&[]), 40).is_empty());
        assert!(registry.available(&flags(&["Y"]), 40).is_empty());
    }

    #[test]
    fn default_unlock_ignores_flags_but_not_level() {
        let mut registry = ContentRegistry::new();
        let mut def = gated("vault", 10, "X");
        def.unlocked_by_default = true;
        registry.register(def).unwrap();

        assert_eq!(ids(&registry.available(&flags(&[]), 8)), vec!["vault"]);
        assert!(registry.available(&flags(&["X"]), 7).is_empty());
    }

    #[test]
    fn fresh_player_sees_only_the_sewers() {
        let registry = ContentRegistry::with_catalog();
        assert_eq!(
            ids(&registry.available(&HashSet::new(), 1)),
            vec!["fringe_sewers"]
        );
    }

    #[test]
    fn initialize_twice_matches_once() {
        let mut once = ContentRegistry::new();
        once.initialize();
        let mut twice = ContentRegistry::new();
        twice.initialize();
        twice.initialize();

        assert!(twice.is_initialized());
        assert_eq!(twice.len(), builtin_catalog().len());
        assert_eq!(ids(&once.all()), ids(&twice.all()));
    }

    #[test]
    fn extreme_minimum_level_does_not_overflow() {
        let mut registry = ContentRegistry::new();
        let mut def = gated("abyss", i32::MIN, "X");
        def.max_level = 0;
        def.unlocked_by_default = true;
        registry.register(def).unwrap();

        assert_eq!(ids(&registry.available(&flags(&[]), 1)), vec!["abyss"]);
        assert_eq!(ids(&registry.available(&flags(&[]), i32::MIN)), vec!["abyss"]);
    }

    #[test]
    fn initialize_keeps_entries_registered_beforehand() {
        let mut registry = ContentRegistry::new();
        registry.register(gated("custom", 1, "X")).unwrap();
        registry.initialize();
        assert!(registry.contains("custom"));
        assert_eq!(registry.len(), builtin_catalog().len() + 1);
    }

    #[test]
    fn builtin_chain_has_no_dangling_flags() {
        assert!(ContentRegistry::with_catalog().unlock_chain_issues().is_empty());
    }

    #[test]
    fn dangling_flag_is_reported() {
        let mut registry = ContentRegistry::with_catalog();
        registry
            .register(gated("orphan", 5, "never_granted"))
            .unwrap();
        assert_eq!(
            registry.unlock_chain_issues(),
            vec![("orphan".to_string(), "never_granted".to_string())]
        );
    }

    #[test]
    fn unlocked_by_follows_completion_flag() {
        let registry = ContentRegistry::with_catalog();
        let sewers = registry.get("fringe_sewers").unwrap();
        assert_eq!(
            ids(&registry.unlocked_by(&sewers.completion_flag())),
            vec!["fringe_depot"]
        );
    }

    #[test]
    fn json_export_lists_every_definition() {
        let registry = ContentRegistry::with_catalog();
        let json = registry.to_json().unwrap();
        let decoded: Vec<DungeonDefinition> = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.len(), registry.len());
        assert_eq!(decoded[0].name, "The Forgotten Sewers");
    }
}
