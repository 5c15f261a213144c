use crate::world::Biome;

use super::{DungeonDefinition, FlagRequirement};

fn ids(list: &[&str]) -> Vec<String> {
    list.iter().map(|id| id.to_string()).collect()
}

/// Every dungeon shipped with the game, in traversal order.
///
/// Each biome runs three dungeons deep. The opener of a biome is gated on the
/// previous biome's last dungeon; the rest are gated on their predecessor's
/// completion flag.
pub fn builtin_catalog() -> Vec<DungeonDefinition> {
    let mut catalog = Vec::new();
    catalog.extend(fringe());
    catalog.extend(rust());
    catalog.extend(green());
    catalog.extend(quiet());
    catalog.extend(teeth());
    catalog.extend(glow());
    catalog.extend(archive_scar());
    catalog
}

fn fringe() -> Vec<DungeonDefinition> {
    vec![
        DungeonDefinition {
            id: "fringe_sewers".into(),
            name: "The Forgotten Sewers".into(),
            description: "Flooded tunnels beneath the shanty ring, where the first survivors dumped what they could not burn.".into(),
            biome: Biome::Fringe,
            min_level: 1,
            max_level: 4,
            room_count: 6,
            mid_boss_room: 3,
            final_boss_room: 6,
            regular_enemy_ids: ids(&["sewer_rat", "sludge_crawler", "scavenger_grunt"]),
            mid_boss_id: "bloated_rat_king".into(),
            mid_boss_name: "The Bloated Rat King".into(),
            final_boss_id: "sewer_warden".into(),
            final_boss_name: "Warden of the Outflow".into(),
            objective_text: "Clear the outflow and silence the Warden.".into(),
            base_exp_reward: 120,
            base_currency_reward: 40,
            ambient_color: "#4a5a3c".into(),
            unlocked_by_default: true,
            required_flag: FlagRequirement::None,
        },
        DungeonDefinition {
            id: "fringe_depot".into(),
            name: "Collapsed Transit Depot".into(),
            description: "A caved-in tram hub the scavenger crews fight over for copper wire.".into(),
            biome: Biome::Fringe,
            min_level: 3,
            max_level: 6,
            room_count: 7,
            mid_boss_room: 4,
            final_boss_room: 7,
            regular_enemy_ids: ids(&["scavenger_grunt", "wire_stripper", "feral_dog"]),
            mid_boss_id: "depot_foreman".into(),
            mid_boss_name: "Foreman Krell".into(),
            final_boss_id: "rail_crusher".into(),
            final_boss_name: "The Rail Crusher".into(),
            objective_text: "Reach the old dispatch office and break the crew's hold.".into(),
            base_exp_reward: 210,
            base_currency_reward: 65,
            ambient_color: "#6b5d4a".into(),
            unlocked_by_default: false,
            required_flag: FlagRequirement::required("fringe_sewers_cleared"),
        },
        DungeonDefinition {
            id: "fringe_warrens".into(),
            name: "Scavenger Warrens".into(),
            description: "Dug-out burrows stacked with salvage and the people willing to kill for it.".into(),
            biome: Biome::Fringe,
            min_level: 5,
            max_level: 8,
            room_count: 8,
            mid_boss_room: 4,
            final_boss_room: 8,
            regular_enemy_ids: ids(&["scavenger_grunt", "warren_sniper", "trap_rigger", "feral_dog"]),
            mid_boss_id: "twin_hooks".into(),
            mid_boss_name: "Twin Hooks".into(),
            final_boss_id: "scrap_matriarch".into(),
            final_boss_name: "Mother Scrap".into(),
            objective_text: "Unseat Mother Scrap and open the road to the foundries.".into(),
            base_exp_reward: 320,
            base_currency_reward: 95,
            ambient_color: "#7a6a52".into(),
            unlocked_by_default: false,
            required_flag: FlagRequirement::required("fringe_depot_cleared"),
        },
    ]
}

fn rust() -> Vec<DungeonDefinition> {
    vec![
        DungeonDefinition {
            id: "rust_foundry".into(),
            name: "The Cold Foundry".into(),
            description: "Idle furnaces where automated hands still try to pour metal that is no longer there.".into(),
            biome: Biome::Rust,
            min_level: 7,
            max_level: 10,
            room_count: 8,
            mid_boss_room: 4,
            final_boss_room: 8,
            regular_enemy_ids: ids(&["slag_drone", "rivet_hound", "foundry_arm"]),
            mid_boss_id: "crucible_tender".into(),
            mid_boss_name: "Crucible Tender".into(),
            final_boss_id: "forge_colossus".into(),
            final_boss_name: "The Forge Colossus".into(),
            objective_text: "Shut down the Colossus before the furnaces relight.".into(),
            base_exp_reward: 450,
            base_currency_reward: 130,
            ambient_color: "#8b3a1a".into(),
            unlocked_by_default: false,
            required_flag: FlagRequirement::required("fringe_warrens_cleared"),
        },
        DungeonDefinition {
            id: "rust_scrapyard".into(),
            name: "Oxide Scrapyard".into(),
            description: "Acres of corroded hulls, patrolled by things that eat iron.".into(),
            biome: Biome::Rust,
            min_level: 9,
            max_level: 12,
            room_count: 9,
            mid_boss_room: 5,
            final_boss_room: 9,
            regular_enemy_ids: ids(&["rust_mite", "rivet_hound", "scrap_golem", "oxide_swarm"]),
            mid_boss_id: "magnet_crane".into(),
            mid_boss_name: "The Magnet Crane".into(),
            final_boss_id: "oxide_queen".into(),
            final_boss_name: "The Oxide Queen".into(),
            objective_text: "Burn out the Oxide Queen's nest.".into(),
            base_exp_reward: 580,
            base_currency_reward: 160,
            ambient_color: "#a0522d".into(),
            unlocked_by_default: false,
            required_flag: FlagRequirement::required("rust_foundry_cleared"),
        },
        DungeonDefinition {
            id: "rust_smelter".into(),
            name: "Smelter Nine".into(),
            description: "The last working smelter, held by a cult that worships its heat.".into(),
            biome: Biome::Rust,
            min_level: 11,
            max_level: 14,
            room_count: 10,
            mid_boss_room: 5,
            final_boss_room: 10,
            regular_enemy_ids: ids(&["ember_acolyte", "slag_drone", "foundry_arm", "heat_shade"]),
            mid_boss_id: "bellows_priest".into(),
            mid_boss_name: "The Bellows Priest".into(),
            final_boss_id: "molten_saint".into(),
            final_boss_name: "The Molten Saint".into(),
            objective_text: "Quench Smelter Nine and scatter the cult.".into(),
            base_exp_reward: 720,
            base_currency_reward: 195,
            ambient_color: "#c1440e".into(),
            unlocked_by_default: false,
            required_flag: FlagRequirement::required("rust_scrapyard_cleared"),
        },
    ]
}

fn green() -> Vec<DungeonDefinition> {
    vec![
        DungeonDefinition {
            id: "green_greenhouse".into(),
            name: "Overgrown Greenhouse".into(),
            description: "Hydroponic bays that never stopped growing after the gardeners left.".into(),
            biome: Biome::Green,
            min_level: 13,
            max_level: 16,
            room_count: 8,
            mid_boss_room: 4,
            final_boss_room: 8,
            regular_enemy_ids: ids(&["vine_lasher", "spore_puff", "mulch_beetle"]),
            mid_boss_id: "irrigation_hulk".into(),
            mid_boss_name: "Irrigation Hulk".into(),
            final_boss_id: "bloom_mother".into(),
            final_boss_name: "The Bloom Mother".into(),
            objective_text: "Cut the Bloom Mother from her roots.".into(),
            base_exp_reward: 860,
            base_currency_reward: 220,
            ambient_color: "#3f7d3a".into(),
            unlocked_by_default: false,
            required_flag: FlagRequirement::required("rust_smelter_cleared"),
        },
        DungeonDefinition {
            id: "green_canopy".into(),
            name: "The Hanging Canopy".into(),
            description: "A forest grown through a collapsed arcology, thirty storeys of leaves and falling.".into(),
            biome: Biome::Green,
            min_level: 15,
            max_level: 18,
            room_count: 9,
            mid_boss_room: 4,
            final_boss_room: 9,
            regular_enemy_ids: ids(&["canopy_stalker", "vine_lasher", "glider_moth", "spore_puff"]),
            mid_boss_id: "strangler_fig".into(),
            mid_boss_name: "The Strangler".into(),
            final_boss_id: "canopy_tyrant".into(),
            final_boss_name: "Canopy Tyrant".into(),
            objective_text: "Climb to the crown and bring down the Tyrant.".into(),
            base_exp_reward: 1020,
            base_currency_reward: 260,
            ambient_color: "#2e8b57".into(),
            unlocked_by_default: false,
            required_flag: FlagRequirement::required("green_greenhouse_cleared"),
        },
        DungeonDefinition {
            id: "green_rootvault".into(),
            name: "Rootvault".into(),
            description: "A seed bank swallowed by a single root system that has learned to defend it.".into(),
            biome: Biome::Green,
            min_level: 17,
            max_level: 20,
            room_count: 10,
            mid_boss_room: 5,
            final_boss_room: 10,
            regular_enemy_ids: ids(&["root_horror", "mulch_beetle", "seed_sentinel", "canopy_stalker"]),
            mid_boss_id: "vault_keeper".into(),
            mid_boss_name: "The Vault Keeper".into(),
            final_boss_id: "elder_root".into(),
            final_boss_name: "The Elder Root".into(),
            objective_text: "Recover the seed archive from the Elder Root's heart.".into(),
            base_exp_reward: 1200,
            base_currency_reward: 300,
            ambient_color: "#556b2f".into(),
            unlocked_by_default: false,
            required_flag: FlagRequirement::required("green_canopy_cleared"),
        },
    ]
}

fn quiet() -> Vec<DungeonDefinition> {
    vec![
        DungeonDefinition {
            id: "quiet_library".into(),
            name: "The Hushed Library".into(),
            description: "Stacks where any sound above a whisper draws the librarians.".into(),
            biome: Biome::Quiet,
            min_level: 19,
            max_level: 22,
            room_count: 8,
            mid_boss_room: 4,
            final_boss_room: 8,
            regular_enemy_ids: ids(&["hush_wraith", "page_swarm", "silent_clerk"]),
            mid_boss_id: "head_librarian".into(),
            mid_boss_name: "The Head Librarian".into(),
            final_boss_id: "index_of_silence".into(),
            final_boss_name: "Index of Silence".into(),
            objective_text: "Retrieve the catalogue without waking the Index.".into(),
            base_exp_reward: 1400,
            base_currency_reward: 340,
            ambient_color: "#5c6b7a".into(),
            unlocked_by_default: false,
            required_flag: FlagRequirement::required("green_rootvault_cleared"),
        },
        DungeonDefinition {
            id: "quiet_cloister".into(),
            name: "Cloister of Still Bells".into(),
            description: "A monastery whose bells were cut from their ropes. The monks never left.".into(),
            biome: Biome::Quiet,
            min_level: 21,
            max_level: 24,
            room_count: 9,
            mid_boss_room: 5,
            final_boss_room: 9,
            regular_enemy_ids: ids(&["mute_monk", "hush_wraith", "bell_ghost", "candle_eater"]),
            mid_boss_id: "abbot_unspoken".into(),
            mid_boss_name: "The Unspoken Abbot".into(),
            final_boss_id: "great_bell".into(),
            final_boss_name: "The Great Bell".into(),
            objective_text: "Ring the Great Bell once and survive the answer.".into(),
            base_exp_reward: 1620,
            base_currency_reward: 385,
            ambient_color: "#708090".into(),
            unlocked_by_default: false,
            required_flag: FlagRequirement::required("quiet_library_cleared"),
        },
        DungeonDefinition {
            id: "quiet_hollow".into(),
            name: "The Listening Hollow".into(),
            description: "A sinkhole that swallows sound and, lately, the people who go looking for it.".into(),
            biome: Biome::Quiet,
            min_level: 23,
            max_level: 26,
            room_count: 10,
            mid_boss_room: 5,
            final_boss_room: 10,
            regular_enemy_ids: ids(&["echo_leech", "mute_monk", "candle_eater", "void_listener"]),
            mid_boss_id: "choir_of_none".into(),
            mid_boss_name: "Choir of None".into(),
            final_boss_id: "the_listener".into(),
            final_boss_name: "The Listener".into(),
            objective_text: "Descend to the bottom of the Hollow and speak.".into(),
            base_exp_reward: 1850,
            base_currency_reward: 430,
            ambient_color: "#434c5e".into(),
            unlocked_by_default: false,
            required_flag: FlagRequirement::required("quiet_cloister_cleared"),
        },
    ]
}

fn teeth() -> Vec<DungeonDefinition> {
    vec![
        DungeonDefinition {
            id: "teeth_maw".into(),
            name: "The Open Maw".into(),
            description: "A canyon lined with ridges of bone that close a little more each night.".into(),
            biome: Biome::Teeth,
            min_level: 25,
            max_level: 28,
            room_count: 8,
            mid_boss_room: 4,
            final_boss_room: 8,
            regular_enemy_ids: ids(&["bone_gnawer", "enamel_crawler", "gum_lurker"]),
            mid_boss_id: "jaw_sentinel".into(),
            mid_boss_name: "Jaw Sentinel".into(),
            final_boss_id: "maw_warden".into(),
            final_boss_name: "Warden of the Maw".into(),
            objective_text: "Cross the Maw before it shuts.".into(),
            base_exp_reward: 2100,
            base_currency_reward: 480,
            ambient_color: "#d8cbb0".into(),
            unlocked_by_default: false,
            required_flag: FlagRequirement::required("quiet_hollow_cleared"),
        },
        DungeonDefinition {
            id: "teeth_ossuary".into(),
            name: "Ossuary Ridge".into(),
            description: "A ridge built from the remains of everything the Maw has eaten.".into(),
            biome: Biome::Teeth,
            min_level: 27,
            max_level: 30,
            room_count: 9,
            mid_boss_room: 4,
            final_boss_room: 9,
            regular_enemy_ids: ids(&["bone_gnawer", "marrow_wisp", "ossuary_knight", "enamel_crawler"]),
            mid_boss_id: "marrow_collector".into(),
            mid_boss_name: "The Marrow Collector".into(),
            final_boss_id: "ridge_ossifex".into(),
            final_boss_name: "Ossifex".into(),
            objective_text: "Break Ossifex and loosen the ridge.".into(),
            base_exp_reward: 2380,
            base_currency_reward: 530,
            ambient_color: "#c2b280".into(),
            unlocked_by_default: false,
            required_flag: FlagRequirement::required("teeth_maw_cleared"),
        },
        DungeonDefinition {
            id: "teeth_gullet".into(),
            name: "The Gullet".into(),
            description: "The throat beneath the ridge. Warm, wet, and patient.".into(),
            biome: Biome::Teeth,
            min_level: 29,
            max_level: 32,
            room_count: 10,
            mid_boss_room: 5,
            final_boss_room: 10,
            regular_enemy_ids: ids(&["gum_lurker", "acid_polyp", "marrow_wisp", "ossuary_knight"]),
            mid_boss_id: "peristalt".into(),
            mid_boss_name: "Peristalt".into(),
            final_boss_id: "the_swallower".into(),
            final_boss_name: "The Swallower".into(),
            objective_text: "Cut your way out of the Swallower.".into(),
            base_exp_reward: 2680,
            base_currency_reward: 590,
            ambient_color: "#8e3b46".into(),
            unlocked_by_default: false,
            required_flag: FlagRequirement::required("teeth_ossuary_cleared"),
        },
    ]
}

fn glow() -> Vec<DungeonDefinition> {
    vec![
        DungeonDefinition {
            id: "glow_reactor".into(),
            name: "Reactor Seven".into(),
            description: "The containment failed decades ago. The light inside never faded.".into(),
            biome: Biome::Glow,
            min_level: 31,
            max_level: 34,
            room_count: 8,
            mid_boss_room: 4,
            final_boss_room: 8,
            regular_enemy_ids: ids(&["rad_ghoul", "isotope_wisp", "hazmat_husk"]),
            mid_boss_id: "coolant_beast".into(),
            mid_boss_name: "The Coolant Beast".into(),
            final_boss_id: "core_walker".into(),
            final_boss_name: "Core Walker".into(),
            objective_text: "Seal the core chamber behind the Core Walker.".into(),
            base_exp_reward: 3000,
            base_currency_reward: 650,
            ambient_color: "#7fff5f".into(),
            unlocked_by_default: false,
            required_flag: FlagRequirement::required("teeth_gullet_cleared"),
        },
        DungeonDefinition {
            id: "glow_cisterns".into(),
            name: "Luminous Cisterns".into(),
            description: "Runoff pools that shine in the dark and change whatever drinks from them.".into(),
            biome: Biome::Glow,
            min_level: 33,
            max_level: 36,
            room_count: 9,
            mid_boss_room: 5,
            final_boss_room: 9,
            regular_enemy_ids: ids(&["glow_eel", "isotope_wisp", "rad_ghoul", "bright_slime"]),
            mid_boss_id: "cistern_leviathan".into(),
            mid_boss_name: "Cistern Leviathan".into(),
            final_boss_id: "lumen_hydra".into(),
            final_boss_name: "The Lumen Hydra".into(),
            objective_text: "Drain the cisterns and starve the Hydra.".into(),
            base_exp_reward: 3350,
            base_currency_reward: 710,
            ambient_color: "#39ff14".into(),
            unlocked_by_default: false,
            required_flag: FlagRequirement::required("glow_reactor_cleared"),
        },
        DungeonDefinition {
            id: "glow_spire".into(),
            name: "The Burning Spire".into(),
            description: "A signal tower that still transmits, in light, to no one.".into(),
            biome: Biome::Glow,
            min_level: 35,
            max_level: 38,
            room_count: 10,
            mid_boss_room: 5,
            final_boss_room: 10,
            regular_enemy_ids: ids(&["hazmat_husk", "bright_slime", "signal_shade", "glow_eel"]),
            mid_boss_id: "relay_guardian".into(),
            mid_boss_name: "Relay Guardian".into(),
            final_boss_id: "beacon_prime".into(),
            final_boss_name: "Beacon Prime".into(),
            objective_text: "Silence the Spire's last transmission.".into(),
            base_exp_reward: 3720,
            base_currency_reward: 780,
            ambient_color: "#b4ff9a".into(),
            unlocked_by_default: false,
            required_flag: FlagRequirement::required("glow_cisterns_cleared"),
        },
    ]
}

fn archive_scar() -> Vec<DungeonDefinition> {
    vec![
        DungeonDefinition {
            id: "scar_index".into(),
            name: "The Broken Index".into(),
            description: "The outer shell of the Archive, where the records began to rewrite themselves.".into(),
            biome: Biome::ArchiveScar,
            min_level: 37,
            max_level: 40,
            room_count: 9,
            mid_boss_room: 4,
            final_boss_room: 9,
            regular_enemy_ids: ids(&["redaction_drone", "glitch_clerk", "data_revenant"]),
            mid_boss_id: "the_auditor".into(),
            mid_boss_name: "The Auditor".into(),
            final_boss_id: "index_corruptor".into(),
            final_boss_name: "Index Corruptor".into(),
            objective_text: "Restore the Index long enough to find the way in.".into(),
            base_exp_reward: 4100,
            base_currency_reward: 850,
            ambient_color: "#9b59b6".into(),
            unlocked_by_default: false,
            required_flag: FlagRequirement::required("glow_spire_cleared"),
        },
        DungeonDefinition {
            id: "scar_stacks".into(),
            name: "Shifting Stacks".into(),
            description: "Corridors of memory cores that rearrange whenever no one is watching.".into(),
            biome: Biome::ArchiveScar,
            min_level: 39,
            max_level: 42,
            room_count: 10,
            mid_boss_room: 5,
            final_boss_room: 10,
            regular_enemy_ids: ids(&["data_revenant", "loop_phantom", "redaction_drone", "scar_tendril"]),
            mid_boss_id: "stack_mover".into(),
            mid_boss_name: "The Stack Mover".into(),
            final_boss_id: "memory_eater".into(),
            final_boss_name: "The Memory Eater".into(),
            objective_text: "Pin the Stacks in place and destroy the Memory Eater.".into(),
            base_exp_reward: 4550,
            base_currency_reward: 930,
            ambient_color: "#7d3c98".into(),
            unlocked_by_default: false,
            required_flag: FlagRequirement::required("scar_index_cleared"),
        },
        DungeonDefinition {
            id: "scar_core".into(),
            name: "The Archive Core".into(),
            description: "The wound at the centre of the world. Lazarus began here.".into(),
            biome: Biome::ArchiveScar,
            min_level: 41,
            max_level: 45,
            room_count: 12,
            mid_boss_room: 6,
            final_boss_room: 12,
            regular_enemy_ids: ids(&["scar_tendril", "loop_phantom", "glitch_clerk", "archive_knight", "data_revenant"]),
            mid_boss_id: "first_archivist".into(),
            mid_boss_name: "The First Archivist".into(),
            final_boss_id: "lazarus_engine".into(),
            final_boss_name: "The Lazarus Engine".into(),
            objective_text: "Reach the Core and decide what the Archive remembers.".into(),
            base_exp_reward: 5200,
            base_currency_reward: 1100,
            ambient_color: "#4b0082".into(),
            unlocked_by_default: false,
            required_flag: FlagRequirement::required("scar_stacks_cleared"),
        },
    ]
}
