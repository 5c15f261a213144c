mod render;

use std::collections::HashSet;

use bracket_terminal::prelude::*;
use lazarus_atlas::{
    config::AtlasConfig,
    ecs::PortalWorld,
    registry,
    world::{
        Biome, biome_color,
        level::{demo_level, load_placements_from},
    },
};
use render::{BiomeRing, ListEntry, draw_detail, draw_dungeon_list, draw_portals};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const LIST_TOP: i32 = 7;
const DETAIL_TOP: i32 = 15;
const PORTALS_TOP: i32 = 28;
const MAX_PORTAL_LINES: usize = 12;
const MAX_LEVEL: i32 = 50;

struct AtlasState {
    hud: BiomeRing,
    portals: PortalWorld,
    active_biome: Biome,
    selected: usize,
    player_level: i32,
    held_flags: HashSet<String>,
}

impl AtlasState {
    fn new(config: &AtlasConfig) -> Self {
        let mut portals = PortalWorld::new();
        let placements = match &config.level_file {
            Some(path) => load_placements_from(path).unwrap_or_else(|err| {
                warn!(%err, "falling back to the demo level");
                demo_level()
            }),
            None => demo_level(),
        };
        portals.spawn_from_placements(placements);

        Self {
            hud: BiomeRing::new(),
            portals,
            active_biome: config.start_biome,
            selected: 0,
            player_level: config.player_level.clamp(1, MAX_LEVEL),
            held_flags: config.held_flag_set(),
        }
    }

    fn entries(&self) -> Vec<ListEntry> {
        let registry = registry::global();
        registry
            .by_biome(self.active_biome)
            .into_iter()
            .map(|dungeon| ListEntry {
                available: dungeon.is_available(&self.held_flags, self.player_level),
                cleared: self.held_flags.contains(&dungeon.completion_flag()),
                dungeon,
            })
            .collect()
    }

    fn portal_lines(&self) -> Vec<(String, RGB)> {
        let mut lines = Vec::new();
        self.portals.each_portal(|_, portal| {
            if lines.len() >= MAX_PORTAL_LINES {
                return;
            }
            let state = if !portal.is_active {
                "dormant"
            } else if portal.required_flag.permits(&self.held_flags) {
                "open"
            } else {
                "barred"
            };
            lines.push((
                format!(
                    "{:<28} {:>5},{:<5} {:<12} {state}",
                    portal.display_name(),
                    portal.position.x,
                    portal.position.y,
                    portal.biome.as_str()
                ),
                biome_color(portal.biome),
            ));
        });
        lines
    }

    fn handle_input(&mut self, ctx: &mut BTerm) {
        if let Some(key) = ctx.key {
            match key {
                VirtualKeyCode::Tab => self.cycle_biome(1),
                VirtualKeyCode::Back => self.cycle_biome(-1),
                VirtualKeyCode::Up | VirtualKeyCode::K => self.move_selection(-1),
                VirtualKeyCode::Down | VirtualKeyCode::J => self.move_selection(1),
                VirtualKeyCode::Equals => self.shift_level(1),
                VirtualKeyCode::Minus => self.shift_level(-1),
                VirtualKeyCode::F => self.toggle_selected_clear(),
                VirtualKeyCode::Escape | VirtualKeyCode::Q => ctx.quit(),
                _ => {}
            }
        }
    }

    fn cycle_biome(&mut self, delta: i32) {
        self.active_biome = self.active_biome.cycle(delta);
        self.selected = 0;
    }

    fn move_selection(&mut self, delta: i32) {
        let count = self.entries().len() as i32;
        if count == 0 {
            return;
        }
        self.selected = (self.selected as i32 + delta).rem_euclid(count) as usize;
    }

    fn shift_level(&mut self, delta: i32) {
        self.player_level = (self.player_level + delta).clamp(1, MAX_LEVEL);
    }

    fn toggle_selected_clear(&mut self) {
        let entries = self.entries();
        let Some(entry) = entries.get(self.selected) else {
            return;
        };
        let flag = entry.dungeon.completion_flag();
        if !self.held_flags.remove(&flag) {
            info!(%flag, "granted flag");
            self.held_flags.insert(flag);
        }
    }
}

impl GameState for AtlasState {
    fn tick(&mut self, ctx: &mut BTerm) {
        self.handle_input(ctx);
        ctx.cls();
        self.hud.draw(
            ctx,
            self.active_biome,
            self.player_level,
            self.held_flags.len(),
        );
        let entries = self.entries();
        draw_dungeon_list(ctx, &entries, self.selected, LIST_TOP);
        if let Some(entry) = entries.get(self.selected) {
            draw_detail(ctx, &entry.dungeon, DETAIL_TOP);
        }
        draw_portals(ctx, &self.portal_lines(), PORTALS_TOP);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> BError {
    init_tracing();
    let config = AtlasConfig::from_env().unwrap_or_else(|err| {
        warn!(%err, "using default atlas config");
        AtlasConfig::default()
    });

    registry::initialize();
    for (dungeon, flag) in registry::global().unlock_chain_issues() {
        warn!(%dungeon, %flag, "no dungeon grants this unlock flag");
    }

    let context = BTermBuilder::simple80x50()
        .with_title("Lazarus Atlas")
        .build()?;
    let state = AtlasState::new(&config);
    main_loop(context, state)
}
