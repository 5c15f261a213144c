use std::sync::Arc;

use bracket_terminal::prelude::*;
use lazarus_atlas::{
    data::{DungeonDefinition, RoomRole},
    world::{BIOMES, Biome, biome_color},
};

const LABEL_STRIDE: i32 = 10;

pub struct BiomeRing;

/// Column of the marker glyph for the biome at `idx`; its label starts two cells later.
fn label_column(idx: usize) -> i32 {
    2 + idx as i32 * LABEL_STRIDE
}

impl BiomeRing {
    pub const fn new() -> Self {
        Self
    }

    pub fn draw(&self, ctx: &mut BTerm, active: Biome, player_level: i32, held_flags: usize) {
        let (width, _) = ctx.get_char_size();
        ctx.draw_box(0, 0, width as i32 - 1, 5, RGB::named(GRAY), RGB::named(BLACK));
        ctx.print_color(
            2,
            1,
            RGB::named(WHITE),
            RGB::named(BLACK),
            format!("Lazarus Atlas · Level {player_level} · {held_flags} flags held"),
        );

        for (idx, biome) in BIOMES.iter().enumerate() {
            let x = label_column(idx);
            let (fg, glyph) = if *biome == active {
                (biome_color(*biome), '*')
            } else {
                (RGB::named(DARK_GRAY), '·')
            };
            ctx.set(x, 3, fg, RGB::named(BLACK), glyph as u16);
            ctx.print_color(x + 2, 3, fg, RGB::named(BLACK), biome.as_str());
        }
    }
}

pub struct ListEntry {
    pub dungeon: Arc<DungeonDefinition>,
    pub available: bool,
    pub cleared: bool,
}

pub fn draw_dungeon_list(ctx: &mut BTerm, entries: &[ListEntry], selected: usize, top: i32) {
    ctx.print_color(2, top, RGB::named(WHITE), RGB::named(BLACK), "Dungeons");
    if entries.is_empty() {
        ctx.print_color(
            4,
            top + 2,
            RGB::named(DARK_GRAY),
            RGB::named(BLACK),
            "Nothing charted here yet.",
        );
        return;
    }
    for (row, entry) in entries.iter().enumerate() {
        let y = top + 2 + row as i32 * 2;
        let marker = if row == selected { '>' } else { ' ' };
        let fg = if entry.available {
            entry.dungeon.ambient_rgb()
        } else {
            RGB::named(DARK_GRAY)
        };
        let status = match (entry.available, entry.cleared) {
            (_, true) => "cleared",
            (true, false) => "open",
            (false, false) => "locked",
        };
        ctx.print_color(
            2,
            y,
            fg,
            RGB::named(BLACK),
            format!(
                "{marker} {:<28} {:<9} {status}",
                entry.dungeon.name,
                entry.dungeon.level_band_label()
            ),
        );
        draw_room_strip(ctx, &entry.dungeon, 6, y + 1);
    }
}

fn draw_room_strip(ctx: &mut BTerm, dungeon: &DungeonDefinition, x: i32, y: i32) {
    for room in 1..=dungeon.room_count {
        let (glyph, fg) = match dungeon.room_role(room) {
            Some(RoomRole::MidBoss) => ('m', RGB::named(ORANGE)),
            Some(RoomRole::FinalBoss) => ('B', RGB::named(RED)),
            _ => ('o', RGB::named(GRAY)),
        };
        ctx.set(x + room as i32 - 1, y, fg, RGB::named(BLACK), glyph as u16);
    }
}

pub fn draw_detail(ctx: &mut BTerm, dungeon: &DungeonDefinition, top: i32) {
    let (width, _) = ctx.get_char_size();
    let left = 2;
    ctx.draw_box(
        0,
        top,
        width as i32 - 1,
        11,
        RGB::named(DARK_GRAY),
        RGB::named(BLACK),
    );
    ctx.set(
        left,
        top + 1,
        dungeon.ambient_rgb(),
        dungeon.ambient_rgb(),
        b' ' as u16,
    );
    ctx.print_color(
        left + 2,
        top + 1,
        RGB::named(WHITE),
        RGB::named(BLACK),
        format!("{} ({})", dungeon.name, dungeon.biome.as_str()),
    );
    let lines = [
        dungeon.description.clone(),
        format!("Objective: {}", dungeon.objective_text),
        format!(
            "Rooms {} · mid boss {} in room {} · {} in room {}",
            dungeon.room_count,
            dungeon.mid_boss_name,
            dungeon.mid_boss_room,
            dungeon.final_boss_name,
            dungeon.final_boss_room
        ),
        format!("Enemies: {}", dungeon.regular_enemy_ids.join(", ")),
        format!(
            "Rewards: {} exp · {} scrip",
            dungeon.base_exp_reward, dungeon.base_currency_reward
        ),
        match dungeon.required_flag.flag() {
            _ if dungeon.unlocked_by_default => "Unlock: open from the start".to_string(),
            Some(flag) => format!("Unlock: {flag}"),
            None => "Unlock: sealed".to_string(),
        },
    ];
    for (row, line) in lines.iter().enumerate() {
        ctx.print(left, top + 3 + row as i32, line);
    }
}

pub fn draw_portals(ctx: &mut BTerm, lines: &[(String, RGB)], top: i32) {
    ctx.print_color(2, top, RGB::named(WHITE), RGB::named(BLACK), "Placed portals");
    for (row, (line, color)) in lines.iter().enumerate() {
        ctx.print_color(4, top + 1 + row as i32, *color, RGB::named(BLACK), line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn biome_labels_fit_an_80_column_console() {
        for (idx, biome) in BIOMES.iter().enumerate() {
            let end = label_column(idx) + 2 + biome.as_str().len() as i32;
            assert!(end <= 79, "{} ends at column {end}", biome.as_str());
        }
    }

    #[test]
    fn biome_labels_do_not_overlap() {
        for idx in 1..BIOMES.len() {
            let previous_end = label_column(idx - 1) + 2 + BIOMES[idx - 1].as_str().len() as i32;
            assert!(previous_end < label_column(idx));
        }
    }
}
