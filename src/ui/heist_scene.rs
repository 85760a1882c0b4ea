//! Playfield rendering for a run in progress.
//!
//! Draw order, back to front: two background tiles, the thief,
//! every obstacle, then the points counter on top.

use super::game_common::{CellBuffer, WorldMapping};
use crate::assets::{AssetKey, SpriteSheet};
use crate::heist::{HeistGame, Hitbox, ObstacleKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier},
    Frame,
};

const FLOOR_CHAR: char = '\u{2593}'; // ▓
const FLOOR_FG: Color = Color::Rgb(90, 70, 50);
const FLOOR_BG: Color = Color::Rgb(50, 40, 30);

/// Render the scrolling playfield into `area`.
pub fn render_heist_scene(frame: &mut Frame, area: Rect, game: &HeistGame, sprites: Option<&SpriteSheet>) {
    if area.width < 10 || area.height < 4 {
        return;
    }
    let buffer = build_playfield(area, game, sprites);
    buffer.render(frame, area);
}

/// Fill a cell buffer with the current frame. Split out for tests.
pub fn build_playfield(area: Rect, game: &HeistGame, sprites: Option<&SpriteSheet>) -> CellBuffer {
    let mapping = WorldMapping::new(Rect::new(0, 0, area.width, area.height), game.viewport);
    let mut buffer = CellBuffer::new(area.width, area.height);
    let width = game.viewport.width;
    let height = game.viewport.height;

    // ── Background: two tiles side by side for a seamless wrap ───────
    for tile_x in [game.background_x, game.background_x + width] {
        stamp(
            &mut buffer,
            &mapping,
            sprites,
            AssetKey::Background,
            &Hitbox::new(tile_x, 0.0, width, height),
        );
    }

    // ── Floor below the runner's feet ────────────────────────────────
    let floor_row = mapping.row(game.ground_y + game.player.height);
    buffer.fill_rows(floor_row, area.height as i32, FLOOR_CHAR, FLOOR_FG, FLOOR_BG);

    // ── Thief ────────────────────────────────────────────────────────
    stamp(
        &mut buffer,
        &mapping,
        sprites,
        AssetKey::Thief,
        &game.player.hitbox(),
    );

    // ── Obstacles ────────────────────────────────────────────────────
    for obstacle in &game.obstacles {
        stamp(
            &mut buffer,
            &mapping,
            sprites,
            obstacle_asset(obstacle.kind),
            &obstacle.bounds(),
        );
    }

    // ── Points (top-right) and progress bar ──────────────────────────
    let label = format!("Points: {}", game.points);
    let label_len = label.chars().count() as i32;
    let col = mapping
        .col(width - 150.0)
        .min(area.width as i32 - label_len - 1)
        .max(0);
    let row = mapping.row(20.0).max(0);
    buffer.put_str(col, row, &label, Color::Black, Modifier::BOLD);

    let bar_width = 12usize;
    let filled = (game.progress() * bar_width as f64).round() as usize;
    let bar: String = (0..bar_width)
        .map(|i| if i < filled { '\u{2588}' } else { '\u{2591}' })
        .collect();
    buffer.put_str(col, row + 1, &format!("[{}]", bar), Color::DarkGray, Modifier::empty());

    buffer
}

pub fn obstacle_asset(kind: ObstacleKind) -> AssetKey {
    match kind {
        ObstacleKind::Cop => AssetKey::Cop,
        ObstacleKind::Sensor => AssetKey::Sensor,
        ObstacleKind::Laser => AssetKey::Laser,
    }
}

/// Draw one asset stretched over a world box; a solid block if it is missing.
fn stamp(
    buffer: &mut CellBuffer,
    mapping: &WorldMapping,
    sprites: Option<&SpriteSheet>,
    key: AssetKey,
    world_box: &Hitbox,
) {
    let (col, row, w, h) = mapping.cell_box(world_box);
    match sprites.and_then(|s| s.get(key)) {
        Some(sprite) => buffer.stamp_sprite(sprite, col, row, w, h, key.color()),
        None if key != AssetKey::Background => buffer.stamp_block(col, row, w, h, key.color()),
        None => {}
    }
}
