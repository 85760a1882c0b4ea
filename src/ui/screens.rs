//! Static screens: intro, game over and win.

use super::game_common::{CellBuffer, WorldMapping};
use crate::assets::{AssetKey, AssetState};
use crate::heist::{HeistGame, Hitbox};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier},
    Frame,
};

const WIN_BACKDROP: Color = Color::Rgb(240, 210, 100);

/// Title screen. Shows load progress until the asset batch is done.
pub fn build_intro(area: Rect, game: &HeistGame, assets: &AssetState) -> CellBuffer {
    let mapping = WorldMapping::new(Rect::new(0, 0, area.width, area.height), game.viewport);
    let mut buffer = CellBuffer::new(area.width, area.height);
    buffer.fill(Color::White);

    if let Some(mockup) = assets.sprites().and_then(|s| s.get(AssetKey::WebMockup)) {
        let w = game.viewport.width;
        let h = game.viewport.height;
        let (col, row, cw, ch) = mapping.cell_box(&Hitbox::new(w * 0.2, h * 0.55, w * 0.6, h * 0.4));
        buffer.stamp_sprite(mockup, col, row, cw, ch, AssetKey::WebMockup.color());
    }

    buffer.put_centered(mapping.row(200.0), "Museum Heist: WiFi Gone", Color::Black, Modifier::BOLD);
    buffer.put_centered(
        mapping.row(250.0),
        &format!("Reach {} points to escape the museum", game.target_points),
        Color::Black,
        Modifier::empty(),
    );

    let prompt_row = mapping.row(350.0);
    match assets {
        AssetState::Loading(_) => {
            buffer.put_centered(prompt_row, "Loading assets...", Color::DarkGray, Modifier::ITALIC)
        }
        AssetState::Ready(_) => {
            buffer.put_centered(prompt_row, "Press any key to start", Color::Black, Modifier::empty())
        }
        AssetState::Failed(err) => {
            buffer.put_centered(prompt_row, "Could not load assets", Color::Red, Modifier::BOLD);
            buffer.put_centered(prompt_row + 1, &err.to_string(), Color::Red, Modifier::empty());
        }
    }
    buffer
}

/// Game-over screen with the restart icon at its clickable rectangle.
pub fn build_game_over(area: Rect, game: &HeistGame, assets: &AssetState) -> CellBuffer {
    let mapping = WorldMapping::new(Rect::new(0, 0, area.width, area.height), game.viewport);
    let mut buffer = CellBuffer::new(area.width, area.height);
    buffer.fill(Color::White);

    buffer.put_centered(mapping.row(200.0), "GAME OVER", Color::Black, Modifier::BOLD);
    buffer.put_centered(
        mapping.row(260.0),
        &format!("Points: {}   Best: {}", game.points, game.best_points),
        Color::DarkGray,
        Modifier::empty(),
    );

    // Only cells a click would resolve into the icon
    let (col, row, w, h) = mapping.inner_cell_box(&game.viewport.restart_icon());
    match assets.sprites().and_then(|s| s.get(AssetKey::Reset)) {
        Some(icon) => buffer.stamp_sprite(icon, col, row, w, h, AssetKey::Reset.color()),
        None => buffer.stamp_block(col, row, w, h, AssetKey::Reset.color()),
    }
    buffer.put_centered(
        row + h as i32 + 1,
        "Click the icon or press R to try again",
        Color::DarkGray,
        Modifier::empty(),
    );
    buffer
}

/// Victory screen.
pub fn build_win(area: Rect, game: &HeistGame) -> CellBuffer {
    let mapping = WorldMapping::new(Rect::new(0, 0, area.width, area.height), game.viewport);
    let mut buffer = CellBuffer::new(area.width, area.height);
    buffer.fill(WIN_BACKDROP);

    buffer.put_centered(mapping.row(220.0), "Congratulations!", Color::Green, Modifier::BOLD);
    buffer.put_centered(
        mapping.row(270.0),
        "WiFi has been successfully restored.",
        Color::Black,
        Modifier::empty(),
    );
    buffer.put_centered(
        mapping.row(320.0),
        "SECRET CODE: AHA - All Hail Avocados",
        Color::Magenta,
        Modifier::BOLD,
    );
    buffer
}

pub fn render_intro(frame: &mut Frame, area: Rect, game: &HeistGame, assets: &AssetState) {
    build_intro(area, game, assets).render(frame, area);
}

pub fn render_game_over(frame: &mut Frame, area: Rect, game: &HeistGame, assets: &AssetState) {
    build_game_over(area, game, assets).render(frame, area);
}

pub fn render_win(frame: &mut Frame, area: Rect, game: &HeistGame) {
    build_win(area, game).render(frame, area);
}
