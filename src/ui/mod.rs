pub mod game_common;
pub mod heist_scene;
pub mod screens;

use crate::assets::AssetState;
use crate::heist::{HeistGame, Screen};
use game_common::{render_status_bar, split_screen};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Smallest terminal the playfield is drawn in.
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 14;

/// Main UI drawing function: one screen plus the status bar.
pub fn draw_ui(frame: &mut Frame, game: &HeistGame, assets: &AssetState) {
    let size = frame.size();
    if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
        render_too_small(frame, size);
        return;
    }

    let (field, status) = split_screen(size);
    match game.screen {
        Screen::Intro => screens::render_intro(frame, field, game, assets),
        Screen::Playing => heist_scene::render_heist_scene(frame, field, game, assets.sprites()),
        Screen::GameOver => screens::render_game_over(frame, field, game, assets),
        Screen::Win => screens::render_win(frame, field, game),
    }
    render_status(frame, status, game, assets);
}

fn render_status(frame: &mut Frame, area: Rect, game: &HeistGame, assets: &AssetState) {
    match game.screen {
        Screen::Intro => {
            let (text, color) = match assets {
                AssetState::Loading(_) => ("Loading...", Color::DarkGray),
                AssetState::Ready(_) => ("Ready", Color::LightYellow),
                AssetState::Failed(_) => ("Assets missing", Color::Red),
            };
            render_status_bar(frame, area, text, color, &[("[Any]", "Start"), ("[Esc]", "Quit")]);
        }
        Screen::Playing => {
            let status = format!(
                "Run!  {}/{}  speed {:.1}",
                game.points, game.target_points, game.game_speed
            );
            render_status_bar(
                frame,
                area,
                &status,
                Color::LightYellow,
                &[("[Any]", "Jump"), ("[Esc]", "Quit")],
            );
        }
        Screen::GameOver => render_status_bar(
            frame,
            area,
            "Caught!",
            Color::Red,
            &[("[Click]/[R]", "Restart"), ("[Esc]", "Quit")],
        ),
        Screen::Win => render_status_bar(frame, area, "Escaped!", Color::Green, &[("[Esc]", "Quit")]),
    }
}

fn render_too_small(frame: &mut Frame, area: Rect) {
    let msg = format!("Terminal too small (need {}x{})", MIN_WIDTH, MIN_HEIGHT);
    let text = Paragraph::new(msg)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    frame.render_widget(text, area);
}
