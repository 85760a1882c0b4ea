//! Terminal input mapping.
//!
//! Turns raw `crossterm` events into `HeistInput`. Keys are bound by what they
//! mean to the game, not by screen; `process_input` decides what each does.

use crate::heist::HeistInput;
use crate::ui::game_common::WorldMapping;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Map one terminal event. `None` for events the game ignores.
pub fn map_event(event: &Event, mapping: &WorldMapping) -> Option<HeistInput> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse, mapping),
        _ => None,
    }
}

fn map_key(key: &KeyEvent) -> Option<HeistInput> {
    // Windows reports releases too; only presses count
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let input = match key.code {
        KeyCode::Esc => HeistInput::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => HeistInput::Quit,
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => HeistInput::Restart,
        _ => HeistInput::AnyKey,
    };
    Some(input)
}

fn map_mouse(mouse: &MouseEvent, mapping: &WorldMapping) -> Option<HeistInput> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    let (x, y) = mapping.to_world(mouse.column, mouse.row)?;
    Some(HeistInput::Click { x, y })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heist::Viewport;
    use crossterm::event::KeyEventState;
    use ratatui::layout::Rect;

    fn mapping() -> WorldMapping {
        WorldMapping::new(Rect::new(0, 0, 80, 36), Viewport::default())
    }

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    fn click(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_any_key() {
        let m = mapping();
        assert_eq!(
            map_event(&key(KeyCode::Char(' '), KeyEventKind::Press), &m),
            Some(HeistInput::AnyKey)
        );
        assert_eq!(
            map_event(&key(KeyCode::Up, KeyEventKind::Press), &m),
            Some(HeistInput::AnyKey)
        );
    }

    #[test]
    fn test_release_ignored() {
        assert_eq!(
            map_event(&key(KeyCode::Char(' '), KeyEventKind::Release), &mapping()),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        let m = mapping();
        assert_eq!(
            map_event(&key(KeyCode::Esc, KeyEventKind::Press), &m),
            Some(HeistInput::Quit)
        );
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(map_event(&ctrl_c, &m), Some(HeistInput::Quit));
        // Plain 'c' is just a key
        assert_eq!(
            map_event(&key(KeyCode::Char('c'), KeyEventKind::Press), &m),
            Some(HeistInput::AnyKey)
        );
    }

    #[test]
    fn test_restart_keys() {
        let m = mapping();
        assert_eq!(
            map_event(&key(KeyCode::Enter, KeyEventKind::Press), &m),
            Some(HeistInput::Restart)
        );
        assert_eq!(
            map_event(&key(KeyCode::Char('R'), KeyEventKind::Press), &m),
            Some(HeistInput::Restart)
        );
    }

    #[test]
    fn test_left_click_maps_to_world() {
        let m = mapping();
        let input = map_event(&click(MouseEventKind::Down(MouseButton::Left), 40, 19), &m);
        match input {
            Some(HeistInput::Click { x, y }) => {
                assert!((x - 648.0).abs() < 1e-9);
                assert!((y - 390.0).abs() < 1e-9);
            }
            other => panic!("expected click, got {:?}", other),
        }
    }

    #[test]
    fn test_other_mouse_events_ignored() {
        let m = mapping();
        assert_eq!(
            map_event(&click(MouseEventKind::Down(MouseButton::Right), 40, 19), &m),
            None
        );
        assert_eq!(
            map_event(&click(MouseEventKind::Moved, 40, 19), &m),
            None
        );
        // Status bar rows are outside the playfield
        assert_eq!(
            map_event(&click(MouseEventKind::Down(MouseButton::Left), 40, 36), &m),
            None
        );
    }
}
