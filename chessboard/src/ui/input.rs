//! Translate crossterm events into [`AppState`] calls.

use crate::app::AppState;
use crate::ui::widgets::BoardGeometry;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

/// What the event loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub fn handle_key(app_state: &mut AppState, key: KeyEvent) -> Control {
    // Windows reports releases too
    if key.kind != KeyEventKind::Press {
        return Control::Continue;
    }

    match key.code {
        KeyCode::Char('q') => return Control::Quit,
        KeyCode::Char('n') => app_state.new_game(),
        KeyCode::Tab => app_state.toggle_flipped(),
        KeyCode::Esc => app_state.clear_selection(),
        KeyCode::Backspace => app_state.backspace(),
        KeyCode::Char(c) if c.is_ascii_lowercase() || c.is_ascii_digit() => {
            app_state.type_char(c);
        }
        _ => {}
    }
    Control::Continue
}

pub fn handle_mouse(app_state: &mut AppState, mouse: MouseEvent, geometry: &BoardGeometry) {
    let square = geometry.square_at(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(square) = square {
                app_state.press(square);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => app_state.release(square),
        _ => {}
    }
}
