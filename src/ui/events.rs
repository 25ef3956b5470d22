//! Event handling for the toast demo

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::App;
use crate::notification::Kind;

/// Handle a key press. Returns `true` when the key was bound to something.
pub fn handle_key(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.should_quit = true,
        KeyCode::Char('1') => {
            app.show(Kind::Success);
        }
        KeyCode::Char('2') => {
            app.show(Kind::Error);
        }
        KeyCode::Char('3') => {
            app.show(Kind::Warning);
        }
        KeyCode::Char('4') => {
            app.show(Kind::Info);
        }
        KeyCode::Char('p') => app.cycle_position(),
        KeyCode::Char('t') => app.cycle_icon_theme(),
        KeyCode::Char('x') => {
            if !app.close_newest() {
                app.last_event = Some("Newest toast cannot be closed".to_string());
            }
        }
        KeyCode::Char('a') => {
            if !app.act_on_newest() {
                app.last_event = Some("Newest toast has no action".to_string());
            }
        }
        KeyCode::Char('d') => {
            let dismissed = app.dismiss_all();
            app.last_event = Some(format!("Dismissed {dismissed} toast(s)"));
        }
        _ => return false,
    }
    true
}
