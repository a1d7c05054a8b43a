use crossterm::event::{Event, KeyCode, KeyEvent};

use super::app::DialogApp;

pub fn handle_event(app: &mut DialogApp, event: Event) {
    if let Event::Key(key) = event {
        handle_key(app, key);
    }
}

fn handle_key(app: &mut DialogApp, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.should_quit = true;
        }
        KeyCode::Tab => {
            app.focus_next();
        }
        KeyCode::BackTab => {
            app.focus_prev();
        }
        KeyCode::Up => {
            app.cursor_up();
        }
        KeyCode::Down => {
            app.cursor_down();
        }
        KeyCode::Enter => {
            app.activate();
        }
        KeyCode::Char('s') => {
            app.submit();
        }
        _ => {}
    }
}
