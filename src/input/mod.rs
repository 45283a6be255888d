pub(crate) mod navigate;
pub(crate) mod search_bar;

use crate::{app::App, session::SessionEvent};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        Event::Resize(cols, _) => {
            app.small_screen = cols < app.config.ui.small_screen_cols;
        }
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        _ => {}
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Escape closes the session no matter where focus rests.
    if key.code == KeyCode::Esc {
        if app.session.is_active() {
            app.dispatch(SessionEvent::Escape);
        } else {
            app.page_state.select(None);
        }
        return;
    }

    if app.input_focused {
        search_bar::handle_key(app, key);
    } else {
        navigate::handle_key(app, key);
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
        return;
    };
    let position = Position::new(mouse.column, mouse.row);

    if app.bar_area.contains(position) {
        app.input_focused = true;
        app.dispatch(SessionEvent::FocusInput);
    } else if app.panel_area.contains(position) {
        // Still inside the bar root; the panel never closes itself.
    } else {
        app.dispatch(SessionEvent::OutsideClick);
    }
}
