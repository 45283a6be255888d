use crate::{
    app::App,
    config::key_match,
    session::{MAX_QUERY_LEN, SessionEvent},
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key_match(&key, &app.config.keybindings.search.submit) {
        app.dispatch(SessionEvent::Submit);
        return;
    }
    if key_match(&key, &app.config.keybindings.search.clear) {
        app.dispatch(SessionEvent::Clear);
        return;
    }

    // The input is single-line and bounded; drop keys that would break that
    // before they reach the widget.
    if key.code == KeyCode::Enter {
        return;
    }
    if let KeyCode::Char(_) = key.code
        && !key.modifiers.contains(KeyModifiers::CONTROL)
        && app.session.query().chars().count() >= MAX_QUERY_LEN
    {
        return;
    }

    if app.input.input(key) {
        app.dispatch(SessionEvent::Edited(app.input_text()));
    }
}
