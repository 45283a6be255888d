use crate::{app::App, config::key_match, location::Location, session::SessionEvent};
use crossterm::event::KeyEvent;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key_match(&key, &app.config.keybindings.global.quit) {
        app.quit();
    } else if key_match(&key, &app.config.keybindings.global.search) {
        // The reducer applies the focus allow-list; anything already
        // consuming text never reaches this handler.
        app.dispatch(SessionEvent::Shortcut { focus: app.focus() });
    } else if key_match(&key, &app.config.keybindings.global.home) {
        app.navigate(Location::home());
    } else if key_match(&key, &app.config.keybindings.pages.up) {
        app.page_up();
    } else if key_match(&key, &app.config.keybindings.pages.down) {
        app.page_down();
    } else if key_match(&key, &app.config.keybindings.pages.open) {
        app.open_selected();
    } else if key_match(&key, &app.config.keybindings.pages.back) {
        app.navigate(Location::home());
    }
}
