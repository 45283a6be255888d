use crate::config::Config;
use crate::focus::FocusKind;
use crate::location::Location;
use crate::models::{CatalogItem, RecentItem};
use crate::search::{CatalogSearch, SearchSource};
use crate::session::{SearchSession, SessionEffect, SessionEnv, SessionEvent};
use crate::storage;
use chrono::{DateTime, Duration, Local};
use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use tui_textarea::{CursorMove, TextArea};

pub struct App<'a> {
    pub config: Config,
    pub session: SearchSession,
    pub location: Location,

    /// The search input widget. Its text mirrors the session query; the
    /// session is the source of truth.
    pub input: TextArea<'a>,
    /// Whether keystrokes currently go to the search input.
    pub input_focused: bool,
    pub small_screen: bool,

    pub source: CatalogSearch,
    pub recents: Vec<RecentItem>,

    /// Items listed in the page body: search results on the results route,
    /// the catalog index everywhere else.
    pub page_items: Vec<CatalogItem>,
    pub page_state: ListState,

    // Geometry of the last rendered frame, for pointer hit-testing.
    pub bar_area: Rect,
    pub panel_area: Rect,

    pub toast_message: Option<String>,
    pub toast_expiry: Option<DateTime<Local>>,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    pub fn new() -> App<'a> {
        let config = Config::load();
        let catalog = storage::load_catalog(&config.data.data_path);
        let recents = storage::load_recents(&config.data.data_path);
        let small_screen = crossterm::terminal::size()
            .map(|(cols, _)| cols < config.ui.small_screen_cols)
            .unwrap_or(false);
        App::with_parts(config, catalog, recents, small_screen)
    }

    pub fn with_parts(
        config: Config,
        catalog: Vec<CatalogItem>,
        recents: Vec<RecentItem>,
        small_screen: bool,
    ) -> App<'a> {
        let location = Location::home();
        let session = SearchSession::from_location(&location);

        let mut app = App {
            session,
            location,
            input: TextArea::default(),
            input_focused: false,
            small_screen,
            source: CatalogSearch::new(catalog),
            recents,
            page_items: Vec::new(),
            page_state: ListState::default(),
            bar_area: Rect::default(),
            panel_area: Rect::default(),
            toast_message: None,
            toast_expiry: None,
            should_quit: false,
            config,
        };
        app.load_page();
        let text = app.session.query().to_string();
        app.set_input_text(text);
        app
    }

    pub fn env(&self) -> SessionEnv {
        SessionEnv {
            small_screen: self.small_screen,
        }
    }

    /// The abstract focus descriptor the "/" shortcut is gated on.
    pub fn focus(&self) -> FocusKind {
        if self.input_focused {
            FocusKind::TextField
        } else if self.page_state.selected().is_some() {
            FocusKind::Link
        } else {
            FocusKind::Body
        }
    }

    pub fn typeahead_enabled(&self) -> bool {
        self.config.search.typeahead_enabled
    }

    /// Feed one tagged event through the session reducer and carry out the
    /// effects it requests.
    pub fn dispatch(&mut self, event: SessionEvent) {
        let effects = self.session.apply(event, self.env());
        for effect in effects {
            match effect {
                SessionEffect::BecameActive => {
                    // The panel takes over; drop any page selection.
                    self.page_state.select(None);
                }
                SessionEffect::BecameInactive => {
                    self.input_focused = false;
                }
                SessionEffect::FocusInput => {
                    self.input_focused = true;
                }
                SessionEffect::Navigate(location) => self.navigate(location),
            }
        }
        self.sync_input_from_session();
    }

    /// The navigation seam. Updates the current location, swaps the page
    /// body, records the visit, and feeds the change back to the session.
    pub fn navigate(&mut self, next: Location) {
        let path_changed = next.pathname != self.location.pathname;
        self.location = next.clone();
        self.load_page();

        if !next.is_search_route() {
            let name = self.page_title(&next.pathname);
            storage::record_recent(
                &mut self.recents,
                &name,
                &next.pathname,
                self.config.search.recents_cap,
            );
            if storage::save_recents(&self.config.data.data_path, &self.recents).is_err() {
                self.toast("Failed to save recents.");
            }
        }

        self.dispatch(SessionEvent::LocationChanged {
            location: next,
            path_changed,
        });
    }

    pub fn load_page(&mut self) {
        self.page_items = if self.location.is_search_route() {
            self.source.search(self.location.q.as_deref().unwrap_or(""))
        } else {
            self.source.items().to_vec()
        };
        self.page_state.select(None);
    }

    /// Display name for a pathname: its catalog entry's name, or the raw
    /// pathname for routes the catalog does not know.
    pub fn page_title(&self, pathname: &str) -> String {
        self.source
            .items()
            .iter()
            .find(|item| item.pathname == pathname)
            .map(|item| item.name.clone())
            .unwrap_or_else(|| pathname.to_string())
    }

    pub fn input_text(&self) -> String {
        self.input.lines().join(" ")
    }

    /// Push the session query back into the input widget after reducer-side
    /// text changes (small-screen clears, route-derived resets).
    pub fn sync_input_from_session(&mut self) {
        if self.input_text() != self.session.query() {
            self.set_input_text(self.session.query().to_string());
        }
    }

    fn set_input_text(&mut self, text: String) {
        let mut input = TextArea::from(vec![text]);
        input.set_placeholder_text(self.config.ui.search_placeholder.clone());
        input.move_cursor(CursorMove::End);
        self.input = input;
    }

    pub fn page_up(&mut self) {
        if self.page_items.is_empty() {
            return;
        }
        let next = match self.page_state.selected() {
            Some(0) | None => 0,
            Some(i) => i - 1,
        };
        self.page_state.select(Some(next));
    }

    pub fn page_down(&mut self) {
        if self.page_items.is_empty() {
            return;
        }
        let next = match self.page_state.selected() {
            Some(i) if i + 1 >= self.page_items.len() => i,
            Some(i) => i + 1,
            None => 0,
        };
        self.page_state.select(Some(next));
    }

    pub fn open_selected(&mut self) {
        if let Some(i) = self.page_state.selected()
            && let Some(item) = self.page_items.get(i)
        {
            let target = Location::page(item.pathname.clone());
            self.navigate(target);
        }
    }

    pub fn toast(&mut self, message: impl Into<String>) {
        self.toast_message = Some(message.into());
        self.toast_expiry = Some(Local::now() + Duration::seconds(2));
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::ResultsPanel;
    use std::path::PathBuf;

    fn temp_data_dir() -> PathBuf {
        let mut dir = std::env::temp_dir();
        let stamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        dir.push(format!("omnibar-app-test-{}-{}", std::process::id(), stamp));
        dir
    }

    fn make_test_app() -> App<'static> {
        let mut config = Config::default();
        config.data.data_path = temp_data_dir();
        App::with_parts(config, storage::default_catalog(), Vec::new(), false)
    }

    #[test]
    fn starts_inactive_on_the_home_page() {
        let app = make_test_app();
        assert!(!app.session.is_active());
        assert_eq!(app.location, Location::home());
        assert_eq!(app.session.query(), "");
        assert!(!app.page_items.is_empty());
    }

    #[test]
    fn focus_descriptor_tracks_input_and_selection() {
        let mut app = make_test_app();
        assert_eq!(app.focus(), FocusKind::Body);

        app.page_down();
        assert_eq!(app.focus(), FocusKind::Link);

        app.dispatch(SessionEvent::FocusInput);
        app.input_focused = true;
        assert_eq!(app.focus(), FocusKind::TextField);
    }

    #[test]
    fn shortcut_moves_focus_into_the_input() {
        let mut app = make_test_app();
        app.page_down();
        app.dispatch(SessionEvent::Shortcut { focus: app.focus() });

        assert!(app.session.is_active());
        assert!(app.input_focused);
        // Activation dropped the page selection.
        assert_eq!(app.page_state.selected(), None);
    }

    #[test]
    fn outside_click_deactivates_and_unfocuses() {
        let mut app = make_test_app();
        app.dispatch(SessionEvent::FocusInput);
        app.input_focused = true;

        app.dispatch(SessionEvent::OutsideClick);
        assert!(!app.session.is_active());
        assert!(!app.input_focused);
    }

    #[test]
    fn submit_navigates_to_the_results_route() {
        let mut app = make_test_app();
        app.dispatch(SessionEvent::FocusInput);
        app.dispatch(SessionEvent::Edited("  revenue  ".to_string()));
        app.dispatch(SessionEvent::Submit);

        assert_eq!(app.location, Location::search("revenue"));
        // The navigation, not the submission, closed the session.
        assert!(!app.session.is_active());
        assert!(app.page_items.iter().any(|item| item.name.contains("Revenue")));
    }

    #[test]
    fn submitting_whitespace_stays_put() {
        let mut app = make_test_app();
        app.dispatch(SessionEvent::FocusInput);
        app.dispatch(SessionEvent::Edited("   ".to_string()));
        app.dispatch(SessionEvent::Submit);
        assert_eq!(app.location, Location::home());
    }

    #[test]
    fn query_is_rederived_from_the_route_after_submit() {
        let mut app = make_test_app();
        app.dispatch(SessionEvent::FocusInput);
        app.dispatch(SessionEvent::Edited("people".to_string()));
        app.dispatch(SessionEvent::Submit);

        // Landing on the results route re-derives the text from the route.
        assert_eq!(app.session.query(), "people");
        assert_eq!(app.input_text(), "people");
    }

    #[test]
    fn navigation_records_recents_except_for_the_results_route() {
        let mut app = make_test_app();
        app.navigate(Location::page("people"));
        app.navigate(Location::page("audit"));
        app.navigate(Location::search("anything"));

        assert_eq!(app.recents.len(), 2);
        assert_eq!(app.recents[0].pathname, "audit");
        assert!(app.recents.iter().all(|r| r.pathname != "search"));
    }

    #[test]
    fn recents_panel_shows_when_active_with_empty_text() {
        let mut app = make_test_app();
        app.dispatch(SessionEvent::FocusInput);
        assert_eq!(
            app.session.results_panel(app.typeahead_enabled()),
            Some(ResultsPanel::Recents)
        );
    }

    #[test]
    fn flag_disables_the_panel_entirely() {
        let mut app = make_test_app();
        app.config.search.typeahead_enabled = false;
        app.dispatch(SessionEvent::FocusInput);
        app.dispatch(SessionEvent::Edited("abc".to_string()));
        assert_eq!(app.session.results_panel(app.typeahead_enabled()), None);
    }

    #[test]
    fn small_screen_deactivation_clears_the_visible_input() {
        let mut app = make_test_app();
        app.small_screen = true;
        app.dispatch(SessionEvent::FocusInput);
        app.dispatch(SessionEvent::Edited("abc".to_string()));
        app.dispatch(SessionEvent::Escape);

        assert_eq!(app.session.query(), "");
        assert_eq!(app.input_text(), "");
    }

    #[test]
    fn open_selected_navigates_to_the_link() {
        let mut app = make_test_app();
        app.page_down();
        let expected = app.page_items[0].pathname.clone();
        app.open_selected();
        assert_eq!(app.location.pathname, expected);
    }
}
