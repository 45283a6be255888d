use crate::focus::FocusKind;
use crate::location::Location;

/// Maximum length of the search input, in characters.
pub const MAX_QUERY_LEN: usize = 200;

/// Tagged input for the session reducer. Every watcher (pointer, keyboard,
/// navigation) feeds through here, so transition ordering is a property of
/// the reducer rather than of listener registration order.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// The input row was clicked or otherwise given focus.
    FocusInput,
    /// The global "/" shortcut fired while `focus` held keyboard focus.
    Shortcut { focus: FocusKind },
    /// A pointer press landed outside the search bar root.
    OutsideClick,
    Escape,
    /// The app navigated. `path_changed` is false for query-only changes on
    /// the same pathname.
    LocationChanged {
        location: Location,
        path_changed: bool,
    },
    /// Enter pressed inside the input.
    Submit,
    /// The visible input text changed.
    Edited(String),
    /// The clear affordance (or its keybinding) was used.
    Clear,
}

/// Side effects requested by a transition, executed by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEffect {
    /// Fired exactly once per `false -> true` transition.
    BecameActive,
    /// Fired exactly once per `true -> false` transition.
    BecameInactive,
    /// Move keyboard focus into the search input.
    FocusInput,
    Navigate(Location),
}

/// Environment snapshot the reducer consults but never mutates.
#[derive(Debug, Clone, Copy)]
pub struct SessionEnv {
    pub small_screen: bool,
}

/// Which branch of the results panel to show, if any.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsPanel {
    /// Non-empty input: live results for the trimmed query.
    Typeahead(String),
    /// Empty input: recently visited items.
    Recents,
}

/// The search session: whether the results panel may be shown, and the
/// literal content of the visible input.
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    active: bool,
    query: String,
}

impl SearchSession {
    /// A fresh session with its text derived from the current location.
    pub fn from_location(location: &Location) -> Self {
        SearchSession {
            active: false,
            query: location.search_text(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn has_text(&self) -> bool {
        !self.query.trim().is_empty()
    }

    /// Advance the session by one event, returning the effects the caller
    /// must carry out. Activation and deactivation are idempotent: repeated
    /// identical requests produce no duplicate effects.
    pub fn apply(&mut self, event: SessionEvent, env: SessionEnv) -> Vec<SessionEffect> {
        let mut effects = Vec::new();
        match event {
            SessionEvent::FocusInput => self.activate(&mut effects),
            SessionEvent::Shortcut { focus } => {
                if focus.allows_search_shortcut() {
                    effects.push(SessionEffect::FocusInput);
                    self.activate(&mut effects);
                }
            }
            SessionEvent::OutsideClick | SessionEvent::Escape => {
                self.deactivate(env, &mut effects);
            }
            SessionEvent::LocationChanged {
                location,
                path_changed,
            } => {
                // Any navigation closes the panel. A path change additionally
                // re-derives the text, after the deactivation so the
                // route-derived text survives the small-screen clear.
                self.deactivate(env, &mut effects);
                if path_changed {
                    self.query = location.search_text();
                }
            }
            SessionEvent::Submit => {
                let trimmed = self.query.trim();
                if !trimmed.is_empty() {
                    effects.push(SessionEffect::Navigate(Location::search(trimmed)));
                }
            }
            SessionEvent::Edited(text) => self.set_query(text),
            SessionEvent::Clear => self.query.clear(),
        }
        effects
    }

    /// Replace the query text, bounded by the input's maximum length.
    pub fn set_query(&mut self, text: String) {
        if text.chars().count() <= MAX_QUERY_LEN {
            self.query = text;
        } else {
            self.query = text.chars().take(MAX_QUERY_LEN).collect();
        }
    }

    /// Choose the results panel branch. No panel is shown while inactive or
    /// while typeahead is disabled in settings, regardless of query text.
    pub fn results_panel(&self, typeahead_enabled: bool) -> Option<ResultsPanel> {
        if !self.active || !typeahead_enabled {
            return None;
        }
        let trimmed = self.query.trim();
        if trimmed.is_empty() {
            Some(ResultsPanel::Recents)
        } else {
            Some(ResultsPanel::Typeahead(trimmed.to_string()))
        }
    }

    fn activate(&mut self, effects: &mut Vec<SessionEffect>) {
        if self.active {
            return;
        }
        self.active = true;
        effects.push(SessionEffect::BecameActive);
    }

    fn deactivate(&mut self, env: SessionEnv, effects: &mut Vec<SessionEffect>) {
        if !self.active {
            return;
        }
        self.active = false;
        if env.small_screen {
            self.query.clear();
        }
        effects.push(SessionEffect::BecameInactive);
    }
}
