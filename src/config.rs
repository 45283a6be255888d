use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub fn key_match(key: &KeyEvent, bindings: &[String]) -> bool {
    bindings.iter().any(|binding| is_match(key, binding))
}

fn is_match(key: &KeyEvent, binding: &str) -> bool {
    let binding = binding.to_lowercase();

    let mut want_modifiers = KeyModifiers::NONE;
    let mut want_code = KeyCode::Null;

    for part in binding.split('+') {
        match part {
            "ctrl" => want_modifiers.insert(KeyModifiers::CONTROL),
            "opt" | "alt" => want_modifiers.insert(KeyModifiers::ALT),
            "shift" => want_modifiers.insert(KeyModifiers::SHIFT),
            "enter" => want_code = KeyCode::Enter,
            "esc" => want_code = KeyCode::Esc,
            "backspace" => want_code = KeyCode::Backspace,
            "tab" => want_code = KeyCode::Tab,
            "backtab" => want_code = KeyCode::BackTab,
            "space" => want_code = KeyCode::Char(' '),
            "up" => want_code = KeyCode::Up,
            "down" => want_code = KeyCode::Down,
            "left" => want_code = KeyCode::Left,
            "right" => want_code = KeyCode::Right,
            "home" => want_code = KeyCode::Home,
            "end" => want_code = KeyCode::End,
            "pageup" => want_code = KeyCode::PageUp,
            "pagedown" => want_code = KeyCode::PageDown,
            "delete" => want_code = KeyCode::Delete,
            c if c.chars().count() == 1 => {
                if let Some(ch) = c.chars().next() {
                    want_code = KeyCode::Char(ch);
                }
            }
            _ => {}
        }
    }

    let code_matches = if key.code == want_code {
        true
    } else if let (KeyCode::Char(c), KeyCode::Char(want)) = (key.code, want_code) {
        c.to_lowercase().next() == Some(want)
    } else {
        false
    };
    if !code_matches {
        return false;
    }

    // Enter must match modifiers exactly so `enter` and `shift+enter` can
    // coexist. For other keys, Shift is ignored unless the chord asks for it
    // (char keys like '/' and '?' already arrive shifted on some layouts).
    if want_code == KeyCode::Enter {
        return key.modifiers == want_modifiers;
    }

    let mut key_mods = key.modifiers;
    if !want_modifiers.contains(KeyModifiers::SHIFT) {
        key_mods.remove(KeyModifiers::SHIFT);
    }
    key_mods.contains(want_modifiers)
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "omnibar", "omnibar")
}

fn default_data_dir() -> PathBuf {
    if let Some(path) = std::env::var_os("OMNIBAR_DATA_DIR") {
        return PathBuf::from(path);
    }
    if let Some(dirs) = project_dirs() {
        return dirs.data_dir().to_path_buf();
    }
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".omnibar")
}

pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os("OMNIBAR_CONFIG") {
        return PathBuf::from(path);
    }
    if let Some(dirs) = project_dirs() {
        return dirs.config_dir().join("config.toml");
    }
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".omnibar-config.toml")
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub keybindings: KeyBindings,
    pub theme: Theme,
    pub ui: UiConfig,
    pub search: SearchConfig,
    pub data: DataConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DataConfig {
    pub data_path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_dir(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct KeyBindings {
    pub global: GlobalBindings,
    pub pages: PagesBindings,
    pub search: SearchBindings,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GlobalBindings {
    pub quit: Vec<String>,
    pub search: Vec<String>,
    pub home: Vec<String>,
}

impl Default for GlobalBindings {
    fn default() -> Self {
        Self {
            quit: vec!["ctrl+q".to_string(), "q".to_string()],
            search: vec!["/".to_string()],
            home: vec!["h".to_string()],
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct PagesBindings {
    pub up: Vec<String>,
    pub down: Vec<String>,
    pub open: Vec<String>,
    pub back: Vec<String>,
}

impl Default for PagesBindings {
    fn default() -> Self {
        Self {
            up: vec!["k".to_string(), "up".to_string()],
            down: vec!["j".to_string(), "down".to_string()],
            open: vec!["enter".to_string()],
            back: vec!["backspace".to_string()],
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SearchBindings {
    pub submit: Vec<String>,
    pub clear: Vec<String>,
}

impl Default for SearchBindings {
    fn default() -> Self {
        Self {
            submit: vec!["enter".to_string()],
            clear: vec!["ctrl+l".to_string()],
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// Terminal widths strictly below this count as a small screen.
    pub small_screen_cols: u16,
    pub search_placeholder: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            small_screen_cols: 80,
            search_placeholder: "Search…".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SearchConfig {
    pub typeahead_enabled: bool,
    pub recents_cap: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            typeahead_enabled: true,
            recents_cap: 20,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Theme {
    pub border_default: String,
    pub border_search: String,
    pub text_highlight: String,
    pub muted: String,
    pub accent: String,
    pub selection_bg: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border_default: "Reset".to_string(),
            border_search: "Cyan".to_string(),
            text_highlight: "50,50,50".to_string(),
            muted: "DarkGray".to_string(),
            accent: "Cyan".to_string(),
            selection_bg: "50,50,50".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Self {
        let config_path = config_path();

        let mut config = if let Ok(content) = fs::read_to_string(&config_path) {
            match toml::from_str::<Config>(&content) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Failed to parse config.toml ({config_path:?}), using defaults: {e}");
                    Config::default()
                }
            }
        } else {
            Config::default()
        };

        let changed = config.normalize();

        if changed || !config_path.exists() {
            let _ = config.save_to_path(&config_path);
        }

        config
    }

    pub fn save_to_path(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).unwrap_or_default();
        fs::write(path, content)
    }

    fn normalize(&mut self) -> bool {
        let mut changed = false;

        if self.data.data_path.as_os_str().is_empty() {
            self.data.data_path = default_data_dir();
            changed = true;
        }

        if self.data.data_path.is_relative() {
            self.data.data_path = default_data_dir().join(&self.data.data_path);
            changed = true;
        }

        if self.ui.small_screen_cols == 0 {
            self.ui.small_screen_cols = UiConfig::default().small_screen_cols;
            changed = true;
        }

        changed
    }
}
