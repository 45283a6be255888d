use crate::models::{CatalogItem, ItemKind, RecentItem};
use chrono::Local;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub fn catalog_path(data_dir: &Path) -> PathBuf {
    data_dir.join("catalog.json")
}

pub fn recents_path(data_dir: &Path) -> PathBuf {
    data_dir.join("recents.json")
}

/// Load the console catalog. A missing file falls back to the built-in
/// catalog; a corrupt one is reported once and also falls back.
pub fn load_catalog(data_dir: &Path) -> Vec<CatalogItem> {
    let path = catalog_path(data_dir);
    let Ok(content) = fs::read_to_string(&path) else {
        return default_catalog();
    };
    match serde_json::from_str::<Vec<CatalogItem>>(&content) {
        Ok(items) if !items.is_empty() => items,
        Ok(_) => default_catalog(),
        Err(e) => {
            eprintln!("Failed to parse catalog ({path:?}), using built-in pages: {e}");
            default_catalog()
        }
    }
}

/// Load recently visited items, newest first. Any failure reads as "no
/// recents yet".
pub fn load_recents(data_dir: &Path) -> Vec<RecentItem> {
    let Ok(content) = fs::read_to_string(recents_path(data_dir)) else {
        return Vec::new();
    };
    serde_json::from_str(&content).unwrap_or_default()
}

pub fn save_recents(data_dir: &Path, recents: &[RecentItem]) -> io::Result<()> {
    fs::create_dir_all(data_dir)?;
    let content = serde_json::to_string_pretty(recents).unwrap_or_default();
    fs::write(recents_path(data_dir), content)
}

/// Record a visit: dedup by pathname, newest first, bounded by `cap`.
pub fn record_recent(recents: &mut Vec<RecentItem>, name: &str, pathname: &str, cap: usize) {
    recents.retain(|item| item.pathname != pathname);
    recents.insert(
        0,
        RecentItem {
            name: name.to_string(),
            pathname: pathname.to_string(),
            visited_at: Local::now().format("%Y-%m-%d %H:%M").to_string(),
        },
    );
    recents.truncate(cap);
}

pub fn default_catalog() -> Vec<CatalogItem> {
    fn item(name: &str, pathname: &str, kind: ItemKind, description: &str) -> CatalogItem {
        CatalogItem {
            name: name.to_string(),
            pathname: pathname.to_string(),
            kind,
            description: description.to_string(),
        }
    }

    vec![
        item(
            "Overview",
            "overview",
            ItemKind::Page,
            "Landing page with shortcuts to every console section.",
        ),
        item(
            "Dashboards",
            "dashboards",
            ItemKind::Collection,
            "Saved dashboards, grouped by team.",
        ),
        item(
            "Revenue dashboard",
            "dashboards/revenue",
            ItemKind::Dashboard,
            "Monthly recurring revenue and churn.",
        ),
        item(
            "Activity dashboard",
            "dashboards/activity",
            ItemKind::Dashboard,
            "Daily active usage across workspaces.",
        ),
        item(
            "People",
            "people",
            ItemKind::Page,
            "Accounts and group membership.",
        ),
        item(
            "Audit log",
            "audit",
            ItemKind::Page,
            "Recent changes across the console.",
        ),
        item(
            "Settings",
            "settings",
            ItemKind::Page,
            "Feature flags and appearance.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_data_dir() -> PathBuf {
        let mut dir = std::env::temp_dir();
        let stamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        dir.push(format!("omnibar-test-{}-{}", std::process::id(), stamp));
        fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    #[test]
    fn missing_catalog_falls_back_to_builtin() {
        let dir = temp_data_dir();
        let items = load_catalog(&dir);
        assert!(!items.is_empty());
        assert!(items.iter().any(|item| item.pathname == "overview"));
    }

    #[test]
    fn corrupt_catalog_falls_back_to_builtin() {
        let dir = temp_data_dir();
        fs::write(catalog_path(&dir), "not json").expect("write catalog");
        assert_eq!(load_catalog(&dir), default_catalog());
    }

    #[test]
    fn recents_round_trip() {
        let dir = temp_data_dir();
        let mut recents = Vec::new();
        record_recent(&mut recents, "People", "people", 10);
        save_recents(&dir, &recents).expect("save recents");

        let loaded = load_recents(&dir);
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].pathname, "people");
    }

    #[test]
    fn record_recent_dedups_by_pathname_newest_first() {
        let mut recents = Vec::new();
        record_recent(&mut recents, "People", "people", 10);
        record_recent(&mut recents, "Settings", "settings", 10);
        record_recent(&mut recents, "People", "people", 10);

        assert_eq!(recents.len(), 2);
        assert_eq!(recents[0].pathname, "people");
        assert_eq!(recents[1].pathname, "settings");
    }

    #[test]
    fn record_recent_respects_the_cap() {
        let mut recents = Vec::new();
        for i in 0..5 {
            record_recent(&mut recents, "Page", &format!("page/{i}"), 3);
        }
        assert_eq!(recents.len(), 3);
        assert_eq!(recents[0].pathname, "page/4");
    }
}
