use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Page,
    Dashboard,
    Collection,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Page => "page",
            ItemKind::Dashboard => "dashboard",
            ItemKind::Collection => "collection",
        }
    }
}

/// A navigable console entry: what the typeahead collaborator searches and
/// what page lists are made of.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub name: String,
    pub pathname: String,
    pub kind: ItemKind,
    #[serde(default)]
    pub description: String,
}

/// A previously visited location, shown by the recents branch of the
/// results panel. `visited_at` is a preformatted local timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentItem {
    pub name: String,
    pub pathname: String,
    pub visited_at: String,
}
