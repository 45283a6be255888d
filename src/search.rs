use crate::models::CatalogItem;

/// The typeahead lookup seam. The panel hands over trimmed query text and
/// renders whatever comes back; ranking and indexing live behind this trait.
pub trait SearchSource {
    fn search(&self, query: &str) -> Vec<CatalogItem>;
}

/// Case-insensitive substring match over the catalog. Deliberately plain:
/// name matches sort before description-only matches, otherwise catalog
/// order is preserved.
pub struct CatalogSearch {
    items: Vec<CatalogItem>,
}

impl CatalogSearch {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        CatalogSearch { items }
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }
}

impl SearchSource for CatalogSearch {
    fn search(&self, query: &str) -> Vec<CatalogItem> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let mut by_name = Vec::new();
        let mut by_description = Vec::new();
        for item in &self.items {
            if item.name.to_lowercase().contains(&needle) {
                by_name.push(item.clone());
            } else if item.description.to_lowercase().contains(&needle) {
                by_description.push(item.clone());
            }
        }
        by_name.extend(by_description);
        by_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::default_catalog;

    #[test]
    fn matches_are_case_insensitive() {
        let source = CatalogSearch::new(default_catalog());
        let hits = source.search("DASH");
        assert!(hits.iter().any(|item| item.name == "Dashboards"));
    }

    #[test]
    fn name_matches_come_before_description_matches() {
        use crate::models::{CatalogItem, ItemKind};

        let items = vec![
            CatalogItem {
                name: "Overview".to_string(),
                pathname: "overview".to_string(),
                kind: ItemKind::Page,
                description: "Shortcuts, including churn numbers.".to_string(),
            },
            CatalogItem {
                name: "Churn report".to_string(),
                pathname: "dashboards/churn".to_string(),
                kind: ItemKind::Dashboard,
                description: String::new(),
            },
        ];
        let source = CatalogSearch::new(items);

        let hits = source.search("churn");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].name, "Churn report");
        assert_eq!(hits[1].name, "Overview");
    }

    #[test]
    fn empty_query_matches_nothing() {
        let source = CatalogSearch::new(default_catalog());
        assert!(source.search("   ").is_empty());
    }
}
