/// Pathname of the full-page search results route.
pub const SEARCH_PATHNAME: &str = "search";

/// Pathname of the console landing page.
pub const HOME_PATHNAME: &str = "overview";

/// A navigation location: a pathname plus the optional `q` query parameter.
/// The search bar reads locations to derive its text and produces them
/// through the navigation seam; it never mutates one in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    pub pathname: String,
    pub q: Option<String>,
}

impl Location {
    pub fn page(pathname: impl Into<String>) -> Self {
        Location {
            pathname: pathname.into(),
            q: None,
        }
    }

    pub fn search(query: impl Into<String>) -> Self {
        Location {
            pathname: SEARCH_PATHNAME.to_string(),
            q: Some(query.into()),
        }
    }

    pub fn home() -> Self {
        Location::page(HOME_PATHNAME)
    }

    /// Exact match against the results route. Near-miss pathnames such as
    /// `search/saved` or a bare trailing segment do not count.
    pub fn is_search_route(&self) -> bool {
        self.pathname == SEARCH_PATHNAME
    }

    /// The search text this location carries: its `q` parameter on the
    /// results route, empty everywhere else. A missing parameter reads as
    /// empty text, never as an error.
    pub fn search_text(&self) -> String {
        if self.is_search_route() {
            self.q.clone().unwrap_or_default()
        } else {
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_route_matches_exactly() {
        assert!(Location::search("x").is_search_route());
        assert!(Location::page(SEARCH_PATHNAME).is_search_route());

        assert!(!Location::page("").is_search_route());
        assert!(!Location::page("groups").is_search_route());
        assert!(!Location::page("search/saved").is_search_route());
        assert!(!Location::page("searches").is_search_route());
    }

    #[test]
    fn search_text_comes_from_q_on_the_results_route() {
        assert_eq!(Location::search("revenue").search_text(), "revenue");

        let without_q = Location::page(SEARCH_PATHNAME);
        assert_eq!(without_q.search_text(), "");
    }

    #[test]
    fn search_text_is_empty_elsewhere() {
        let mut location = Location::page("dashboards");
        location.q = Some("stray".to_string());
        assert_eq!(location.search_text(), "");
    }
}
