/// Where keyboard focus currently rests, reduced to the classes the global
/// search shortcut cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusKind {
    /// Nothing in particular has focus.
    Body,
    /// A navigable link (a page list entry) is highlighted.
    Link,
    /// A field that already consumes text input, including the search input
    /// itself.
    TextField,
}

impl FocusKind {
    /// The "/" shortcut only fires when nothing text-editing has focus, so
    /// it never hijacks typing in another field.
    pub fn allows_search_shortcut(self) -> bool {
        matches!(self, FocusKind::Body | FocusKind::Link)
    }
}

#[cfg(test)]
mod tests {
    use super::FocusKind;

    #[test]
    fn body_and_links_allow_the_shortcut() {
        assert!(FocusKind::Body.allows_search_shortcut());
        assert!(FocusKind::Link.allows_search_shortcut());
    }

    #[test]
    fn text_fields_block_the_shortcut() {
        assert!(!FocusKind::TextField.allows_search_shortcut());
    }
}
