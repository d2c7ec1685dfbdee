//! Named predicate components composed into one filter.

use serde::{Deserialize, Serialize};

/// Accessors a model exposes to the filter. Components a model does not
/// support simply never exclude it.
pub trait Filterable {
    /// Value tested by the category component (exact, case-insensitive).
    fn category(&self) -> Option<&str> {
        None
    }

    /// Value tested by the status component (exact, case-insensitive).
    fn status(&self) -> Option<&str> {
        None
    }

    /// Haystack searched by the free-text component (case-folded contains).
    fn search_haystack(&self) -> String;
}

/// The named predicate components a view can set independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    Category,
    Status,
    Search,
}

/// Current values of all predicate components, composed by logical AND.
///
/// Setting a component to the empty string clears it. Matching is a pure
/// function of `(self, item)`, which is what makes re-filtering idempotent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    category: Option<String>,
    status: Option<String>,
    search: String,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates one named component.
    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FilterField::Category => self.category = non_empty(value),
            FilterField::Status => self.status = non_empty(value),
            FilterField::Search => self.search = value.trim().to_string(),
        }
    }

    /// Whether any component is active.
    pub fn is_active(&self) -> bool {
        self.category.is_some() || self.status.is_some() || !self.search.is_empty()
    }

    pub fn matches<T: Filterable>(&self, item: &T) -> bool {
        if let Some(wanted) = &self.category {
            if !item.category().is_some_and(|c| c.eq_ignore_ascii_case(wanted)) {
                return false;
            }
        }
        if let Some(wanted) = &self.status {
            if !item.status().is_some_and(|s| s.eq_ignore_ascii_case(wanted)) {
                return false;
            }
        }
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            if !item.search_haystack().to_lowercase().contains(&needle) {
                return false;
            }
        }
        true
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        category: &'static str,
        name: &'static str,
    }

    impl Filterable for Item {
        fn category(&self) -> Option<&str> {
            Some(self.category)
        }

        fn search_haystack(&self) -> String {
            self.name.to_string()
        }
    }

    const MUELLER: Item = Item {
        category: "deko",
        name: "Anna Müller",
    };

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = FilterSet::new();
        assert!(!filter.is_active());
        assert!(filter.matches(&MUELLER));
    }

    #[test]
    fn test_components_compose_with_and() {
        let mut filter = FilterSet::new();
        filter.set(FilterField::Category, "deko");
        assert!(filter.matches(&MUELLER));
        filter.set(FilterField::Search, "unbekannt");
        assert!(!filter.matches(&MUELLER));
        filter.set(FilterField::Search, "mül");
        assert!(filter.matches(&MUELLER));
    }

    #[test]
    fn test_search_is_case_folded_including_umlauts() {
        let mut filter = FilterSet::new();
        filter.set(FilterField::Search, "MÜL");
        assert!(filter.matches(&MUELLER));
    }

    #[test]
    fn test_status_component_excludes_items_without_status() {
        let mut filter = FilterSet::new();
        filter.set(FilterField::Status, "attending");
        // Item has no status accessor, so an active status filter excludes it.
        assert!(!filter.matches(&MUELLER));
    }

    #[test]
    fn test_setting_empty_clears_component() {
        let mut filter = FilterSet::new();
        filter.set(FilterField::Category, "deko");
        filter.set(FilterField::Category, "");
        assert!(!filter.is_active());
    }
}
