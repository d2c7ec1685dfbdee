//! The data half of the fetch → filter → render pipeline.
//!
//! A [`FilteredCollection`] holds the authoritative `source` sequence as last
//! fetched plus the current [`FilterSet`]; the `view` is recomputed in full
//! on every write. There is no other mutation path, so the view is always
//! derivable purely from `(source, filter)` and re-filtering is idempotent.

mod debounce;
mod filter;

pub use debounce::{DebounceTicket, Debouncer};
pub use filter::{FilterField, FilterSet, Filterable};

use std::cmp::Ordering;

/// Why a view rendered empty; selects the empty-state wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// The source itself is empty (nothing fetched yet or truly no data).
    NoData,
    /// The source has items but the current filter excludes all of them.
    NoMatches,
}

/// Comparator applied only when a sort key is explicitly selected.
pub type SortKey<T> = fn(&T, &T) -> Ordering;

/// An ordered source collection plus its filtered view.
///
/// The view stores indices into `source`, so filtering is stable: insertion
/// order is preserved, and sorting happens only under an explicit sort key
/// (stable sort, ties keep fetch order).
#[derive(Debug)]
pub struct FilteredCollection<T> {
    source: Vec<T>,
    filter: FilterSet,
    sort: Option<SortKey<T>>,
    view: Vec<usize>,
}

impl<T: Filterable> Default for FilteredCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Filterable> FilteredCollection<T> {
    pub fn new() -> Self {
        Self {
            source: Vec::new(),
            filter: FilterSet::new(),
            sort: None,
            view: Vec::new(),
        }
    }

    /// Replaces the source wholesale and recomputes the view. Called after
    /// every fetch; never patches individual items.
    pub fn set_source(&mut self, items: Vec<T>) {
        self.source = items;
        self.recompute();
    }

    /// Updates one named predicate component and recomputes the view.
    pub fn set_filter(&mut self, field: FilterField, value: impl Into<String>) {
        self.filter.set(field, value);
        self.recompute();
    }

    /// Selects or clears the explicit sort key.
    pub fn set_sort_key(&mut self, sort: Option<SortKey<T>>) {
        self.sort = sort;
        self.recompute();
    }

    pub fn filter(&self) -> &FilterSet {
        &self.filter
    }

    pub fn source(&self) -> &[T] {
        &self.source
    }

    pub fn view(&self) -> impl Iterator<Item = &T> {
        self.view.iter().map(|&index| &self.source[index])
    }

    pub fn view_len(&self) -> usize {
        self.view.len()
    }

    pub fn empty_reason(&self) -> Option<EmptyReason> {
        if !self.view.is_empty() {
            None
        } else if self.source.is_empty() {
            Some(EmptyReason::NoData)
        } else {
            Some(EmptyReason::NoMatches)
        }
    }

    fn recompute(&mut self) {
        let filter = &self.filter;
        let mut view: Vec<usize> = self
            .source
            .iter()
            .enumerate()
            .filter(|(_, item)| filter.matches(*item))
            .map(|(index, _)| index)
            .collect();
        if let Some(compare) = self.sort {
            let source = &self.source;
            view.sort_by(|&a, &b| compare(&source[a], &source[b]));
        }
        self.view = view;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Entry {
        name: &'static str,
        category: &'static str,
        rank: u32,
    }

    impl Filterable for Entry {
        fn category(&self) -> Option<&str> {
            Some(self.category)
        }

        fn search_haystack(&self) -> String {
            self.name.to_string()
        }
    }

    fn entries() -> Vec<Entry> {
        vec![
            Entry { name: "Anna", category: "image", rank: 2 },
            Entry { name: "Bob", category: "video", rank: 1 },
            Entry { name: "Carla", category: "image", rank: 3 },
        ]
    }

    fn names<T: Filterable>(collection: &FilteredCollection<T>) -> Vec<String> {
        collection.view().map(|e| e.search_haystack()).collect()
    }

    #[test]
    fn test_view_preserves_insertion_order() {
        let mut collection = FilteredCollection::new();
        collection.set_source(entries());
        collection.set_filter(FilterField::Category, "image");
        assert_eq!(names(&collection), vec!["Anna", "Carla"]);
    }

    #[test]
    fn test_refiltering_is_idempotent() {
        let mut collection = FilteredCollection::new();
        collection.set_source(entries());
        collection.set_filter(FilterField::Search, "a");
        let first = names(&collection);
        collection.set_filter(FilterField::Search, "a");
        assert_eq!(first, names(&collection));
    }

    #[test]
    fn test_filters_commute_and_compose() {
        let mut stepwise = FilteredCollection::new();
        stepwise.set_source(entries());
        stepwise.set_filter(FilterField::Category, "image");
        stepwise.set_filter(FilterField::Search, "carla");

        let mut reversed = FilteredCollection::new();
        reversed.set_source(entries());
        reversed.set_filter(FilterField::Search, "carla");
        reversed.set_filter(FilterField::Category, "image");

        assert_eq!(names(&stepwise), names(&reversed));
        assert_eq!(names(&stepwise), vec!["Carla"]);
    }

    #[test]
    fn test_sort_applies_only_when_selected() {
        let mut collection = FilteredCollection::new();
        collection.set_source(entries());
        assert_eq!(names(&collection), vec!["Anna", "Bob", "Carla"]);
        let by_rank: SortKey<Entry> = |a, b| a.rank.cmp(&b.rank);
        collection.set_sort_key(Some(by_rank));
        assert_eq!(names(&collection), vec!["Bob", "Anna", "Carla"]);
        collection.set_sort_key(None);
        assert_eq!(names(&collection), vec!["Anna", "Bob", "Carla"]);
    }

    #[test]
    fn test_empty_reason_distinguishes_no_data_from_no_matches() {
        let mut collection: FilteredCollection<Entry> = FilteredCollection::new();
        assert_eq!(collection.empty_reason(), Some(EmptyReason::NoData));
        collection.set_source(entries());
        assert_eq!(collection.empty_reason(), None);
        collection.set_filter(FilterField::Search, "niemand");
        assert_eq!(collection.empty_reason(), Some(EmptyReason::NoMatches));
    }

    #[test]
    fn test_set_source_reapplies_current_filter() {
        let mut collection = FilteredCollection::new();
        collection.set_filter(FilterField::Category, "video");
        collection.set_source(entries());
        assert_eq!(names(&collection), vec!["Bob"]);
    }
}
