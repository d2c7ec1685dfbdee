//! The fetch → filter → render pipeline behind every list view.
//!
//! One [`ViewPipeline`] owns a filtered collection, the sequencing of its
//! fetches, the debounced search field, and the region it renders into.
//! Rendering is a pure function of `(source, filter, phase)`: the region's
//! tree is rebuilt from scratch on every change, so rendering twice without
//! a state change commits identical trees.

use std::sync::PoisonError;

use fest_core::collection::{
    DebounceTicket, Debouncer, EmptyReason, FilterField, FilterSet, Filterable,
    FilteredCollection, SortKey,
};
use fest_core::{FestError, Result};

use crate::fetch::{FetchSequencer, FetchTicket};
use crate::surface::{Node, RegionId, SharedSurface};

/// Empty-state wording: "no data at all" reads differently from "your
/// filter matched nothing".
#[derive(Debug, Clone, Copy)]
pub struct EmptyText {
    pub no_data: &'static str,
    pub no_matches: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ViewPhase {
    Ready,
    Failed(String),
}

pub struct ViewPipeline<T> {
    collection: FilteredCollection<T>,
    sequencer: FetchSequencer,
    debounce: Debouncer,
    pending_search: String,
    phase: ViewPhase,
    region: RegionId,
    surface: SharedSurface,
    empty_text: EmptyText,
    build_item: fn(&T) -> Node,
}

impl<T: Filterable> ViewPipeline<T> {
    pub fn new(
        surface: SharedSurface,
        region: RegionId,
        empty_text: EmptyText,
        build_item: fn(&T) -> Node,
    ) -> Self {
        Self {
            collection: FilteredCollection::new(),
            sequencer: FetchSequencer::new(),
            debounce: Debouncer::new(Debouncer::DEFAULT_DELAY),
            pending_search: String::new(),
            phase: ViewPhase::Ready,
            region,
            surface,
            empty_text,
            build_item,
        }
    }

    // ------------------------------------------------------------------
    // Fetch sequencing
    // ------------------------------------------------------------------

    /// Issues the ticket for the next fetch; pass it to [`apply_fetch`]
    /// with the outcome.
    ///
    /// [`apply_fetch`]: Self::apply_fetch
    pub fn begin_fetch(&self) -> FetchTicket {
        self.sequencer.begin()
    }

    /// Applies a fetch outcome, unless a newer fetch was issued meanwhile;
    /// stale responses are discarded without touching the view.
    ///
    /// A failure renders the error block (with its retry affordance) in
    /// place of the list and is handed back to the caller; a cancelled
    /// fetch is silently dropped.
    pub fn apply_fetch(&mut self, ticket: FetchTicket, outcome: Result<Vec<T>>) -> Result<()> {
        match outcome {
            Ok(items) => {
                if !self.sequencer.is_current(ticket) {
                    tracing::debug!("discarding stale fetch response");
                    return Ok(());
                }
                self.phase = ViewPhase::Ready;
                self.collection.set_source(items);
                self.render();
                Ok(())
            }
            Err(FestError::Cancelled) => Ok(()),
            Err(err) => {
                if self.sequencer.is_current(ticket) {
                    self.phase = ViewPhase::Failed(err.to_string());
                    self.render();
                }
                Err(err)
            }
        }
    }

    // ------------------------------------------------------------------
    // Filter controls
    // ------------------------------------------------------------------

    /// Applies a non-text filter control immediately.
    pub fn set_filter(&mut self, field: FilterField, value: impl Into<String>) {
        self.collection.set_filter(field, value);
        self.render();
    }

    /// Records a search keystroke. The caller settles the returned ticket
    /// (typically on a spawned task) and then calls [`commit_search`];
    /// keystrokes arriving inside the window supersede earlier tickets, so
    /// a burst of typing produces exactly one recompute.
    ///
    /// [`commit_search`]: Self::commit_search
    pub fn search_changed(&mut self, value: impl Into<String>) -> (Debouncer, DebounceTicket) {
        self.pending_search = value.into();
        let ticket = self.debounce.trip();
        (self.debounce.clone(), ticket)
    }

    /// Applies the pending search text; no-op if a newer keystroke arrived.
    pub fn commit_search(&mut self, ticket: DebounceTicket) {
        if !self.debounce.is_current(ticket) {
            return;
        }
        self.collection
            .set_filter(FilterField::Search, self.pending_search.clone());
        self.render();
    }

    /// Debounced one-shot convenience: waits out the window inline.
    pub async fn set_search(&mut self, value: impl Into<String>) {
        let (debounce, ticket) = self.search_changed(value);
        if debounce.settle(ticket).await {
            self.commit_search(ticket);
        }
    }

    pub fn set_sort_key(&mut self, sort: Option<SortKey<T>>) {
        self.collection.set_sort_key(sort);
        self.render();
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Rebuilds the region's tree from the current view and commits it.
    pub fn render(&self) {
        let nodes = self.build_nodes();
        let mut surface = self.surface.lock().unwrap_or_else(PoisonError::into_inner);
        surface.commit(self.region, nodes);
    }

    fn build_nodes(&self) -> Vec<Node> {
        if let ViewPhase::Failed(message) = &self.phase {
            return vec![error_block(message)];
        }
        match self.collection.empty_reason() {
            Some(reason) => vec![empty_block(reason, self.empty_text)],
            None => self.collection.view().map(self.build_item).collect(),
        }
    }

    pub fn view(&self) -> impl Iterator<Item = &T> {
        self.collection.view()
    }

    pub fn view_len(&self) -> usize {
        self.collection.view_len()
    }

    pub fn filter(&self) -> &FilterSet {
        self.collection.filter()
    }

    pub fn source(&self) -> &[T] {
        self.collection.source()
    }
}

/// Error block rendered in place of a list; never a silent empty state.
/// The frontend wires the retry affordance back to the view's fetch.
pub(crate) fn error_block(message: &str) -> Node {
    Node::block("error-block")
        .with_child(Node::text("error-message", message))
        .with_child(Node::text("retry-action", "Erneut versuchen"))
}

fn empty_block(reason: EmptyReason, text: EmptyText) -> Node {
    let wording = match reason {
        EmptyReason::NoData => text.no_data,
        EmptyReason::NoMatches => text.no_matches,
    };
    Node::text("empty-state", wording)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{CommitLog, MockSurface};
    use std::sync::Arc;
    use std::time::Duration;

    #[derive(Debug, Clone)]
    struct Entry {
        name: &'static str,
        category: &'static str,
    }

    impl Filterable for Entry {
        fn category(&self) -> Option<&str> {
            Some(self.category)
        }

        fn search_haystack(&self) -> String {
            self.name.to_string()
        }
    }

    fn entry_node(entry: &Entry) -> Node {
        Node::text("entry", entry.name)
    }

    fn entries() -> Vec<Entry> {
        vec![
            Entry { name: "Anna", category: "image" },
            Entry { name: "Bob", category: "video" },
        ]
    }

    fn pipeline() -> (ViewPipeline<Entry>, Arc<CommitLog>) {
        let (surface, log) = MockSurface::shared();
        let pipeline = ViewPipeline::new(
            surface,
            RegionId(1),
            EmptyText {
                no_data: "noch keine Einträge",
                no_matches: "keine Treffer für den aktuellen Filter",
            },
            entry_node,
        );
        (pipeline, log)
    }

    fn apply(pipeline: &mut ViewPipeline<Entry>, items: Vec<Entry>) {
        let ticket = pipeline.begin_fetch();
        pipeline.apply_fetch(ticket, Ok(items)).unwrap();
    }

    #[test]
    fn test_render_is_idempotent() {
        let (mut pipeline, log) = pipeline();
        apply(&mut pipeline, entries());
        pipeline.render();
        pipeline.render();
        let commits = log.commits(RegionId(1));
        let last = commits.last().unwrap();
        assert_eq!(commits[commits.len() - 2], *last);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let (mut pipeline, log) = pipeline();
        let slow = pipeline.begin_fetch();
        let fast = pipeline.begin_fetch();
        // The later fetch resolves first and is applied.
        pipeline
            .apply_fetch(fast, Ok(vec![Entry { name: "Neu", category: "image" }]))
            .unwrap();
        // The earlier fetch resolves late and must be discarded.
        pipeline.apply_fetch(slow, Ok(entries())).unwrap();
        assert_eq!(pipeline.view_len(), 1);
        assert_eq!(pipeline.view().next().unwrap().name, "Neu");
        let last = log.commits(RegionId(1)).pop().unwrap();
        assert_eq!(last[0].text.as_deref(), Some("Neu"));
    }

    #[test]
    fn test_failure_renders_error_block_with_retry() {
        let (mut pipeline, log) = pipeline();
        let ticket = pipeline.begin_fetch();
        let err = pipeline
            .apply_fetch(ticket, Err(FestError::network("connection refused", true)))
            .unwrap_err();
        assert!(err.is_retryable());
        let last = log.commits(RegionId(1)).pop().unwrap();
        assert_eq!(last[0].class, "error-block");
        assert!(last[0].children.iter().any(|n| n.class == "retry-action"));
    }

    #[test]
    fn test_cancelled_fetch_is_silently_dropped() {
        let (mut pipeline, log) = pipeline();
        let ticket = pipeline.begin_fetch();
        pipeline.apply_fetch(ticket, Err(FestError::Cancelled)).unwrap();
        assert!(log.commits(RegionId(1)).is_empty());
    }

    #[test]
    fn test_empty_state_wording_depends_on_reason() {
        let (mut pipeline, log) = pipeline();
        apply(&mut pipeline, Vec::new());
        let no_data = log.commits(RegionId(1)).pop().unwrap();
        assert_eq!(no_data[0].text.as_deref(), Some("noch keine Einträge"));

        apply(&mut pipeline, entries());
        pipeline.set_filter(FilterField::Search, "niemand");
        let no_matches = log.commits(RegionId(1)).pop().unwrap();
        assert_eq!(
            no_matches[0].text.as_deref(),
            Some("keine Treffer für den aktuellen Filter")
        );
    }

    #[test]
    fn test_non_text_filters_apply_immediately() {
        let (mut pipeline, log) = pipeline();
        apply(&mut pipeline, entries());
        let before = log.commit_count();
        pipeline.set_filter(FilterField::Category, "video");
        assert_eq!(log.commit_count(), before + 1);
        assert_eq!(pipeline.view().next().unwrap().name, "Bob");
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_burst_recomputes_once() {
        let (mut pipeline, log) = pipeline();
        apply(&mut pipeline, entries());
        let before = log.commit_count();

        // Five keystrokes over 200ms, all inside the 300ms window.
        let mut last = None;
        for text in ["m", "mü", "mül", "bo", "bob"] {
            let (debounce, ticket) = pipeline.search_changed(text);
            last = Some((debounce, ticket));
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        let (debounce, ticket) = last.unwrap();
        assert!(debounce.settle(ticket).await);
        pipeline.commit_search(ticket);

        assert_eq!(log.commit_count(), before + 1);
        assert_eq!(pipeline.view().next().unwrap().name, "Bob");
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_search_convenience_applies_after_delay() {
        let (mut pipeline, _log) = pipeline();
        apply(&mut pipeline, entries());
        pipeline.set_search("anna").await;
        assert_eq!(pipeline.view().next().unwrap().name, "Anna");
    }
}
