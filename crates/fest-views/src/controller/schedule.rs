//! The schedule (Zeitplan) timeline view.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use fest_client::cancellable;
use fest_core::Result;
use fest_core::format;
use fest_core::model::{ScheduleDraft, ScheduleId, ScheduleItem};

use super::notify_failure;
use crate::backend::Backend;
use crate::bindings::{RegionResolver, require_region};
use crate::pipeline::{EmptyText, ViewPipeline};
use crate::surface::{Node, NoticeKind, Notifier, SharedSurface};

pub struct ScheduleController {
    backend: Arc<dyn Backend>,
    notifier: Arc<dyn Notifier>,
    cancel: CancellationToken,
    pipeline: ViewPipeline<ScheduleItem>,
}

impl ScheduleController {
    pub const REGION: &'static str = "schedule-timeline";

    pub fn new(
        backend: Arc<dyn Backend>,
        notifier: Arc<dyn Notifier>,
        surface: SharedSurface,
        resolver: &dyn RegionResolver,
    ) -> Result<Self> {
        let region = require_region(resolver, Self::REGION)?;
        let mut pipeline = ViewPipeline::new(
            surface,
            region,
            EmptyText {
                no_data: "Der Zeitplan ist noch leer",
                no_matches: "Keine Programmpunkte passen zur Suche",
            },
            schedule_node,
        );
        // The timeline explicitly selects chronological order.
        let chronological: fest_core::collection::SortKey<ScheduleItem> =
            |a, b| a.starts_at.cmp(&b.starts_at);
        pipeline.set_sort_key(Some(chronological));
        Ok(Self {
            backend,
            notifier,
            cancel: CancellationToken::new(),
            pipeline,
        })
    }

    pub async fn refresh(&mut self) -> Result<()> {
        let ticket = self.pipeline.begin_fetch();
        let outcome = cancellable(&self.cancel, self.backend.schedule()).await;
        self.pipeline.apply_fetch(ticket, outcome)
    }

    pub async fn set_search(&mut self, value: impl Into<String>) {
        self.pipeline.set_search(value).await;
    }

    /// Creates an entry from a caller-assembled draft; invalid drafts never
    /// reach the network.
    pub async fn create(&mut self, draft: ScheduleDraft) -> Result<()> {
        draft.validate()?;
        match cancellable(&self.cancel, self.backend.create_schedule_item(&draft)).await {
            Ok(message) => {
                self.notifier.notify(
                    message.as_deref().unwrap_or("Programmpunkt gespeichert"),
                    NoticeKind::Success,
                );
                self.refresh().await
            }
            Err(err) => {
                notify_failure(self.notifier.as_ref(), &err);
                Err(err)
            }
        }
    }

    pub async fn delete(&mut self, item: ScheduleId) -> Result<()> {
        match cancellable(&self.cancel, self.backend.delete_schedule_item(item)).await {
            Ok(message) => {
                self.notifier.notify(
                    message.as_deref().unwrap_or("Programmpunkt gelöscht"),
                    NoticeKind::Success,
                );
                self.refresh().await
            }
            Err(err) => {
                notify_failure(self.notifier.as_ref(), &err);
                Err(err)
            }
        }
    }

    pub fn pipeline(&self) -> &ViewPipeline<ScheduleItem> {
        &self.pipeline
    }

    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}

fn schedule_node(item: &ScheduleItem) -> Node {
    let time_range = match item.ends_at {
        Some(end) => format!(
            "{}–{}",
            format::time(&item.starts_at),
            format::time(&end)
        ),
        None => format::time(&item.starts_at),
    };
    let mut node = Node::block("schedule-entry")
        .with_child(Node::text("entry-day", format::date(&item.starts_at)))
        .with_child(Node::text("entry-time", time_range))
        .with_child(Node::text("entry-title", item.title.as_str()));
    if let Some(minutes) = item.duration_minutes() {
        node = node.with_child(Node::text("entry-duration", format!("{minutes} min")));
    }
    if let Some(location) = &item.location {
        node = node.with_child(Node::text("entry-location", location.as_str()));
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::RegionMap;
    use crate::surface::RegionId;
    use crate::testing::{MockBackend, MockNotifier, MockSurface};
    use chrono::{TimeZone, Utc};

    fn item(id: i64, title: &str, hour: u32) -> ScheduleItem {
        ScheduleItem {
            id: ScheduleId(id),
            title: title.to_string(),
            starts_at: Utc.with_ymd_and_hms(2025, 6, 14, hour, 0, 0).unwrap(),
            ends_at: None,
            location: None,
            description: None,
        }
    }

    fn controller() -> (
        ScheduleController,
        Arc<MockBackend>,
        Arc<crate::testing::CommitLog>,
    ) {
        let backend = Arc::new(MockBackend::default());
        let (surface, log) = MockSurface::shared();
        let mut regions = RegionMap::new();
        regions.register(ScheduleController::REGION);
        let controller = ScheduleController::new(
            backend.clone(),
            Arc::new(MockNotifier::default()),
            surface,
            &regions,
        )
        .unwrap();
        (controller, backend, log)
    }

    #[tokio::test]
    async fn test_timeline_renders_chronologically() {
        let (mut controller, backend, log) = controller();
        // Server order is not chronological; the timeline sorts explicitly.
        *backend.schedule_items.lock().unwrap() = vec![
            item(1, "Dinner", 18),
            item(2, "Trauung", 14),
            item(3, "Feuerwerk", 22),
        ];
        controller.refresh().await.unwrap();
        let nodes = log.commits(RegionId(0)).pop().unwrap();
        let titles: Vec<_> = nodes
            .iter()
            .map(|n| n.children[2].text.clone().unwrap())
            .collect();
        assert_eq!(titles, vec!["Trauung", "Dinner", "Feuerwerk"]);
    }

    #[tokio::test]
    async fn test_invalid_draft_never_reaches_the_network() {
        let (mut controller, backend, _) = controller();
        let draft = ScheduleDraft {
            title: String::new(),
            starts_at: Utc::now(),
            ends_at: None,
            location: None,
            description: None,
        };
        assert!(controller.create(draft).await.unwrap_err().is_validation());
        assert_eq!(backend.mutations(), 0);
    }

    #[tokio::test]
    async fn test_delete_refetches() {
        let (mut controller, backend, _) = controller();
        controller.delete(ScheduleId(2)).await.unwrap();
        assert_eq!(backend.mutations(), 1);
        assert_eq!(backend.fetches(), 1);
    }
}
