//! The gift-registry view.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use fest_client::cancellable;
use fest_core::collection::{DebounceTicket, Debouncer, FilterField};
use fest_core::format;
use fest_core::model::{GiftId, GiftItem};
use fest_core::{FestError, Result};

use super::notify_failure;
use crate::backend::Backend;
use crate::bindings::{RegionResolver, require_region};
use crate::pipeline::{EmptyText, ViewPipeline};
use crate::surface::{Node, NoticeKind, Notifier, SharedSurface};

pub struct RegistryController {
    backend: Arc<dyn Backend>,
    notifier: Arc<dyn Notifier>,
    cancel: CancellationToken,
    pipeline: ViewPipeline<GiftItem>,
}

impl RegistryController {
    pub const REGION: &'static str = "gift-list";

    pub fn new(
        backend: Arc<dyn Backend>,
        notifier: Arc<dyn Notifier>,
        surface: SharedSurface,
        resolver: &dyn RegionResolver,
    ) -> Result<Self> {
        let region = require_region(resolver, Self::REGION)?;
        Ok(Self {
            backend,
            notifier,
            cancel: CancellationToken::new(),
            pipeline: ViewPipeline::new(
                surface,
                region,
                EmptyText {
                    no_data: "Die Geschenkeliste ist noch leer",
                    no_matches: "Keine Geschenke passen zum aktuellen Filter",
                },
                gift_node,
            ),
        })
    }

    pub async fn refresh(&mut self) -> Result<()> {
        let ticket = self.pipeline.begin_fetch();
        let outcome = cancellable(&self.cancel, self.backend.gifts()).await;
        self.pipeline.apply_fetch(ticket, outcome)
    }

    pub fn set_category_filter(&mut self, value: impl Into<String>) {
        self.pipeline.set_filter(FilterField::Category, value);
    }

    pub fn set_status_filter(&mut self, value: impl Into<String>) {
        self.pipeline.set_filter(FilterField::Status, value);
    }

    pub fn search_changed(&mut self, value: impl Into<String>) -> (Debouncer, DebounceTicket) {
        self.pipeline.search_changed(value)
    }

    pub fn commit_search(&mut self, ticket: DebounceTicket) {
        self.pipeline.commit_search(ticket);
    }

    pub async fn set_search(&mut self, value: impl Into<String>) {
        self.pipeline.set_search(value).await;
    }

    /// Reserves a gift in the given name.
    ///
    /// An empty name is rejected client-side before any request is built;
    /// the validation error is returned for inline display.
    pub async fn reserve(&mut self, gift: GiftId, reserved_by: &str) -> Result<()> {
        if reserved_by.trim().is_empty() {
            return Err(FestError::validation(
                "reserved_by",
                "Bitte einen Namen für die Reservierung angeben",
            ));
        }
        match cancellable(&self.cancel, self.backend.reserve_gift(gift, reserved_by)).await {
            Ok(message) => {
                self.notifier.notify(
                    message.as_deref().unwrap_or("Geschenk reserviert"),
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

    pub fn pipeline(&self) -> &ViewPipeline<GiftItem> {
        &self.pipeline
    }

    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}

fn gift_node(gift: &GiftItem) -> Node {
    let mut node = Node::block("gift-card")
        .with_child(Node::text("gift-title", gift.title.as_str()))
        .with_child(Node::text("gift-price", format::currency_cents(gift.price_cents)))
        .with_child(Node::text("gift-status", gift.status.as_str()));
    if let Some(reserved_by) = &gift.reserved_by {
        node = node.with_child(Node::text("gift-reserved-by", reserved_by.as_str()));
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::RegionMap;
    use crate::surface::RegionId;
    use crate::testing::{MockBackend, MockNotifier, MockSurface};
    use fest_core::model::GiftStatus;

    fn gift(id: i64, title: &str, category: &str, status: GiftStatus) -> GiftItem {
        GiftItem {
            id: GiftId(id),
            title: title.to_string(),
            description: String::new(),
            price_cents: 4999,
            category: category.to_string(),
            status,
            reserved_by: None,
        }
    }

    fn controller() -> (
        RegistryController,
        Arc<MockBackend>,
        Arc<MockNotifier>,
        Arc<crate::testing::CommitLog>,
    ) {
        let backend = Arc::new(MockBackend::default());
        let notifier = Arc::new(MockNotifier::default());
        let (surface, log) = MockSurface::shared();
        let mut regions = RegionMap::new();
        regions.register(RegistryController::REGION);
        let controller =
            RegistryController::new(backend.clone(), notifier.clone(), surface, &regions).unwrap();
        (controller, backend, notifier, log)
    }

    #[tokio::test]
    async fn test_empty_reserver_name_never_reaches_the_network() {
        let (mut controller, backend, notifier, _) = controller();
        let err = controller.reserve(GiftId(1), "   ").await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(backend.mutations(), 0);
        // Validation failures are shown inline, not toasted.
        assert!(notifier.kinds().is_empty());
    }

    #[tokio::test]
    async fn test_reserve_refetches_after_write() {
        let (mut controller, backend, notifier, _) = controller();
        controller.refresh().await.unwrap();
        let fetches_before = backend.fetches();
        controller.reserve(GiftId(1), "Bob").await.unwrap();
        assert_eq!(backend.mutations(), 1);
        assert_eq!(backend.fetches(), fetches_before + 1);
        assert_eq!(notifier.kinds(), vec![NoticeKind::Success]);
    }

    #[tokio::test]
    async fn test_category_and_status_filters_compose() {
        let (mut controller, backend, _, _) = controller();
        *backend.gift_list.lock().unwrap() = vec![
            gift(1, "Toaster", "küche", GiftStatus::Available),
            gift(2, "Vase", "deko", GiftStatus::Available),
            gift(3, "Pfanne", "küche", GiftStatus::Reserved),
        ];
        controller.refresh().await.unwrap();
        controller.set_category_filter("küche");
        controller.set_status_filter("available");
        let titles: Vec<_> = controller
            .pipeline()
            .view()
            .map(|g| g.title.clone())
            .collect();
        assert_eq!(titles, vec!["Toaster"]);
    }

    #[tokio::test]
    async fn test_gift_node_formats_price() {
        let (mut controller, backend, _, log) = controller();
        *backend.gift_list.lock().unwrap() =
            vec![gift(1, "Toaster", "küche", GiftStatus::Available)];
        controller.refresh().await.unwrap();
        let nodes = log.commits(RegionId(0)).pop().unwrap();
        assert_eq!(nodes[0].children[1].text.as_deref(), Some("49,99 €"));
    }
}
