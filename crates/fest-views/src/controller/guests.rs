//! The guest-list view.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use fest_client::cancellable;
use fest_core::Result;
use fest_core::collection::{DebounceTicket, Debouncer, FilterField};
use fest_core::model::{Guest, GuestId, RsvpStatus};

use super::notify_failure;
use crate::backend::Backend;
use crate::bindings::{RegionResolver, require_region};
use crate::pipeline::{EmptyText, ViewPipeline};
use crate::surface::{Node, NoticeKind, Notifier, SharedSurface};

pub struct GuestsController {
    backend: Arc<dyn Backend>,
    notifier: Arc<dyn Notifier>,
    cancel: CancellationToken,
    pipeline: ViewPipeline<Guest>,
}

impl std::fmt::Debug for GuestsController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GuestsController").finish_non_exhaustive()
    }
}

impl GuestsController {
    pub const REGION: &'static str = "guest-list";

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
                    no_data: "Noch keine Gäste eingetragen",
                    no_matches: "Keine Gäste passen zum aktuellen Filter",
                },
                guest_node,
            ),
        })
    }

    /// Fetches the authoritative guest list and re-renders.
    pub async fn refresh(&mut self) -> Result<()> {
        let ticket = self.pipeline.begin_fetch();
        let outcome = cancellable(&self.cancel, self.backend.guests()).await;
        self.pipeline.apply_fetch(ticket, outcome)
    }

    /// RSVP filter; applies immediately.
    pub fn set_status_filter(&mut self, value: impl Into<String>) {
        self.pipeline.set_filter(FilterField::Status, value);
    }

    pub fn search_changed(&mut self, value: impl Into<String>) -> (Debouncer, DebounceTicket) {
        self.pipeline.search_changed(value)
    }

    pub fn commit_search(&mut self, ticket: DebounceTicket) {
        self.pipeline.commit_search(ticket);
    }

    /// Debounced one-shot search.
    pub async fn set_search(&mut self, value: impl Into<String>) {
        self.pipeline.set_search(value).await;
    }

    /// Updates one guest's RSVP, then re-fetches instead of patching.
    pub async fn set_rsvp(&mut self, guest: GuestId, rsvp: RsvpStatus) -> Result<()> {
        match cancellable(&self.cancel, self.backend.update_rsvp(guest, rsvp)).await {
            Ok(message) => {
                self.notifier.notify(
                    message.as_deref().unwrap_or("Antwort gespeichert"),
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

    pub fn pipeline(&self) -> &ViewPipeline<Guest> {
        &self.pipeline
    }

    /// Cancels in-flight work; late responses never touch the view.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}

fn guest_node(guest: &Guest) -> Node {
    let mut node = Node::block("guest-card")
        .with_child(Node::text("guest-name", guest.name.as_str()))
        .with_child(Node::text("guest-rsvp", guest.rsvp.as_str()));
    if guest.party_size > 1 {
        node = node.with_child(Node::text("guest-party", format!("+{}", guest.party_size - 1)));
    }
    if let Some(note) = &guest.dietary_note {
        node = node.with_child(Node::text("guest-diet", note.as_str()));
    }
    node
}
