//! The contact-list view.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use fest_client::cancellable;
use fest_core::Result;
use fest_core::collection::{DebounceTicket, Debouncer};
use fest_core::model::Contact;

use crate::backend::Backend;
use crate::bindings::{RegionResolver, require_region};
use crate::pipeline::{EmptyText, ViewPipeline};
use crate::surface::{Node, SharedSurface};

pub struct ContactsController {
    backend: Arc<dyn Backend>,
    cancel: CancellationToken,
    pipeline: ViewPipeline<Contact>,
}

impl ContactsController {
    pub const REGION: &'static str = "contact-list";

    pub fn new(
        backend: Arc<dyn Backend>,
        surface: SharedSurface,
        resolver: &dyn RegionResolver,
    ) -> Result<Self> {
        let region = require_region(resolver, Self::REGION)?;
        Ok(Self {
            backend,
            cancel: CancellationToken::new(),
            pipeline: ViewPipeline::new(
                surface,
                region,
                EmptyText {
                    no_data: "Noch keine Kontakte hinterlegt",
                    no_matches: "Keine Kontakte passen zur Suche",
                },
                contact_node,
            ),
        })
    }

    pub async fn refresh(&mut self) -> Result<()> {
        let ticket = self.pipeline.begin_fetch();
        let outcome = cancellable(&self.cancel, self.backend.contacts()).await;
        self.pipeline.apply_fetch(ticket, outcome)
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

    pub fn pipeline(&self) -> &ViewPipeline<Contact> {
        &self.pipeline
    }

    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}

fn contact_node(contact: &Contact) -> Node {
    let mut node = Node::block("contact-card")
        .with_child(Node::text("contact-name", contact.name.as_str()))
        .with_child(Node::text("contact-role", contact.role.as_str()));
    if let Some(phone) = &contact.phone {
        node = node.with_child(Node::text("contact-phone", phone.as_str()));
    }
    if let Some(email) = &contact.email {
        node = node.with_child(Node::text("contact-email", email.as_str()));
    }
    if let Some(address) = &contact.address {
        node = node.with_child(Node::text("contact-address", address.as_str()));
    }
    node
}
