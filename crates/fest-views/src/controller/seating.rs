//! The table-seating view: the board render plus the drag gesture wiring.
//!
//! The controller owns the [`DragEngine`]; the frontend registers guest
//! chips and table regions after each layout pass and forwards raw pointer
//! events. A completed drop posts the reassignment and then re-fetches the
//! whole plan; the view never patches seat membership locally.

use std::sync::{Arc, PoisonError};

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use fest_client::cancellable;
use fest_core::drag::{BoundsFn, DragEngine, DragSurface, DropHandler, ElementId};
use fest_core::geometry::Point;
use fest_core::model::{Guest, GuestId, SeatingPlan, TableId};
use fest_core::{FestError, Result};

use super::notify_failure;
use crate::backend::Backend;
use crate::bindings::{RegionResolver, require_region};
use crate::fetch::FetchSequencer;
use crate::pipeline::{ViewPhase, error_block};
use crate::surface::{Node, NoticeKind, Notifier, RegionId, SharedSurface};

/// Posts the reassignment when the engine resolves a drop.
struct AssignHandler {
    backend: Arc<dyn Backend>,
    cancel: CancellationToken,
}

#[async_trait]
impl DropHandler for AssignHandler {
    async fn assign(&self, guest: GuestId, table: TableId) -> Result<()> {
        cancellable(&self.cancel, self.backend.assign_guest(guest, table))
            .await
            .map(|_| ())
    }
}

pub struct SeatingController {
    backend: Arc<dyn Backend>,
    notifier: Arc<dyn Notifier>,
    surface: SharedSurface,
    region: RegionId,
    plan: SeatingPlan,
    phase: ViewPhase,
    sequencer: FetchSequencer,
    cancel: CancellationToken,
    engine: DragEngine<Box<dyn DragSurface + Send>>,
}

impl SeatingController {
    pub const REGION: &'static str = "seating-board";

    pub fn new(
        backend: Arc<dyn Backend>,
        notifier: Arc<dyn Notifier>,
        surface: SharedSurface,
        drag_surface: Box<dyn DragSurface + Send>,
        resolver: &dyn RegionResolver,
    ) -> Result<Self> {
        let region = require_region(resolver, Self::REGION)?;
        let cancel = CancellationToken::new();
        let mut engine = DragEngine::new(drag_surface);
        engine.on_drop(Arc::new(AssignHandler {
            backend: backend.clone(),
            cancel: cancel.clone(),
        }));
        Ok(Self {
            backend,
            notifier,
            surface,
            region,
            plan: SeatingPlan::default(),
            phase: ViewPhase::Ready,
            sequencer: FetchSequencer::new(),
            cancel,
            engine,
        })
    }

    /// Fetches the authoritative plan and re-renders the board. Bindings
    /// refer to the previous layout and are dropped; the frontend registers
    /// the new chips and zones after its layout pass.
    pub async fn refresh(&mut self) -> Result<()> {
        let ticket = self.sequencer.begin();
        match cancellable(&self.cancel, self.backend.seating_plan()).await {
            Ok(plan) => {
                if !self.sequencer.is_current(ticket) {
                    tracing::debug!("discarding stale seating response");
                    return Ok(());
                }
                self.engine.clear_registrations();
                self.phase = ViewPhase::Ready;
                self.plan = plan;
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

    pub fn plan(&self) -> &SeatingPlan {
        &self.plan
    }

    // ------------------------------------------------------------------
    // Layout bindings (called by the frontend after each render)
    // ------------------------------------------------------------------

    pub fn bind_guest_chip(&mut self, element: ElementId, guest: GuestId, bounds: BoundsFn) {
        self.engine.register_draggable(element, guest, bounds);
    }

    pub fn unbind_guest_chip(&mut self, element: ElementId) {
        self.engine.unregister_draggable(element);
    }

    pub fn bind_table_zone(&mut self, element: ElementId, table: TableId, bounds: BoundsFn) {
        self.engine.register_drop_zone(element, table, bounds);
    }

    pub fn unbind_table_zone(&mut self, element: ElementId) {
        self.engine.unregister_drop_zone(element);
    }

    pub fn set_scroll_region(&mut self, element: ElementId, bounds: BoundsFn) {
        self.engine.set_scroll_region(element, bounds);
    }

    // ------------------------------------------------------------------
    // Pointer events (forwarded raw by the frontend)
    // ------------------------------------------------------------------

    pub fn pointer_down(&mut self, element: ElementId, point: Point) {
        self.engine.pointer_down(element, point);
    }

    pub fn pointer_move(&mut self, point: Point) {
        self.engine.pointer_move(point);
    }

    pub fn pointer_cancel(&mut self) {
        self.engine.pointer_cancel();
    }

    /// Ends the gesture. A resolved drop posts the reassignment, toasts the
    /// outcome, and re-fetches the plan; a zone-less release is silent.
    pub async fn pointer_up(&mut self, point: Point) -> Result<()> {
        match self.engine.pointer_up(point).await {
            Ok(Some((guest, table))) => {
                tracing::info!(%guest, %table, "guest reassigned by drag");
                self.notifier.notify("Sitzplan aktualisiert", NoticeKind::Success);
                self.refresh().await
            }
            Ok(None) => Ok(()),
            Err(err) => {
                notify_failure(self.notifier.as_ref(), &err);
                Err(err)
            }
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.engine.is_dragging()
    }

    // ------------------------------------------------------------------
    // Direct assignment (keyboard/CLI path, same re-fetch policy)
    // ------------------------------------------------------------------

    pub async fn assign(&mut self, guest: GuestId, table: TableId) -> Result<()> {
        match cancellable(&self.cancel, self.backend.assign_guest(guest, table)).await {
            Ok(message) => {
                self.notifier.notify(
                    message.as_deref().unwrap_or("Sitzplan aktualisiert"),
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

    pub async fn unassign(&mut self, guest: GuestId) -> Result<()> {
        match cancellable(&self.cancel, self.backend.unassign_guest(guest)).await {
            Ok(message) => {
                self.notifier.notify(
                    message.as_deref().unwrap_or("Gast ist wieder ohne Tisch"),
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

    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    fn render(&self) {
        let nodes = self.build_nodes();
        let mut surface = self.surface.lock().unwrap_or_else(PoisonError::into_inner);
        surface.commit(self.region, nodes);
    }

    fn build_nodes(&self) -> Vec<Node> {
        if let ViewPhase::Failed(message) = &self.phase {
            return vec![error_block(message)];
        }
        if self.plan.tables.is_empty() && self.plan.guests.is_empty() {
            return vec![Node::text("empty-state", "Noch keine Tische angelegt")];
        }
        let mut nodes: Vec<Node> = self
            .plan
            .tables
            .iter()
            .map(|table| {
                Node::block("table-zone")
                    .with_child(Node::text("table-name", table.name.as_str()))
                    .with_child(Node::text(
                        "table-occupancy",
                        format!("{}/{}", self.plan.occupancy(table.id), table.capacity),
                    ))
                    .with_children(self.plan.seated_at(table.id).map(guest_chip))
            })
            .collect();
        nodes.push(
            Node::block("unassigned-pool").with_children(self.plan.unseated().map(guest_chip)),
        );
        nodes
    }
}

fn guest_chip(guest: &Guest) -> Node {
    Node::text("guest-chip", guest.name.as_str())
}
