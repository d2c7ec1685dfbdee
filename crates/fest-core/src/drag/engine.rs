//! The drag state machine.

use std::sync::Arc;

use async_trait::async_trait;

use super::surface::{DragSurface, ElementId};
use crate::error::Result;
use crate::geometry::{Point, Rect};
use crate::model::{GuestId, TableId};

/// Callback returning an element's current screen bounds. Layout can shift
/// under scroll and resize, so bounds are re-read on every event.
pub type BoundsFn = Box<dyn Fn() -> Rect + Send>;

/// The reassignment collaborator invoked on a completed drop.
#[async_trait]
pub trait DropHandler: Send + Sync {
    async fn assign(&self, guest: GuestId, table: TableId) -> Result<()>;
}

/// Tunables for edge auto-scroll.
#[derive(Debug, Clone, Copy)]
pub struct DragConfig {
    /// Distance from the scroll region's top/bottom edge that triggers
    /// auto-scroll, in logical pixels.
    pub scroll_margin: f64,
    /// Scroll offset applied per move event while inside the margin.
    pub scroll_step: f64,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            scroll_margin: 100.0,
            scroll_step: 16.0,
        }
    }
}

/// Ephemeral state of one gesture, pointer-down to pointer-up/cancel.
#[derive(Debug)]
pub struct DragSession {
    /// The guest being moved.
    pub item: GuestId,
    /// The dragged element; owned by the session alone.
    pub source: ElementId,
    /// Pointer position relative to the element origin at grab time.
    pub grab_offset: (f64, f64),
    /// Element origin at grab time.
    origin: Point,
    /// Zone under the pointer after the latest move, if any.
    pub current_zone: Option<TableId>,
}

enum DragState {
    Idle,
    Dragging(DragSession),
}

struct RegisteredDraggable {
    element: ElementId,
    item: GuestId,
    bounds: BoundsFn,
}

struct RegisteredZone {
    element: ElementId,
    zone: TableId,
    bounds: BoundsFn,
}

struct ScrollRegion {
    element: ElementId,
    bounds: BoundsFn,
}

/// Translates a sequence of pointer events into at most one reassignment
/// call per gesture, with visual feedback through a [`DragSurface`].
///
/// At most one session exists at any time: a pointer-down while a gesture is
/// active is ignored (the first gesture wins). Zones are hit-tested in
/// registration order, first containing zone wins, so overlap resolves
/// deterministically.
pub struct DragEngine<S: DragSurface> {
    surface: S,
    draggables: Vec<RegisteredDraggable>,
    zones: Vec<RegisteredZone>,
    scroll_region: Option<ScrollRegion>,
    handler: Option<Arc<dyn DropHandler>>,
    config: DragConfig,
    state: DragState,
}

impl<S: DragSurface> DragEngine<S> {
    pub fn new(surface: S) -> Self {
        Self::with_config(surface, DragConfig::default())
    }

    pub fn with_config(surface: S, config: DragConfig) -> Self {
        Self {
            surface,
            draggables: Vec::new(),
            zones: Vec::new(),
            scroll_region: None,
            handler: None,
            config,
            state: DragState::Idle,
        }
    }

    /// Sets the collaborator invoked with `(guest, table)` on a completed
    /// drop. Replaces any previous handler.
    pub fn on_drop(&mut self, handler: Arc<dyn DropHandler>) {
        self.handler = Some(handler);
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn register_draggable(&mut self, element: ElementId, item: GuestId, bounds: BoundsFn) {
        self.unregister_draggable(element);
        self.draggables.push(RegisteredDraggable {
            element,
            item,
            bounds,
        });
    }

    /// Drops the registration; cancels the gesture if it is being dragged.
    pub fn unregister_draggable(&mut self, element: ElementId) {
        self.draggables.retain(|d| d.element != element);
        let dragging_it =
            matches!(&self.state, DragState::Dragging(session) if session.source == element);
        if dragging_it {
            self.pointer_cancel();
        }
    }

    pub fn register_drop_zone(&mut self, element: ElementId, zone: TableId, bounds: BoundsFn) {
        self.zones.retain(|z| z.element != element);
        self.zones.push(RegisteredZone {
            element,
            zone,
            bounds,
        });
    }

    /// Drops the registration without leaving stale hover state behind.
    pub fn unregister_drop_zone(&mut self, element: ElementId) {
        self.zones.retain(|z| z.element != element);
        if let DragState::Dragging(session) = &mut self.state {
            if let Some(zone) = session.current_zone {
                if !self.zones.iter().any(|z| z.zone == zone) {
                    self.surface.set_zone_hover(zone, false);
                    session.current_zone = None;
                }
            }
        }
    }

    /// Registers the scrollable container watched for edge auto-scroll.
    pub fn set_scroll_region(&mut self, element: ElementId, bounds: BoundsFn) {
        self.scroll_region = Some(ScrollRegion { element, bounds });
    }

    /// Drops every registration, cancelling any active gesture first.
    pub fn clear_registrations(&mut self) {
        self.pointer_cancel();
        self.draggables.clear();
        self.zones.clear();
        self.scroll_region = None;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    /// Starts a gesture if the element is a registered draggable.
    pub fn pointer_down(&mut self, element: ElementId, point: Point) {
        if self.is_dragging() {
            tracing::debug!(?element, "ignoring pointer down, a gesture is already active");
            return;
        }
        let Some(draggable) = self.draggables.iter().find(|d| d.element == element) else {
            return;
        };
        let rect = (draggable.bounds)();
        let session = DragSession {
            item: draggable.item,
            source: element,
            grab_offset: (point.x - rect.x, point.y - rect.y),
            origin: Point::new(rect.x, rect.y),
            current_zone: None,
        };
        tracing::debug!(guest = %session.item, "drag started");
        self.surface.show_placeholder(element);
        for zone in &self.zones {
            self.surface.set_zone_active(zone.zone, true);
        }
        self.state = DragState::Dragging(session);
    }

    /// Repositions the dragged element, re-resolves the hovered zone, and
    /// applies edge auto-scroll. No-op while idle.
    pub fn pointer_move(&mut self, point: Point) {
        let DragState::Dragging(session) = &mut self.state else {
            return;
        };
        let dx = point.x - (session.origin.x + session.grab_offset.0);
        let dy = point.y - (session.origin.y + session.grab_offset.1);
        self.surface.set_drag_offset(session.source, dx, dy);

        // Hover styles are touched only on a zone-boundary crossing.
        let hit = resolve_zone(&self.zones, point);
        if hit != session.current_zone {
            if let Some(previous) = session.current_zone {
                self.surface.set_zone_hover(previous, false);
            }
            if let Some(next) = hit {
                self.surface.set_zone_hover(next, true);
            }
            session.current_zone = hit;
        }

        if let Some(region) = &self.scroll_region {
            let rect = (region.bounds)();
            if point.y - rect.y < self.config.scroll_margin {
                self.surface.scroll_by(region.element, -self.config.scroll_step);
            } else if rect.bottom() - point.y < self.config.scroll_margin {
                self.surface.scroll_by(region.element, self.config.scroll_step);
            }
        }
    }

    /// Ends the gesture. The drop zone is resolved fresh from the final
    /// point (tolerating a stationary final event), cleanup runs
    /// synchronously, and only then is the handler awaited, so a failing
    /// assignment can never leave the dragging visual state behind.
    ///
    /// Returns the resolved `(guest, table)` pair if the handler ran, `None`
    /// for a zone-less release (the "changed my mind" outcome, not an
    /// error).
    pub async fn pointer_up(&mut self, point: Point) -> Result<Option<(GuestId, TableId)>> {
        let session = match std::mem::replace(&mut self.state, DragState::Idle) {
            DragState::Dragging(session) => session,
            DragState::Idle => return Ok(None),
        };
        let hit = resolve_zone(&self.zones, point);
        self.cleanup(&session);
        let Some(zone) = hit else {
            tracing::debug!(guest = %session.item, "drag released outside every zone");
            return Ok(None);
        };
        if let Some(handler) = self.handler.clone() {
            tracing::debug!(guest = %session.item, table = %zone, "drop resolved, invoking assignment");
            handler.assign(session.item, zone).await?;
        }
        Ok(Some((session.item, zone)))
    }

    /// Aborts the gesture (OS-level interruption): full cleanup, no
    /// handler call.
    pub fn pointer_cancel(&mut self) {
        if let DragState::Dragging(session) = std::mem::replace(&mut self.state, DragState::Idle) {
            tracing::debug!(guest = %session.item, "drag cancelled");
            self.cleanup(&session);
        }
    }

    fn cleanup(&mut self, session: &DragSession) {
        self.surface.clear_drag_offset(session.source);
        self.surface.remove_placeholder();
        if let Some(zone) = session.current_zone {
            self.surface.set_zone_hover(zone, false);
        }
        for zone in &self.zones {
            self.surface.set_zone_active(zone.zone, false);
        }
    }
}

fn resolve_zone(zones: &[RegisteredZone], point: Point) -> Option<TableId> {
    zones
        .iter()
        .find(|z| (z.bounds)().contains(point))
        .map(|z| z.zone)
}
