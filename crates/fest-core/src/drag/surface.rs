//! The visual-feedback seam of the drag engine.

use crate::model::TableId;

/// Opaque handle to a frontend element (a guest chip, a table region, a
/// scrollable container). Issued by the frontend at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

/// Everything the engine is allowed to touch visually.
///
/// The engine is the single writer of drag-related visual state; frontends
/// implement this trait and must not mutate the same state from anywhere
/// else. All calls are idempotent style toggles, and after any completed or
/// cancelled gesture the engine restores every toggle it flipped.
pub trait DragSurface {
    /// Moves the dragged element by the given offset from its grab origin.
    fn set_drag_offset(&mut self, element: ElementId, dx: f64, dy: f64);

    /// Removes any inline offset left on the element.
    fn clear_drag_offset(&mut self, element: ElementId);

    /// Shows the placeholder at the dragged element's origin.
    fn show_placeholder(&mut self, origin: ElementId);

    fn remove_placeholder(&mut self);

    /// Toggles the "can accept a drop" affordance on a zone.
    fn set_zone_active(&mut self, zone: TableId, active: bool);

    /// Toggles the hover affordance on the zone under the pointer.
    fn set_zone_hover(&mut self, zone: TableId, hovered: bool);

    /// Nudges a scrollable container during edge auto-scroll.
    fn scroll_by(&mut self, region: ElementId, dy: f64);
}

impl<S: DragSurface + ?Sized> DragSurface for Box<S> {
    fn set_drag_offset(&mut self, element: ElementId, dx: f64, dy: f64) {
        (**self).set_drag_offset(element, dx, dy);
    }

    fn clear_drag_offset(&mut self, element: ElementId) {
        (**self).clear_drag_offset(element);
    }

    fn show_placeholder(&mut self, origin: ElementId) {
        (**self).show_placeholder(origin);
    }

    fn remove_placeholder(&mut self) {
        (**self).remove_placeholder();
    }

    fn set_zone_active(&mut self, zone: TableId, active: bool) {
        (**self).set_zone_active(zone, active);
    }

    fn set_zone_hover(&mut self, zone: TableId, hovered: bool) {
        (**self).set_zone_hover(zone, hovered);
    }

    fn scroll_by(&mut self, region: ElementId, dy: f64) {
        (**self).scroll_by(region, dy);
    }
}

/// Surface for frontends without pointer input (tests, one-shot CLI runs).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDragSurface;

impl DragSurface for NoopDragSurface {
    fn set_drag_offset(&mut self, _element: ElementId, _dx: f64, _dy: f64) {}
    fn clear_drag_offset(&mut self, _element: ElementId) {}
    fn show_placeholder(&mut self, _origin: ElementId) {}
    fn remove_placeholder(&mut self) {}
    fn set_zone_active(&mut self, _zone: TableId, _active: bool) {}
    fn set_zone_hover(&mut self, _zone: TableId, _hovered: bool) {}
    fn scroll_by(&mut self, _region: ElementId, _dy: f64) {}
}
