//! Pointer-driven drag reassignment for the table-seating view.
//!
//! The engine turns low-level pointer events into at most one reassignment
//! call per gesture. It owns nothing but the ephemeral [`DragSession`];
//! draggables and drop zones are registered by the frontend when rendered
//! and unregistered when removed, and all visual feedback goes through the
//! [`DragSurface`] seam.

mod engine;
mod surface;

pub use engine::{BoundsFn, DragConfig, DragEngine, DragSession, DropHandler};
pub use surface::{DragSurface, ElementId, NoopDragSurface};
