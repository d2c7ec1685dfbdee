//! The render seam between controllers and a concrete frontend.
//!
//! Controllers produce plain [`Node`] trees; a frontend implements
//! [`RenderSurface`] and owns turning a committed tree into pixels (or
//! terminal lines). Each region has exactly one writing controller, and a
//! commit always replaces the region's whole tree, so renders are a pure
//! function of view state. Event wiring is the surface's concern: nodes
//! carry no handlers, frontends attach listeners at their stable containers.

use std::sync::{Arc, Mutex};

/// Opaque handle to a frontend render region, issued by the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(pub u64);

/// One node of a render tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Style class, stable across renders (frontends key styling off this).
    pub class: &'static str,
    pub text: Option<String>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn block(class: &'static str) -> Self {
        Self {
            class,
            text: None,
            children: Vec::new(),
        }
    }

    pub fn text(class: &'static str, text: impl Into<String>) -> Self {
        Self {
            class,
            text: Some(text.into()),
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }
}

/// A frontend's render target.
pub trait RenderSurface {
    /// Replaces the region's entire node tree. No incremental diffing; a
    /// controller re-renders from scratch on every state change.
    fn commit(&mut self, region: RegionId, nodes: Vec<Node>);
}

/// Controllers on different views share one surface behind a mutex; each
/// writes only its own regions.
pub type SharedSurface = Arc<Mutex<dyn RenderSurface + Send>>;

/// Severity of a toast message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NoticeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

/// Fire-and-forget toast surface for user-visible outcomes.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, kind: NoticeKind);
}
