//! Fail-fast view bindings.
//!
//! A controller resolves every region it writes once, at construction, and
//! refuses to start if one is missing. That replaces per-call null checks
//! scattered through handlers with a single constructor-time error.

use std::collections::HashMap;

use fest_core::{FestError, Result};

use crate::surface::RegionId;

/// Lookup from stable region names to frontend region handles.
pub trait RegionResolver {
    fn resolve(&self, name: &str) -> Option<RegionId>;
}

/// Resolves a required region or fails with a `MissingBinding` error.
pub fn require_region(resolver: &dyn RegionResolver, name: &str) -> Result<RegionId> {
    resolver
        .resolve(name)
        .ok_or_else(|| FestError::missing_binding(name))
}

/// Simple name→region registry for frontends that declare their regions up
/// front (and for tests).
#[derive(Debug, Default)]
pub struct RegionMap {
    regions: HashMap<String, RegionId>,
    next: u64,
}

impl RegionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a region under the given name, handing out sequential ids.
    pub fn register(&mut self, name: impl Into<String>) -> RegionId {
        let id = RegionId(self.next);
        self.next += 1;
        self.regions.insert(name.into(), id);
        id
    }
}

impl RegionResolver for RegionMap {
    fn resolve(&self, name: &str) -> Option<RegionId> {
        self.regions.get(name).copied()
    }
}
