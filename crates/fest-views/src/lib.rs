//! View layer of the fest client.
//!
//! Controllers wire the backend, the filterable collections from
//! `fest-core`, and a frontend-provided render surface into one
//! fetch → filter → render pipeline per view. Each view's state lives in
//! exactly one controller instance; there are no cross-view globals, each
//! render region has exactly one writer, and every mutation re-fetches the
//! authoritative collection instead of patching locally.

pub mod backend;
pub mod bindings;
pub mod controller;
pub mod fetch;
pub mod pipeline;
pub mod surface;

#[cfg(test)]
pub(crate) mod testing;

pub use backend::Backend;
pub use controller::{
    ContactsController, GalleryController, GuestsController, NotesController, PushController,
    RegistryController, ScheduleController, SeatingController,
};
pub use surface::{Node, NoticeKind, Notifier, RegionId, RenderSurface, SharedSurface};
