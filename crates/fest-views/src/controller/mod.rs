//! One controller per view.
//!
//! Each controller owns exactly one view's state (its pipeline, or for
//! seating the plan and the drag engine, plus its cancellation token and
//! render regions), so no state is shared across views. Mutations follow
//! re-fetch-after-write: the backend is the single source of truth, and a
//! successful write is always followed by an authoritative fetch instead of
//! a local patch.

mod contacts;
mod gallery;
mod guests;
mod notes;
mod push;
mod registry;
mod schedule;
mod seating;

pub use contacts::ContactsController;
pub use gallery::GalleryController;
pub use guests::GuestsController;
pub use notes::NotesController;
pub use push::PushController;
pub use registry::RegistryController;
pub use schedule::ScheduleController;
pub use seating::SeatingController;

use fest_core::FestError;

use crate::surface::{NoticeKind, Notifier};

/// Routes an async failure to the toast surface.
///
/// Cancellations are silent (the view is gone), and validation failures are
/// returned to the caller for inline display instead of toasting.
pub(crate) fn notify_failure(notifier: &dyn Notifier, err: &FestError) {
    match err {
        FestError::Cancelled | FestError::Validation { .. } => {}
        FestError::AuthRequired => notifier.notify(
            "Sitzung abgelaufen, bitte neu anmelden",
            NoticeKind::Warning,
        ),
        other => notifier.notify(&other.to_string(), NoticeKind::Error),
    }
}
