//! Domain models for every backend entity.
//!
//! All models are transient snapshots of server state: created on a fetch
//! response, replaced wholesale by the next fetch, and discarded when the
//! owning view shuts down. Nothing in here is persisted client-side.

pub mod contact;
pub mod gift;
pub mod guest;
pub mod ids;
pub mod note;
pub mod push;
pub mod schedule;
pub mod seating;
pub mod upload;

pub use contact::Contact;
pub use gift::{GiftItem, GiftStatus};
pub use guest::{Guest, RsvpStatus};
pub use ids::{ContactId, GiftId, GuestId, NoteId, ScheduleId, TableId, UploadId};
pub use note::{Note, NoteDraft};
pub use push::{PushSubscription, SubscriptionKeys};
pub use schedule::{ScheduleDraft, ScheduleItem};
pub use seating::{SeatingPlan, Table};
pub use upload::{Upload, UploadKind, UploadStats};
