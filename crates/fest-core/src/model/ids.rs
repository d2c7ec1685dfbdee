//! Typed identifiers for server-owned entities.
//!
//! The backend hands out plain integer ids; wrapping them keeps a guest id
//! from ever being passed where a table id is expected (the drag engine's
//! reassignment call takes one of each).

use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }
    };
}

entity_id!(
    /// Identifies a guest.
    GuestId
);
entity_id!(
    /// Identifies a seating table.
    TableId
);
entity_id!(
    /// Identifies an uploaded photo or video.
    UploadId
);
entity_id!(
    /// Identifies a gift-registry item.
    GiftId
);
entity_id!(
    /// Identifies a note.
    NoteId
);
entity_id!(
    /// Identifies a contact.
    ContactId
);
entity_id!(
    /// Identifies a schedule entry.
    ScheduleId
);
