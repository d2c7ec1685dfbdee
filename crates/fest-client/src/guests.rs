//! Guest-list endpoints.

use serde::Serialize;

use fest_core::Result;
use fest_core::model::{Guest, GuestId, RsvpStatus};

use crate::client::ApiClient;
use crate::response::Ack;

#[derive(Serialize)]
struct RsvpUpdate {
    rsvp: RsvpStatus,
}

impl ApiClient {
    /// Fetches the full guest list.
    pub async fn guests(&self) -> Result<Vec<Guest>> {
        self.get_json("api/guests").await
    }

    /// Updates one guest's RSVP state. The caller re-fetches afterwards;
    /// nothing is patched locally.
    pub async fn update_rsvp(&self, guest: GuestId, rsvp: RsvpStatus) -> Result<Option<String>> {
        let ack: Ack = self
            .post_json(&format!("api/guests/{guest}/rsvp"), &RsvpUpdate { rsvp })
            .await?;
        ack.into_result()
    }
}
