//! Gift-registry endpoints.

use serde::Serialize;

use fest_core::Result;
use fest_core::model::{GiftId, GiftItem};

use crate::client::ApiClient;
use crate::response::Ack;

#[derive(Serialize)]
struct ReserveRequest<'a> {
    reserved_by: &'a str,
}

impl ApiClient {
    /// Fetches the gift registry.
    pub async fn gifts(&self) -> Result<Vec<GiftItem>> {
        self.get_json("api/gifts").await
    }

    /// Reserves a gift in the given name. Double reservations come back as
    /// `{success: false}` from the backend.
    pub async fn reserve_gift(&self, gift: GiftId, reserved_by: &str) -> Result<Option<String>> {
        let ack: Ack = self
            .post_json(
                &format!("api/gifts/{gift}/reserve"),
                &ReserveRequest { reserved_by },
            )
            .await?;
        ack.into_result()
    }
}
