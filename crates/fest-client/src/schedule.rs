//! Schedule (Zeitplan) endpoints.

use fest_core::Result;
use fest_core::model::{ScheduleDraft, ScheduleId, ScheduleItem};

use crate::client::ApiClient;
use crate::response::Ack;

impl ApiClient {
    /// Fetches every schedule entry.
    pub async fn schedule(&self) -> Result<Vec<ScheduleItem>> {
        self.get_json("api/zeitplan").await
    }

    /// Creates a schedule entry from a caller-validated draft.
    pub async fn create_schedule_item(&self, draft: &ScheduleDraft) -> Result<Option<String>> {
        let ack: Ack = self.post_json("api/zeitplan", draft).await?;
        ack.into_result()
    }

    pub async fn delete_schedule_item(&self, item: ScheduleId) -> Result<Option<String>> {
        let ack: Ack = self.delete_json(&format!("api/zeitplan/{item}")).await?;
        ack.into_result()
    }
}
