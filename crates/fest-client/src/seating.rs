//! Seating-plan endpoints.

use serde::Serialize;

use fest_core::Result;
use fest_core::model::{GuestId, SeatingPlan, TableId};

use crate::client::ApiClient;
use crate::response::Ack;

#[derive(Serialize)]
struct AssignRequest {
    guest_id: GuestId,
    /// `None` moves the guest back to the unassigned pool.
    table_id: Option<TableId>,
}

impl ApiClient {
    /// Fetches tables and guests in one snapshot.
    pub async fn seating_plan(&self) -> Result<SeatingPlan> {
        self.get_json("api/seating").await
    }

    /// The one side-effecting call the drag engine makes.
    pub async fn assign_guest(&self, guest: GuestId, table: TableId) -> Result<Option<String>> {
        let ack: Ack = self
            .post_json(
                "api/seating/assign",
                &AssignRequest {
                    guest_id: guest,
                    table_id: Some(table),
                },
            )
            .await?;
        ack.into_result()
    }

    /// Moves a guest back to the unassigned pool.
    pub async fn unassign_guest(&self, guest: GuestId) -> Result<Option<String>> {
        let ack: Ack = self
            .post_json(
                "api/seating/assign",
                &AssignRequest {
                    guest_id: guest,
                    table_id: None,
                },
            )
            .await?;
        ack.into_result()
    }
}
