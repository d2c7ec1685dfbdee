//! Seating tables and the seating plan snapshot.

use serde::{Deserialize, Serialize};

use super::guest::Guest;
use super::ids::TableId;

/// A seating table. Capacity is informational; the backend enforces limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub id: TableId,
    pub name: String,
    pub capacity: u32,
}

/// The full seating view: every table plus every guest, as last fetched.
///
/// Seat membership lives on the guests (`Guest::table_id`); the plan only
/// offers read access by table. Reassignments go through the backend and are
/// followed by a re-fetch of the whole plan.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeatingPlan {
    #[serde(default)]
    pub tables: Vec<Table>,
    #[serde(default)]
    pub guests: Vec<Guest>,
}

impl SeatingPlan {
    pub fn table(&self, id: TableId) -> Option<&Table> {
        self.tables.iter().find(|t| t.id == id)
    }

    /// Guests currently seated at the given table, in fetch order.
    pub fn seated_at(&self, table: TableId) -> impl Iterator<Item = &Guest> {
        self.guests
            .iter()
            .filter(move |g| g.table_id == Some(table))
    }

    /// Guests without a table, in fetch order.
    pub fn unseated(&self) -> impl Iterator<Item = &Guest> {
        self.guests.iter().filter(|g| g.table_id.is_none())
    }

    pub fn occupancy(&self, table: TableId) -> usize {
        self.seated_at(table).count()
    }
}
