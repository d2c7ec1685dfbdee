//! Gift-registry items.

use serde::{Deserialize, Serialize};

use super::ids::GiftId;
use crate::collection::Filterable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GiftStatus {
    #[default]
    Available,
    Reserved,
    Purchased,
}

impl GiftStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Reserved => "reserved",
            Self::Purchased => "purchased",
        }
    }
}

/// A registry item snapshot. Reservation state is server-owned; the client
/// only mirrors it between fetches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiftItem {
    pub id: GiftId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price_cents: i64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub status: GiftStatus,
    #[serde(default)]
    pub reserved_by: Option<String>,
}

impl GiftItem {
    pub fn is_available(&self) -> bool {
        self.status == GiftStatus::Available
    }
}

impl Filterable for GiftItem {
    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn status(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn search_haystack(&self) -> String {
        format!("{} {}", self.title, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_defaults() {
        let gift: GiftItem =
            serde_json::from_str(r#"{"id": 3, "title": "Toaster", "price_cents": 4999}"#).unwrap();
        assert_eq!(gift.status, GiftStatus::Available);
        assert!(gift.is_available());
        assert!(gift.reserved_by.is_none());
    }

    #[test]
    fn test_reserved_is_not_available() {
        let gift = GiftItem {
            id: GiftId(1),
            title: "Vase".to_string(),
            description: String::new(),
            price_cents: 2500,
            category: "deko".to_string(),
            status: GiftStatus::Reserved,
            reserved_by: Some("Bob".to_string()),
        };
        assert!(!gift.is_available());
        assert_eq!(gift.status(), Some("reserved"));
        assert_eq!(gift.category(), Some("deko"));
    }
}
