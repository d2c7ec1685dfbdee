//! The event schedule (timeline).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::ids::ScheduleId;
use crate::collection::Filterable;
use crate::error::{FestError, Result};

/// One schedule entry. Entries without an end are point events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleItem {
    pub id: ScheduleId,
    pub title: String,
    pub starts_at: DateTime<Utc>,
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ScheduleItem {
    pub fn day(&self) -> NaiveDate {
        self.starts_at.date_naive()
    }

    pub fn duration_minutes(&self) -> Option<i64> {
        self.ends_at
            .map(|end| (end - self.starts_at).num_minutes())
    }
}

impl Filterable for ScheduleItem {
    fn search_haystack(&self) -> String {
        match &self.location {
            Some(location) => format!("{} {}", self.title, location),
            None => self.title.clone(),
        }
    }
}

/// Client-side schedule input, validated before any network call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleDraft {
    pub title: String,
    pub starts_at: DateTime<Utc>,
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ScheduleDraft {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(FestError::validation("title", "a schedule entry needs a title"));
        }
        if let Some(end) = self.ends_at {
            if end < self.starts_at {
                return Err(FestError::validation(
                    "ends_at",
                    "the end must not lie before the start",
                ));
            }
        }
        Ok(())
    }
}
