//! Planning notes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::NoteId;
use crate::collection::Filterable;
use crate::error::{FestError, Result};

/// A note snapshot as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    #[serde(default)]
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Filterable for Note {
    fn search_haystack(&self) -> String {
        format!("{} {}", self.title, self.body)
    }
}

/// Client-side note input, validated before any network call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    #[serde(default)]
    pub body: String,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Rejects drafts that must not be sent to the server.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(FestError::validation("title", "a note needs a title"));
        }
        Ok(())
    }
}
