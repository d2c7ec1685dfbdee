//! Guest domain model.

use serde::{Deserialize, Serialize};

use super::ids::{GuestId, TableId};
use crate::collection::Filterable;

/// RSVP state as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RsvpStatus {
    #[default]
    Pending,
    Attending,
    Declined,
}

impl RsvpStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Attending => "attending",
            Self::Declined => "declined",
        }
    }
}

impl std::str::FromStr for RsvpStatus {
    type Err = crate::FestError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "attending" => Ok(Self::Attending),
            "declined" => Ok(Self::Declined),
            other => Err(crate::FestError::validation(
                "rsvp",
                format!("unknown RSVP state '{other}'"),
            )),
        }
    }
}

/// A guest snapshot as last fetched from the server.
///
/// Guests are never mutated locally; every change goes through the backend
/// and is followed by an authoritative re-fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    pub id: GuestId,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub rsvp: RsvpStatus,
    #[serde(default = "default_party_size")]
    pub party_size: u32,
    #[serde(default)]
    pub dietary_note: Option<String>,
    /// Table the guest is currently seated at, if any.
    #[serde(default)]
    pub table_id: Option<TableId>,
}

fn default_party_size() -> u32 {
    1
}

impl Guest {
    pub fn is_seated(&self) -> bool {
        self.table_id.is_some()
    }
}

impl Filterable for Guest {
    fn status(&self) -> Option<&str> {
        Some(self.rsvp.as_str())
    }

    fn search_haystack(&self) -> String {
        match &self.email {
            Some(email) => format!("{} {}", self.name, email),
            None => self.name.clone(),
        }
    }
}
