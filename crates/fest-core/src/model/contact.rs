//! Vendor and helper contacts.

use serde::{Deserialize, Serialize};

use super::ids::ContactId;
use crate::collection::Filterable;

/// A contact snapshot (caterer, photographer, best man, ...).
///
/// Location/map presentation is a frontend concern; the model only carries
/// the address text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl Filterable for Contact {
    fn search_haystack(&self) -> String {
        format!("{} {}", self.name, self.role)
    }
}
