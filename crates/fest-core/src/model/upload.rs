//! Uploaded photos and videos.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::UploadId;
use crate::collection::Filterable;

/// Broad media classification used by the gallery filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadKind {
    Image,
    Video,
    Other,
}

impl UploadKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Other => "other",
        }
    }
}

/// An upload snapshot as listed by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Upload {
    pub id: UploadId,
    pub file_name: String,
    /// MIME type as reported by the server; may be empty for legacy rows.
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub size_bytes: u64,
    #[serde(default)]
    pub uploaded_by: String,
    pub uploaded_at: DateTime<Utc>,
    pub url: String,
}

impl Upload {
    /// Classifies the upload by its MIME type, guessing from the file name
    /// when the server left the MIME type empty.
    pub fn kind(&self) -> UploadKind {
        let effective: &str = if self.mime_type.is_empty() {
            mime_guess::from_path(&self.file_name)
                .first_raw()
                .unwrap_or("")
        } else {
            &self.mime_type
        };
        if effective.starts_with("image/") {
            UploadKind::Image
        } else if effective.starts_with("video/") {
            UploadKind::Video
        } else {
            UploadKind::Other
        }
    }
}

impl Filterable for Upload {
    fn category(&self) -> Option<&str> {
        Some(self.kind().as_str())
    }

    fn search_haystack(&self) -> String {
        format!("{} {}", self.file_name, self.uploaded_by)
    }
}

/// Aggregate numbers for the gallery statistics strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UploadStats {
    pub total: u64,
    pub images: u64,
    pub videos: u64,
    pub total_bytes: u64,
}
