//! Upload-gallery endpoints.

use fest_core::Result;
use fest_core::model::{Upload, UploadStats};

use crate::client::ApiClient;

impl ApiClient {
    /// Fetches the upload listing, newest first as served by the backend.
    pub async fn uploads(&self) -> Result<Vec<Upload>> {
        self.get_json("api/uploads").await
    }

    /// Fetches the aggregate numbers for the statistics strip.
    pub async fn upload_stats(&self) -> Result<UploadStats> {
        self.get_json("api/uploads/stats").await
    }
}
