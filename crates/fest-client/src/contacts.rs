//! Contact-list endpoint.

use fest_core::Result;
use fest_core::model::Contact;

use crate::client::ApiClient;

impl ApiClient {
    /// Fetches the vendor/helper contact list.
    pub async fn contacts(&self) -> Result<Vec<Contact>> {
        self.get_json("api/contacts").await
    }
}
