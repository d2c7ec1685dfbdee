//! Notes endpoints.

use fest_core::Result;
use fest_core::model::{Note, NoteDraft, NoteId};

use crate::client::ApiClient;
use crate::response::Ack;

impl ApiClient {
    /// Fetches all notes.
    pub async fn notes(&self) -> Result<Vec<Note>> {
        self.get_json("api/notes").await
    }

    /// Creates a note. The draft is validated by the caller before the
    /// request is ever built.
    pub async fn create_note(&self, draft: &NoteDraft) -> Result<Option<String>> {
        let ack: Ack = self.post_json("api/notes", draft).await?;
        ack.into_result()
    }

    /// Replaces a note's title and body.
    pub async fn update_note(&self, note: NoteId, draft: &NoteDraft) -> Result<Option<String>> {
        let ack: Ack = self.put_json(&format!("api/notes/{note}"), draft).await?;
        ack.into_result()
    }

    pub async fn delete_note(&self, note: NoteId) -> Result<Option<String>> {
        let ack: Ack = self.delete_json(&format!("api/notes/{note}")).await?;
        ack.into_result()
    }
}
