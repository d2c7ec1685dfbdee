//! The backend seam the controllers talk through.
//!
//! [`ApiClient`] is the production implementation; tests substitute mocks.
//! Mutating calls return the server's optional success message for the
//! toast surface.

use async_trait::async_trait;

use fest_client::ApiClient;
use fest_core::Result;
use fest_core::model::{
    Contact, GiftId, GiftItem, Guest, GuestId, Note, NoteDraft, NoteId, PushSubscription,
    RsvpStatus, ScheduleDraft, ScheduleId, ScheduleItem, SeatingPlan, TableId, Upload, UploadStats,
};

#[async_trait]
pub trait Backend: Send + Sync {
    async fn guests(&self) -> Result<Vec<Guest>>;
    async fn update_rsvp(&self, guest: GuestId, rsvp: RsvpStatus) -> Result<Option<String>>;

    async fn uploads(&self) -> Result<Vec<Upload>>;
    async fn upload_stats(&self) -> Result<UploadStats>;

    async fn gifts(&self) -> Result<Vec<GiftItem>>;
    async fn reserve_gift(&self, gift: GiftId, reserved_by: &str) -> Result<Option<String>>;

    async fn notes(&self) -> Result<Vec<Note>>;
    async fn create_note(&self, draft: &NoteDraft) -> Result<Option<String>>;
    async fn update_note(&self, note: NoteId, draft: &NoteDraft) -> Result<Option<String>>;
    async fn delete_note(&self, note: NoteId) -> Result<Option<String>>;

    async fn contacts(&self) -> Result<Vec<Contact>>;

    async fn seating_plan(&self) -> Result<SeatingPlan>;
    async fn assign_guest(&self, guest: GuestId, table: TableId) -> Result<Option<String>>;
    async fn unassign_guest(&self, guest: GuestId) -> Result<Option<String>>;

    async fn schedule(&self) -> Result<Vec<ScheduleItem>>;
    async fn create_schedule_item(&self, draft: &ScheduleDraft) -> Result<Option<String>>;
    async fn delete_schedule_item(&self, item: ScheduleId) -> Result<Option<String>>;

    async fn vapid_public_key(&self) -> Result<Vec<u8>>;
    async fn register_push_subscription(
        &self,
        subscription: &PushSubscription,
    ) -> Result<Option<String>>;
    async fn unregister_push_subscription(&self, endpoint: &str) -> Result<Option<String>>;
}

#[async_trait]
impl Backend for ApiClient {
    async fn guests(&self) -> Result<Vec<Guest>> {
        ApiClient::guests(self).await
    }

    async fn update_rsvp(&self, guest: GuestId, rsvp: RsvpStatus) -> Result<Option<String>> {
        ApiClient::update_rsvp(self, guest, rsvp).await
    }

    async fn uploads(&self) -> Result<Vec<Upload>> {
        ApiClient::uploads(self).await
    }

    async fn upload_stats(&self) -> Result<UploadStats> {
        ApiClient::upload_stats(self).await
    }

    async fn gifts(&self) -> Result<Vec<GiftItem>> {
        ApiClient::gifts(self).await
    }

    async fn reserve_gift(&self, gift: GiftId, reserved_by: &str) -> Result<Option<String>> {
        ApiClient::reserve_gift(self, gift, reserved_by).await
    }

    async fn notes(&self) -> Result<Vec<Note>> {
        ApiClient::notes(self).await
    }

    async fn create_note(&self, draft: &NoteDraft) -> Result<Option<String>> {
        ApiClient::create_note(self, draft).await
    }

    async fn update_note(&self, note: NoteId, draft: &NoteDraft) -> Result<Option<String>> {
        ApiClient::update_note(self, note, draft).await
    }

    async fn delete_note(&self, note: NoteId) -> Result<Option<String>> {
        ApiClient::delete_note(self, note).await
    }

    async fn contacts(&self) -> Result<Vec<Contact>> {
        ApiClient::contacts(self).await
    }

    async fn seating_plan(&self) -> Result<SeatingPlan> {
        ApiClient::seating_plan(self).await
    }

    async fn assign_guest(&self, guest: GuestId, table: TableId) -> Result<Option<String>> {
        ApiClient::assign_guest(self, guest, table).await
    }

    async fn unassign_guest(&self, guest: GuestId) -> Result<Option<String>> {
        ApiClient::unassign_guest(self, guest).await
    }

    async fn schedule(&self) -> Result<Vec<ScheduleItem>> {
        ApiClient::schedule(self).await
    }

    async fn create_schedule_item(&self, draft: &ScheduleDraft) -> Result<Option<String>> {
        ApiClient::create_schedule_item(self, draft).await
    }

    async fn delete_schedule_item(&self, item: ScheduleId) -> Result<Option<String>> {
        ApiClient::delete_schedule_item(self, item).await
    }

    async fn vapid_public_key(&self) -> Result<Vec<u8>> {
        ApiClient::vapid_public_key(self).await
    }

    async fn register_push_subscription(
        &self,
        subscription: &PushSubscription,
    ) -> Result<Option<String>> {
        ApiClient::register_push_subscription(self, subscription).await
    }

    async fn unregister_push_subscription(&self, endpoint: &str) -> Result<Option<String>> {
        ApiClient::unregister_push_subscription(self, endpoint).await
    }
}
