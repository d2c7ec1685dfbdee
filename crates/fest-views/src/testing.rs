//! Mock collaborators shared by the controller tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use fest_core::model::{
    Contact, GiftId, GiftItem, Guest, GuestId, Note, NoteDraft, NoteId, PushSubscription,
    RsvpStatus, ScheduleDraft, ScheduleId, ScheduleItem, SeatingPlan, TableId, Upload, UploadStats,
};
use fest_core::{FestError, Result};

use crate::backend::Backend;
use crate::surface::{Node, NoticeKind, Notifier, RegionId, RenderSurface, SharedSurface};

/// Every commit a [`MockSurface`] received, per region, in order.
#[derive(Debug, Default)]
pub struct CommitLog {
    commits: Mutex<Vec<(RegionId, Vec<Node>)>>,
}

impl CommitLog {
    pub fn commits(&self, region: RegionId) -> Vec<Vec<Node>> {
        self.commits
            .lock()
            .unwrap()
            .iter()
            .filter(|(r, _)| *r == region)
            .map(|(_, nodes)| nodes.clone())
            .collect()
    }

    pub fn commit_count(&self) -> usize {
        self.commits.lock().unwrap().len()
    }
}

#[derive(Debug, Default)]
pub struct MockSurface {
    log: Arc<CommitLog>,
}

impl MockSurface {
    pub fn shared() -> (SharedSurface, Arc<CommitLog>) {
        let surface = MockSurface::default();
        let log = surface.log.clone();
        (Arc::new(Mutex::new(surface)), log)
    }
}

impl RenderSurface for MockSurface {
    fn commit(&mut self, region: RegionId, nodes: Vec<Node>) {
        self.log.commits.lock().unwrap().push((region, nodes));
    }
}

/// Records every toast.
#[derive(Debug, Default)]
pub struct MockNotifier {
    pub notices: Mutex<Vec<(String, NoticeKind)>>,
}

impl MockNotifier {
    pub fn kinds(&self) -> Vec<NoticeKind> {
        self.notices.lock().unwrap().iter().map(|(_, k)| *k).collect()
    }
}

impl Notifier for MockNotifier {
    fn notify(&self, message: &str, kind: NoticeKind) {
        self.notices.lock().unwrap().push((message.to_string(), kind));
    }
}

/// Canned-response backend with per-endpoint call counters.
#[derive(Default)]
pub struct MockBackend {
    pub guest_list: Mutex<Vec<Guest>>,
    pub upload_list: Mutex<Vec<Upload>>,
    pub stats: Mutex<UploadStats>,
    pub gift_list: Mutex<Vec<GiftItem>>,
    pub note_list: Mutex<Vec<Note>>,
    pub contact_list: Mutex<Vec<Contact>>,
    pub plan: Mutex<SeatingPlan>,
    pub schedule_items: Mutex<Vec<ScheduleItem>>,
    pub fetch_calls: AtomicUsize,
    pub mutation_calls: AtomicUsize,
    pub assignments: Mutex<Vec<(GuestId, Option<TableId>)>>,
    pub subscriptions: Mutex<Vec<PushSubscription>>,
    /// When set, every mutation fails with this error.
    pub mutation_error: Mutex<Option<FestError>>,
    /// When set, every fetch fails with this error.
    pub fetch_error: Mutex<Option<FestError>>,
    /// When set, only the stats fetch fails with this error.
    pub stats_error: Mutex<Option<FestError>>,
}

impl MockBackend {
    pub fn fetches(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn mutations(&self) -> usize {
        self.mutation_calls.load(Ordering::SeqCst)
    }

    fn fetch<T: Clone>(&self, data: &Mutex<T>) -> Result<T> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.fetch_error.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(data.lock().unwrap().clone())
    }

    fn mutate(&self) -> Result<Option<String>> {
        self.mutation_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.mutation_error.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(Some("ok".to_string()))
    }
}

#[async_trait]
impl Backend for MockBackend {
    async fn guests(&self) -> Result<Vec<Guest>> {
        self.fetch(&self.guest_list)
    }

    async fn update_rsvp(&self, _guest: GuestId, _rsvp: RsvpStatus) -> Result<Option<String>> {
        self.mutate()
    }

    async fn uploads(&self) -> Result<Vec<Upload>> {
        self.fetch(&self.upload_list)
    }

    async fn upload_stats(&self) -> Result<UploadStats> {
        if let Some(err) = self.stats_error.lock().unwrap().clone() {
            self.fetch_calls.fetch_add(1, Ordering::SeqCst);
            return Err(err);
        }
        self.fetch(&self.stats)
    }

    async fn gifts(&self) -> Result<Vec<GiftItem>> {
        self.fetch(&self.gift_list)
    }

    async fn reserve_gift(&self, _gift: GiftId, _reserved_by: &str) -> Result<Option<String>> {
        self.mutate()
    }

    async fn notes(&self) -> Result<Vec<Note>> {
        self.fetch(&self.note_list)
    }

    async fn create_note(&self, _draft: &NoteDraft) -> Result<Option<String>> {
        self.mutate()
    }

    async fn update_note(&self, _note: NoteId, _draft: &NoteDraft) -> Result<Option<String>> {
        self.mutate()
    }

    async fn delete_note(&self, _note: NoteId) -> Result<Option<String>> {
        self.mutate()
    }

    async fn contacts(&self) -> Result<Vec<Contact>> {
        self.fetch(&self.contact_list)
    }

    async fn seating_plan(&self) -> Result<SeatingPlan> {
        self.fetch(&self.plan)
    }

    async fn assign_guest(&self, guest: GuestId, table: TableId) -> Result<Option<String>> {
        self.assignments.lock().unwrap().push((guest, Some(table)));
        self.mutate()
    }

    async fn unassign_guest(&self, guest: GuestId) -> Result<Option<String>> {
        self.assignments.lock().unwrap().push((guest, None));
        self.mutate()
    }

    async fn schedule(&self) -> Result<Vec<ScheduleItem>> {
        self.fetch(&self.schedule_items)
    }

    async fn create_schedule_item(&self, _draft: &ScheduleDraft) -> Result<Option<String>> {
        self.mutate()
    }

    async fn delete_schedule_item(&self, _item: ScheduleId) -> Result<Option<String>> {
        self.mutate()
    }

    async fn vapid_public_key(&self) -> Result<Vec<u8>> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![4, 2])
    }

    async fn register_push_subscription(
        &self,
        subscription: &PushSubscription,
    ) -> Result<Option<String>> {
        self.subscriptions.lock().unwrap().push(subscription.clone());
        self.mutate()
    }

    async fn unregister_push_subscription(&self, _endpoint: &str) -> Result<Option<String>> {
        self.mutate()
    }
}

/// Guest fixture used across controller tests.
pub fn guest(id: i64, name: &str, table: Option<i64>) -> Guest {
    Guest {
        id: GuestId(id),
        name: name.to_string(),
        email: None,
        rsvp: RsvpStatus::Pending,
        party_size: 1,
        dietary_note: None,
        table_id: table.map(TableId),
    }
}
