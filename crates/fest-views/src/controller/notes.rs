//! The notes view.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use fest_client::cancellable;
use fest_core::Result;
use fest_core::collection::{DebounceTicket, Debouncer};
use fest_core::format;
use fest_core::model::{Note, NoteDraft, NoteId};

use super::notify_failure;
use crate::backend::Backend;
use crate::bindings::{RegionResolver, require_region};
use crate::pipeline::{EmptyText, ViewPipeline};
use crate::surface::{Node, NoticeKind, Notifier, SharedSurface};

pub struct NotesController {
    backend: Arc<dyn Backend>,
    notifier: Arc<dyn Notifier>,
    cancel: CancellationToken,
    pipeline: ViewPipeline<Note>,
}

impl NotesController {
    pub const REGION: &'static str = "notes-list";

    pub fn new(
        backend: Arc<dyn Backend>,
        notifier: Arc<dyn Notifier>,
        surface: SharedSurface,
        resolver: &dyn RegionResolver,
    ) -> Result<Self> {
        let region = require_region(resolver, Self::REGION)?;
        Ok(Self {
            backend,
            notifier,
            cancel: CancellationToken::new(),
            pipeline: ViewPipeline::new(
                surface,
                region,
                EmptyText {
                    no_data: "Noch keine Notizen",
                    no_matches: "Keine Notizen passen zur Suche",
                },
                note_node,
            ),
        })
    }

    pub async fn refresh(&mut self) -> Result<()> {
        let ticket = self.pipeline.begin_fetch();
        let outcome = cancellable(&self.cancel, self.backend.notes()).await;
        self.pipeline.apply_fetch(ticket, outcome)
    }

    pub fn search_changed(&mut self, value: impl Into<String>) -> (Debouncer, DebounceTicket) {
        self.pipeline.search_changed(value)
    }

    pub fn commit_search(&mut self, ticket: DebounceTicket) {
        self.pipeline.commit_search(ticket);
    }

    pub async fn set_search(&mut self, value: impl Into<String>) {
        self.pipeline.set_search(value).await;
    }

    /// Creates a note. Invalid drafts are rejected before any request is
    /// built; the validation error is returned for inline display.
    pub async fn create(&mut self, draft: NoteDraft) -> Result<()> {
        draft.validate()?;
        match cancellable(&self.cancel, self.backend.create_note(&draft)).await {
            Ok(message) => {
                self.notifier.notify(
                    message.as_deref().unwrap_or("Notiz gespeichert"),
                    NoticeKind::Success,
                );
                self.refresh().await
            }
            Err(err) => {
                notify_failure(self.notifier.as_ref(), &err);
                Err(err)
            }
        }
    }

    /// Replaces a note's title and body.
    pub async fn update(&mut self, note: NoteId, draft: NoteDraft) -> Result<()> {
        draft.validate()?;
        match cancellable(&self.cancel, self.backend.update_note(note, &draft)).await {
            Ok(message) => {
                self.notifier.notify(
                    message.as_deref().unwrap_or("Notiz aktualisiert"),
                    NoticeKind::Success,
                );
                self.refresh().await
            }
            Err(err) => {
                notify_failure(self.notifier.as_ref(), &err);
                Err(err)
            }
        }
    }

    pub async fn delete(&mut self, note: NoteId) -> Result<()> {
        match cancellable(&self.cancel, self.backend.delete_note(note)).await {
            Ok(message) => {
                self.notifier.notify(
                    message.as_deref().unwrap_or("Notiz gelöscht"),
                    NoticeKind::Success,
                );
                self.refresh().await
            }
            Err(err) => {
                notify_failure(self.notifier.as_ref(), &err);
                Err(err)
            }
        }
    }

    pub fn pipeline(&self) -> &ViewPipeline<Note> {
        &self.pipeline
    }

    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}

fn note_node(note: &Note) -> Node {
    Node::block("note-card")
        .with_child(Node::text("note-title", note.title.as_str()))
        .with_child(Node::text("note-body", note.body.as_str()))
        .with_child(Node::text("note-date", format::date_time(&note.updated_at)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::RegionMap;
    use crate::testing::{MockBackend, MockNotifier, MockSurface};

    fn controller() -> (NotesController, Arc<MockBackend>, Arc<MockNotifier>) {
        let backend = Arc::new(MockBackend::default());
        let notifier = Arc::new(MockNotifier::default());
        let (surface, _) = MockSurface::shared();
        let mut regions = RegionMap::new();
        regions.register(NotesController::REGION);
        let controller =
            NotesController::new(backend.clone(), notifier.clone(), surface, &regions).unwrap();
        (controller, backend, notifier)
    }

    #[tokio::test]
    async fn test_invalid_draft_blocks_the_network_call() {
        let (mut controller, backend, notifier) = controller();
        let err = controller.create(NoteDraft::new("", "body")).await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(backend.mutations(), 0);
        assert!(notifier.kinds().is_empty());
    }

    #[tokio::test]
    async fn test_create_refetches_after_write() {
        let (mut controller, backend, notifier) = controller();
        controller
            .create(NoteDraft::new("Blumen", "beim Floristen anrufen"))
            .await
            .unwrap();
        assert_eq!(backend.mutations(), 1);
        assert_eq!(backend.fetches(), 1);
        assert_eq!(notifier.kinds(), vec![NoticeKind::Success]);
    }

    #[tokio::test]
    async fn test_delete_refetches_after_write() {
        let (mut controller, backend, _) = controller();
        controller.delete(NoteId(4)).await.unwrap();
        assert_eq!(backend.mutations(), 1);
        assert_eq!(backend.fetches(), 1);
    }
}
