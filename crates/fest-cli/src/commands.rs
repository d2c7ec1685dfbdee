//! One function per subcommand, wiring controllers to the terminal surface.

use std::sync::{Arc, Mutex, PoisonError};

use anyhow::Result;

use fest_core::model::{GuestId, NoteDraft, NoteId, RsvpStatus, TableId};
use fest_views::bindings::RegionMap;
use fest_views::{
    Backend, ContactsController, GalleryController, GuestsController, NotesController,
    PushController, RegistryController, ScheduleController, SeatingController, SharedSurface,
};
use fest_core::drag::NoopDragSurface;

use crate::terminal::{TerminalNotifier, TerminalSurface};

/// Everything a command needs: the backend, the terminal surfaces, and the
/// region bindings the controllers resolve against.
pub struct AppContext {
    backend: Arc<dyn Backend>,
    notifier: Arc<TerminalNotifier>,
    terminal: Arc<Mutex<TerminalSurface>>,
    regions: RegionMap,
}

impl AppContext {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        let mut regions = RegionMap::new();
        let mut terminal = TerminalSurface::new();
        for (name, label) in [
            (GuestsController::REGION, "Gäste"),
            (GalleryController::GRID_REGION, "Galerie"),
            (GalleryController::STATS_REGION, "Statistik"),
            (RegistryController::REGION, "Geschenke"),
            (NotesController::REGION, "Notizen"),
            (ContactsController::REGION, "Kontakte"),
            (SeatingController::REGION, "Sitzplan"),
            (ScheduleController::REGION, "Zeitplan"),
        ] {
            let region = regions.register(name);
            terminal.label(region, label);
        }
        Self {
            backend,
            notifier: Arc::new(TerminalNotifier),
            terminal: Arc::new(Mutex::new(terminal)),
            regions,
        }
    }

    fn surface(&self) -> SharedSurface {
        self.terminal.clone()
    }

    /// Prints the final state of every rendered region.
    pub fn flush(&self) {
        self.terminal
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .flush();
    }
}

pub async fn guests(
    ctx: &AppContext,
    search: Option<String>,
    status: Option<String>,
) -> Result<()> {
    let mut controller = GuestsController::new(
        ctx.backend.clone(),
        ctx.notifier.clone(),
        ctx.surface(),
        &ctx.regions,
    )?;
    if let Some(status) = status {
        controller.set_status_filter(status);
    }
    if let Some(search) = search {
        controller.set_search(search).await;
    }
    controller.refresh().await?;
    Ok(())
}

pub async fn rsvp(ctx: &AppContext, guest: i64, status: String) -> Result<()> {
    let status: RsvpStatus = status.parse()?;
    let mut controller = GuestsController::new(
        ctx.backend.clone(),
        ctx.notifier.clone(),
        ctx.surface(),
        &ctx.regions,
    )?;
    controller.set_rsvp(GuestId(guest), status).await?;
    Ok(())
}

pub async fn gallery(ctx: &AppContext, kind: Option<String>, search: Option<String>) -> Result<()> {
    let mut controller =
        GalleryController::new(ctx.backend.clone(), ctx.surface(), &ctx.regions)?;
    if let Some(kind) = kind {
        controller.set_kind_filter(kind);
    }
    if let Some(search) = search {
        controller.set_search(search).await;
    }
    controller.refresh().await?;
    Ok(())
}

pub async fn gifts(
    ctx: &AppContext,
    category: Option<String>,
    status: Option<String>,
    search: Option<String>,
) -> Result<()> {
    let mut controller = RegistryController::new(
        ctx.backend.clone(),
        ctx.notifier.clone(),
        ctx.surface(),
        &ctx.regions,
    )?;
    if let Some(category) = category {
        controller.set_category_filter(category);
    }
    if let Some(status) = status {
        controller.set_status_filter(status);
    }
    if let Some(search) = search {
        controller.set_search(search).await;
    }
    controller.refresh().await?;
    Ok(())
}

pub async fn reserve_gift(ctx: &AppContext, gift: i64, name: String) -> Result<()> {
    let mut controller = RegistryController::new(
        ctx.backend.clone(),
        ctx.notifier.clone(),
        ctx.surface(),
        &ctx.regions,
    )?;
    controller
        .reserve(fest_core::model::GiftId(gift), &name)
        .await?;
    Ok(())
}

pub async fn notes(ctx: &AppContext, search: Option<String>) -> Result<()> {
    let mut controller = NotesController::new(
        ctx.backend.clone(),
        ctx.notifier.clone(),
        ctx.surface(),
        &ctx.regions,
    )?;
    if let Some(search) = search {
        controller.set_search(search).await;
    }
    controller.refresh().await?;
    Ok(())
}

pub async fn add_note(ctx: &AppContext, title: String, body: Option<String>) -> Result<()> {
    let mut controller = NotesController::new(
        ctx.backend.clone(),
        ctx.notifier.clone(),
        ctx.surface(),
        &ctx.regions,
    )?;
    controller
        .create(NoteDraft::new(title, body.unwrap_or_default()))
        .await?;
    Ok(())
}

pub async fn edit_note(
    ctx: &AppContext,
    note: i64,
    title: String,
    body: Option<String>,
) -> Result<()> {
    let mut controller = NotesController::new(
        ctx.backend.clone(),
        ctx.notifier.clone(),
        ctx.surface(),
        &ctx.regions,
    )?;
    controller
        .update(NoteId(note), NoteDraft::new(title, body.unwrap_or_default()))
        .await?;
    Ok(())
}

pub async fn delete_note(ctx: &AppContext, note: i64) -> Result<()> {
    let mut controller = NotesController::new(
        ctx.backend.clone(),
        ctx.notifier.clone(),
        ctx.surface(),
        &ctx.regions,
    )?;
    controller.delete(NoteId(note)).await?;
    Ok(())
}

pub async fn contacts(ctx: &AppContext, search: Option<String>) -> Result<()> {
    let mut controller =
        ContactsController::new(ctx.backend.clone(), ctx.surface(), &ctx.regions)?;
    if let Some(search) = search {
        controller.set_search(search).await;
    }
    controller.refresh().await?;
    Ok(())
}

pub async fn seating(ctx: &AppContext) -> Result<()> {
    let mut controller = seating_controller(ctx)?;
    controller.refresh().await?;
    Ok(())
}

pub async fn assign(ctx: &AppContext, guest: i64, table: i64) -> Result<()> {
    let mut controller = seating_controller(ctx)?;
    controller.assign(GuestId(guest), TableId(table)).await?;
    Ok(())
}

pub async fn unassign(ctx: &AppContext, guest: i64) -> Result<()> {
    let mut controller = seating_controller(ctx)?;
    controller.unassign(GuestId(guest)).await?;
    Ok(())
}

fn seating_controller(ctx: &AppContext) -> Result<SeatingController> {
    Ok(SeatingController::new(
        ctx.backend.clone(),
        ctx.notifier.clone(),
        ctx.surface(),
        Box::new(NoopDragSurface),
        &ctx.regions,
    )?)
}

pub async fn schedule(ctx: &AppContext, search: Option<String>) -> Result<()> {
    let mut controller = ScheduleController::new(
        ctx.backend.clone(),
        ctx.notifier.clone(),
        ctx.surface(),
        &ctx.regions,
    )?;
    if let Some(search) = search {
        controller.set_search(search).await;
    }
    controller.refresh().await?;
    Ok(())
}

pub async fn push_key(ctx: &AppContext) -> Result<()> {
    let controller = PushController::new(ctx.backend.clone(), ctx.notifier.clone());
    let key = controller.server_key().await?;
    println!("VAPID-Schlüssel: {} Bytes", key.len());
    Ok(())
}

pub async fn push_unregister(ctx: &AppContext, endpoint: String) -> Result<()> {
    let controller = PushController::new(ctx.backend.clone(), ctx.notifier.clone());
    controller.unregister(&endpoint).await?;
    Ok(())
}
