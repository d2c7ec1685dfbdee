//! The photo/video gallery view.

use std::sync::{Arc, PoisonError};

use tokio_util::sync::CancellationToken;

use fest_client::cancellable;
use fest_core::collection::{DebounceTicket, Debouncer, FilterField};
use fest_core::format;
use fest_core::model::{Upload, UploadStats};
use fest_core::{FestError, Result};

use crate::backend::Backend;
use crate::bindings::{RegionResolver, require_region};
use crate::pipeline::{EmptyText, ViewPipeline};
use crate::surface::{Node, RegionId, SharedSurface};

pub struct GalleryController {
    backend: Arc<dyn Backend>,
    cancel: CancellationToken,
    pipeline: ViewPipeline<Upload>,
    stats_region: RegionId,
    surface: SharedSurface,
}

impl GalleryController {
    pub const GRID_REGION: &'static str = "upload-grid";
    pub const STATS_REGION: &'static str = "upload-stats";

    pub fn new(
        backend: Arc<dyn Backend>,
        surface: SharedSurface,
        resolver: &dyn RegionResolver,
    ) -> Result<Self> {
        let grid_region = require_region(resolver, Self::GRID_REGION)?;
        let stats_region = require_region(resolver, Self::STATS_REGION)?;
        Ok(Self {
            backend,
            cancel: CancellationToken::new(),
            pipeline: ViewPipeline::new(
                surface.clone(),
                grid_region,
                EmptyText {
                    no_data: "Noch keine Fotos oder Videos hochgeladen",
                    no_matches: "Keine Uploads passen zum aktuellen Filter",
                },
                upload_node,
            ),
            stats_region,
            surface,
        })
    }

    /// Fetches the listing and the statistics strip. The strip is
    /// best-effort: the grid stays usable when only the stats call fails.
    pub async fn refresh(&mut self) -> Result<()> {
        let ticket = self.pipeline.begin_fetch();
        let outcome = cancellable(&self.cancel, self.backend.uploads()).await;
        self.pipeline.apply_fetch(ticket, outcome)?;

        match cancellable(&self.cancel, self.backend.upload_stats()).await {
            Ok(stats) => self.render_stats(&stats),
            Err(FestError::Cancelled) => {}
            Err(err) => tracing::warn!(error = %err, "upload stats unavailable"),
        }
        Ok(())
    }

    /// Media-kind filter (`image` / `video`); applies immediately.
    pub fn set_kind_filter(&mut self, value: impl Into<String>) {
        self.pipeline.set_filter(FilterField::Category, value);
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

    pub fn pipeline(&self) -> &ViewPipeline<Upload> {
        &self.pipeline
    }

    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    fn render_stats(&self, stats: &UploadStats) {
        let nodes = vec![
            Node::block("upload-stats")
                .with_child(Node::text("stat-total", format!("{} Dateien", stats.total)))
                .with_child(Node::text("stat-images", format!("{} Fotos", stats.images)))
                .with_child(Node::text("stat-videos", format!("{} Videos", stats.videos)))
                .with_child(Node::text("stat-size", format::size_bytes(stats.total_bytes))),
        ];
        let mut surface = self.surface.lock().unwrap_or_else(PoisonError::into_inner);
        surface.commit(self.stats_region, nodes);
    }
}

fn upload_node(upload: &Upload) -> Node {
    Node::block("upload-card")
        .with_child(Node::text("upload-file", upload.file_name.as_str()))
        .with_child(Node::text("upload-kind", upload.kind().as_str()))
        .with_child(Node::text("upload-by", upload.uploaded_by.as_str()))
        .with_child(Node::text("upload-size", format::size_bytes(upload.size_bytes)))
        .with_child(Node::text("upload-date", format::date(&upload.uploaded_at)))
}
