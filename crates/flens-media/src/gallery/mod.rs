//! Gallery controller
//!
//! One controller per page. It owns the canonical entry list, the display
//! order, the lightbox and the reshuffle task, and reaches the page only
//! through [`GalleryView`] and [`IntervalScheduler`].

mod navigation;

use log::{info, warn};
use rand::Rng;

use crate::config::GalleryConfig;
use crate::error::GalleryResult;
use crate::grid::{GridMode, GridView};
use crate::lightbox::{Lightbox, StageCommand};
use crate::input::SwipeTracker;
use crate::media::MediaEntry;
use crate::messages::Messages;
use crate::order::DisplayOrder;
use crate::schedule::{IntervalScheduler, ReshuffleTask};

/// Load phase
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GalleryPhase {
    /// Waiting for the first fetch
    #[default]
    Loading,
    /// Entries available (possibly none)
    Ready,
    /// Fetch failed; terminal until reload
    Failed,
}

/// Rendering port
pub trait GalleryView {
    /// Check if the grid container currently asks for the unlimited layout
    fn is_full_grid(&self) -> bool;

    /// Replace the grid contents
    fn render_grid(&mut self, grid: &GridView);

    /// Update the lightbox stage and overlay
    fn render_stage(&mut self, command: &StageCommand);
}

/// Page-level gallery state
pub struct GalleryController<V, S, R> {
    config: GalleryConfig,
    messages: Messages,
    phase: GalleryPhase,
    entries: Vec<MediaEntry>,
    order: DisplayOrder,
    lightbox: Lightbox,
    swipe: SwipeTracker,
    reshuffle: ReshuffleTask,
    view: V,
    scheduler: S,
    rng: R,
}

impl<V, S, R> GalleryController<V, S, R>
where
    V: GalleryView,
    S: IntervalScheduler,
    R: Rng,
{
    /// Create a controller in the `Loading` phase.
    ///
    /// `lightbox_available` is false when the page lacks the overlay markup.
    pub fn new(
        config: GalleryConfig,
        lightbox_available: bool,
        view: V,
        scheduler: S,
        rng: R,
    ) -> Self {
        let messages = Messages::new(config.locale);
        let reshuffle = ReshuffleTask::new(config.reshuffle_period_ms());
        Self {
            config,
            messages,
            phase: GalleryPhase::Loading,
            entries: Vec::new(),
            order: DisplayOrder::default(),
            lightbox: Lightbox::new(lightbox_available),
            swipe: SwipeTracker::new(),
            reshuffle,
            view,
            scheduler,
            rng,
        }
    }

    /// Show the loading placeholder
    pub fn begin(&mut self) {
        let notice = self.messages.loading();
        self.view.render_grid(&GridView::Loading(notice));
    }

    /// Apply the fetch outcome.
    ///
    /// Only the first outcome counts; later calls are ignored.
    pub fn finish_load(&mut self, result: GalleryResult<Vec<MediaEntry>>) -> GalleryPhase {
        if self.phase != GalleryPhase::Loading {
            return self.phase;
        }

        match result {
            Ok(entries) => {
                info!("[gallery] loaded {} entries", entries.len());
                self.entries = entries;
                self.order = DisplayOrder::shuffled(self.entries.len(), &mut self.rng);
                self.phase = GalleryPhase::Ready;
                self.render_grid();
                self.reshuffle.start(&mut self.scheduler);
            }
            Err(e) => {
                warn!("[gallery] could not load media: {}", e);
                self.phase = GalleryPhase::Failed;
                let notice = self.messages.load_failed(&self.config.path);
                self.view.render_grid(&GridView::Failed(notice));
            }
        }
        self.phase
    }

    /// New random display order over the same entries
    pub fn reshuffle(&mut self) {
        if self.phase != GalleryPhase::Ready {
            return;
        }
        self.order = DisplayOrder::shuffled(self.entries.len(), &mut self.rng);
        self.render_grid();
    }

    /// Suspend or resume the reshuffle timer
    pub fn visibility_changed(&mut self, hidden: bool) {
        if self.phase != GalleryPhase::Ready {
            return;
        }
        self.reshuffle.on_visibility_change(&mut self.scheduler, hidden);
    }

    /// Layout is re-read from the view on every render
    fn render_grid(&mut self) {
        let mode = GridMode::from_full_flag(self.view.is_full_grid(), self.config.limit);
        let grid = GridView::build(
            &self.entries,
            &self.order,
            mode,
            &self.messages,
            &self.config.path,
        );
        self.view.render_grid(&grid);
    }

    pub fn phase(&self) -> GalleryPhase {
        self.phase
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    /// Canonical entry list
    pub fn entries(&self) -> &[MediaEntry] {
        &self.entries
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    /// Check if the reshuffle timer is live
    pub fn is_reshuffling(&self) -> bool {
        self.reshuffle.is_running()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}
