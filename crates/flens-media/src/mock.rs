//! In-memory port implementations
//!
//! Deterministic stand-ins for the browser so the gallery can be driven
//! from native tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::cache::{SessionStore, StoreError};
use crate::clock::Clock;
use crate::error::{GalleryError, GalleryResult};
use crate::gallery::GalleryView;
use crate::grid::GridView;
use crate::lightbox::StageCommand;
use crate::listing::{HttpReply, ListingTransport};
use crate::schedule::{IntervalScheduler, TimerId};

/// Session store backed by a `HashMap`
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
    reject: Cell<bool>,
    writes: Cell<usize>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value without counting it as a write
    pub fn insert(&self, key: &str, raw: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), raw.to_string());
    }

    /// Make every following `set_item` fail
    pub fn reject_writes(&self, reject: bool) {
        self.reject.set(reject);
    }

    /// Number of successful `set_item` calls
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl SessionStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.reject.get() {
            return Err(StoreError::Rejected("quota exceeded".to_string()));
        }
        self.insert(key, value);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

/// Manually advanced clock
#[derive(Debug, Default)]
pub struct FixedClock {
    now: Cell<u64>,
}

impl FixedClock {
    /// Clock frozen at `now_ms`
    pub fn new(now_ms: u64) -> Self {
        Self {
            now: Cell::new(now_ms),
        }
    }

    /// Move time forward
    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get().saturating_add(ms));
    }

    /// Jump to an absolute time
    pub fn set(&self, now_ms: u64) {
        self.now.set(now_ms);
    }
}

impl Clock for FixedClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

/// Transport that replays one canned outcome
#[derive(Debug)]
pub struct ScriptedTransport {
    outcome: GalleryResult<HttpReply>,
    calls: Cell<usize>,
    last: RefCell<Option<(String, String)>>,
}

impl ScriptedTransport {
    fn with(outcome: GalleryResult<HttpReply>) -> Self {
        Self {
            outcome,
            calls: Cell::new(0),
            last: RefCell::new(None),
        }
    }

    /// Answer 200 with `body`
    pub fn ok(body: &str) -> Self {
        Self::with(Ok(HttpReply::new(200, body)))
    }

    /// Answer `status` with an empty body
    pub fn status(status: u16) -> Self {
        Self::with(Ok(HttpReply::new(status, "")))
    }

    /// Fail before any response arrives
    pub fn failing(reason: &str) -> Self {
        Self::with(Err(GalleryError::Transport(reason.to_string())))
    }

    /// Number of requests issued
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// `(url, accept)` of the most recent request
    pub fn last_request(&self) -> Option<(String, String)> {
        self.last.borrow().clone()
    }
}

impl ListingTransport for ScriptedTransport {
    async fn get(&self, url: &str, accept: &str) -> GalleryResult<HttpReply> {
        self.calls.set(self.calls.get() + 1);
        *self.last.borrow_mut() = Some((url.to_string(), accept.to_string()));
        self.outcome.clone()
    }
}

/// View that records every render call
#[derive(Debug, Default)]
pub struct RecordingView {
    full: Cell<bool>,
    pub grids: Vec<GridView>,
    pub stages: Vec<StageCommand>,
}

impl RecordingView {
    /// Recorder for a preview grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorder for a full gallery grid
    pub fn full() -> Self {
        let view = Self::default();
        view.set_full(true);
        view
    }

    /// Flip the container's layout flag
    pub fn set_full(&self, full: bool) {
        self.full.set(full);
    }

    /// Most recent grid render
    pub fn last_grid(&self) -> Option<&GridView> {
        self.grids.last()
    }

    /// Most recent stage command
    pub fn last_stage(&self) -> Option<&StageCommand> {
        self.stages.last()
    }
}

impl GalleryView for RecordingView {
    fn is_full_grid(&self) -> bool {
        self.full.get()
    }

    fn render_grid(&mut self, grid: &GridView) {
        self.grids.push(grid.clone());
    }

    fn render_stage(&mut self, command: &StageCommand) {
        self.stages.push(command.clone());
    }
}

/// Scheduler that only records timer bookkeeping
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: TimerId,
    /// `(id, period_ms)` of every started timer
    pub started: Vec<(TimerId, u32)>,
    /// Ids passed to `cancel`
    pub cancelled: Vec<TimerId>,
}

impl ManualScheduler {
    /// Create a scheduler with no timers
    pub fn new() -> Self {
        Self::default()
    }

    /// Timers started and not yet cancelled
    pub fn active(&self) -> usize {
        self.started
            .iter()
            .filter(|(id, _)| !self.cancelled.contains(id))
            .count()
    }
}

impl IntervalScheduler for ManualScheduler {
    fn start_interval(&mut self, period_ms: u32) -> Option<TimerId> {
        self.next_id += 1;
        self.started.push((self.next_id, period_ms));
        Some(self.next_id)
    }

    fn cancel(&mut self, id: TimerId) {
        self.cancelled.push(id);
    }
}
