//! Periodic reshuffle scheduling
//!
//! The timer is suspended while the page is hidden and recreated when it
//! becomes visible again.

use log::debug;

/// Handle returned by the platform timer
pub type TimerId = i32;

/// Repeating timer facility.
///
/// On WASM this is `window.setInterval` / `clearInterval`. What a tick does
/// is decided by whoever constructed the scheduler.
pub trait IntervalScheduler {
    /// Start a repeating timer; `None` if the platform refused
    fn start_interval(&mut self, period_ms: u32) -> Option<TimerId>;

    /// Stop a timer
    fn cancel(&mut self, id: TimerId);
}

/// Cancellable repeating reshuffle
#[derive(Clone, Debug, Default)]
pub struct ReshuffleTask {
    period_ms: Option<u32>,
    timer: Option<TimerId>,
}

impl ReshuffleTask {
    /// Task with the given period; `None` disables it
    pub fn new(period_ms: Option<u32>) -> Self {
        Self {
            period_ms,
            timer: None,
        }
    }

    /// Check if a timer is live
    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Start the timer unless it is disabled or already running
    pub fn start<S: IntervalScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        let Some(period) = self.period_ms else {
            return;
        };
        if self.timer.is_some() {
            return;
        }
        self.timer = scheduler.start_interval(period);
        debug!("[gallery] reshuffle every {} ms ({:?})", period, self.timer);
    }

    /// Cancel the timer if running
    pub fn stop<S: IntervalScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if let Some(id) = self.timer.take() {
            scheduler.cancel(id);
            debug!("[gallery] reshuffle timer {} cancelled", id);
        }
    }

    /// Suspend on hide, recreate on show
    pub fn on_visibility_change<S: IntervalScheduler + ?Sized>(
        &mut self,
        scheduler: &mut S,
        hidden: bool,
    ) {
        if hidden {
            self.stop(scheduler);
        } else {
            self.start(scheduler);
        }
    }
}
