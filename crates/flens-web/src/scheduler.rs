//! `setInterval`-backed reshuffle timer

use std::collections::HashMap;
use std::rc::Rc;

use flens_media::{IntervalScheduler, TimerId};
use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Runs `on_tick` on every interval it starts
pub struct IntervalTimer {
    window: Window,
    on_tick: Rc<dyn Fn()>,
    active: HashMap<TimerId, Closure<dyn FnMut()>>,
}

impl IntervalTimer {
    pub fn new(window: Window, on_tick: Rc<dyn Fn()>) -> Self {
        Self {
            window,
            on_tick,
            active: HashMap::new(),
        }
    }
}

impl IntervalScheduler for IntervalTimer {
    fn start_interval(&mut self, period_ms: u32) -> Option<TimerId> {
        let on_tick = Rc::clone(&self.on_tick);
        let closure = Closure::wrap(Box::new(move || on_tick()) as Box<dyn FnMut()>);
        let timeout = i32::try_from(period_ms).unwrap_or(i32::MAX);

        match self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                timeout,
            ) {
            Ok(id) => {
                self.active.insert(id, closure);
                Some(id)
            }
            Err(e) => {
                warn!("[gallery] setInterval failed: {:?}", e);
                None
            }
        }
    }

    fn cancel(&mut self, id: TimerId) {
        self.window.clear_interval_with_handle(id);
        self.active.remove(&id);
    }
}
