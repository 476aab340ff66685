//! Browser bindings for the FlensSabers site
//!
//! Mounts the media wall and the mobile navigation drawer on page load.
//! All state lives in `flens-media`; this crate only adapts its ports to
//! the DOM, `fetch`, `sessionStorage` and `setInterval`.
//!
//! ## Module Structure
//!
//! - `console` - `log` backend writing to the browser console
//! - `config` - host configuration global
//! - `dom` - event listener helpers
//! - `fetch` - `ListingTransport` over `window.fetch`
//! - `platform` - session storage and wall clock
//! - `scheduler` - `IntervalScheduler` over `setInterval`
//! - `view` - `GalleryView` painting the grid and lightbox
//! - `gallery` - gallery mounting and event wiring
//! - `nav` - navigation drawer mounting

// =============================================================================
// Module declarations
// =============================================================================

mod config;
mod console;
mod dom;
mod fetch;
mod gallery;
mod nav;
mod platform;
mod scheduler;
mod view;

// =============================================================================
// Public re-exports
// =============================================================================

pub use console::ConsoleLogger;
pub use fetch::FetchTransport;
pub use platform::{BrowserClock, BrowserSessionStore};

use log::error;
use wasm_bindgen::prelude::*;

// =============================================================================
// Entry point
// =============================================================================

/// Runs once when the module is instantiated
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    console::init();

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    if let Err(e) = gallery::mount(&window, &document) {
        error!("[gallery] mount failed: {:?}", e);
    }
    if let Err(e) = nav::mount(&window, &document) {
        error!("[nav] mount failed: {:?}", e);
    }
}
