//! Browser tests for the platform adapters
//!
//! Run with `wasm-pack test --headless --firefox crates/flens-web`.

use flens_media::{Clock, SessionStore};
use flens_web::{BrowserClock, BrowserSessionStore};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_session_store_round_trip() {
    let window = web_sys::window().unwrap();
    let store = BrowserSessionStore::new(&window);

    store.set_item("flens_test_key", "{\"t\":1,\"items\":[]}").unwrap();
    assert_eq!(
        store.get_item("flens_test_key").as_deref(),
        Some("{\"t\":1,\"items\":[]}")
    );
    assert_eq!(store.get_item("flens_missing_key"), None);
}

#[wasm_bindgen_test]
fn test_clock_reports_epoch_millis() {
    // 2020-01-01T00:00:00Z
    assert!(BrowserClock.now_ms() > 1_577_836_800_000);
}
