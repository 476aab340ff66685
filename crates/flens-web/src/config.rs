//! Host page configuration

use flens_media::GalleryConfig;
use log::{debug, warn};
use wasm_bindgen::JsValue;
use web_sys::Window;

/// Global the host page may set before loading the module
pub const CONFIG_GLOBAL: &str = "FLENS_MEDIA_CONFIG";

/// Read `window.FLENS_MEDIA_CONFIG`, falling back to the defaults
pub fn read(window: &Window) -> GalleryConfig {
    let value = match js_sys::Reflect::get(window, &JsValue::from_str(CONFIG_GLOBAL)) {
        Ok(value) if !value.is_undefined() && !value.is_null() => value,
        _ => {
            debug!("[gallery] no {} set, using defaults", CONFIG_GLOBAL);
            return GalleryConfig::default();
        }
    };

    let json = match js_sys::JSON::stringify(&value).ok().and_then(|s| s.as_string()) {
        Some(json) => json,
        None => {
            warn!("[gallery] {} is not serializable, using defaults", CONFIG_GLOBAL);
            return GalleryConfig::default();
        }
    };

    match GalleryConfig::from_json(&json) {
        Ok(config) => config,
        Err(e) => {
            warn!("[gallery] invalid {} ({}), using defaults", CONFIG_GLOBAL, e);
            GalleryConfig::default()
        }
    }
}
