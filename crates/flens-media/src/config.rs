//! Gallery configuration
//!
//! Decoded from the host page's `window.FLENS_MEDIA_CONFIG` object. Every
//! field is optional; missing fields keep their defaults. Keys are merged
//! one at a time, so a bad value only drops that key.

use log::warn;
use serde_json::{Map, Value};

use crate::listing::ListingLocation;
use crate::messages::Locale;

/// Default repository owner
pub const DEFAULT_OWNER: &str = "VergissNIXAPP";
/// Default repository name
pub const DEFAULT_REPO: &str = "FlensSabers";
/// Default folder
pub const DEFAULT_PATH: &str = "media";
/// Default preview tile cap
pub const DEFAULT_LIMIT: usize = 12;

/// Gallery options
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryConfig {
    /// Repository owner
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Folder to list
    pub path: String,
    /// Tile cap for preview grids (ignored by full galleries)
    pub limit: usize,
    /// Reshuffle period in milliseconds; 0 or negative disables it
    pub reshuffle_ms: i64,
    /// Message language
    pub locale: Locale,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            owner: DEFAULT_OWNER.to_string(),
            repo: DEFAULT_REPO.to_string(),
            path: DEFAULT_PATH.to_string(),
            limit: DEFAULT_LIMIT,
            reshuffle_ms: 0,
            locale: Locale::default(),
        }
    }
}

impl GalleryConfig {
    /// Parse a host config object, merging it over the defaults.
    ///
    /// Only malformed JSON is an error. Keys with unusable values are
    /// logged and skipped.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(&value))
    }

    /// Merge a decoded config value over the defaults
    pub fn from_value(value: &Value) -> Self {
        let mut config = Self::default();
        match value {
            Value::Object(map) => config.merge(map),
            Value::Null => {}
            other => warn!("[gallery] config is not an object ({}), using defaults", other),
        }
        config
    }

    fn merge(&mut self, map: &Map<String, Value>) {
        for (key, value) in map {
            if value.is_null() {
                continue;
            }
            let applied = match key.as_str() {
                "owner" => set_string(&mut self.owner, value),
                "repo" => set_string(&mut self.repo, value),
                "path" => set_string(&mut self.path, value),
                "limit" => match as_integer(value) {
                    Some(n) => {
                        self.limit = usize::try_from(n.max(0)).unwrap_or(usize::MAX);
                        true
                    }
                    None => false,
                },
                "reshuffleMs" => match as_integer(value) {
                    Some(n) => {
                        self.reshuffle_ms = n;
                        true
                    }
                    None => false,
                },
                "locale" => match as_locale(value) {
                    Some(locale) => {
                        self.locale = locale;
                        true
                    }
                    None => false,
                },
                _ => true,
            };
            if !applied {
                warn!("[gallery] ignoring config {}={}", key, value);
            }
        }
    }

    /// Folder to list
    pub fn location(&self) -> ListingLocation {
        ListingLocation::new(&self.owner, &self.repo, &self.path)
    }

    /// Reshuffle period, if automatic reshuffling is on
    pub fn reshuffle_period_ms(&self) -> Option<u32> {
        if self.reshuffle_ms > 0 {
            Some(u32::try_from(self.reshuffle_ms).unwrap_or(u32::MAX))
        } else {
            None
        }
    }
}

fn set_string(slot: &mut String, value: &Value) -> bool {
    match value.as_str() {
        Some(s) => {
            *slot = s.to_string();
            true
        }
        None => false,
    }
}

/// Number or numeric string, truncated toward zero
fn as_integer(value: &Value) -> Option<i64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    // `as` saturates at the i64 bounds
    n.is_finite().then(|| n.trunc() as i64)
}

fn as_locale(value: &Value) -> Option<Locale> {
    let tag = value.as_str()?.trim().to_ascii_lowercase();
    serde_json::from_value(Value::String(tag)).ok()
}
