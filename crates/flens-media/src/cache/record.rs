//! Cache record serialization and freshness

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::SessionStore;
use crate::media::MediaEntry;

/// How long a cached listing is trusted (10 minutes)
pub const FRESHNESS_WINDOW_MS: u64 = 10 * 60 * 1000;

/// Listing snapshot stored in the session cache as `{t, items}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CacheRecord {
    /// Write time in epoch milliseconds
    #[serde(rename = "t")]
    pub timestamp: u64,
    /// Entries in fetch order
    pub items: Vec<MediaEntry>,
}

impl CacheRecord {
    /// Create a new record
    pub fn new(timestamp: u64, items: Vec<MediaEntry>) -> Self {
        Self { timestamp, items }
    }

    /// Age relative to `now_ms`; a timestamp in the future counts as age 0
    #[inline]
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.timestamp)
    }

    /// Check if the record is still inside the freshness window
    #[inline]
    pub fn is_fresh(&self, now_ms: u64) -> bool {
        self.age_ms(now_ms) < FRESHNESS_WINDOW_MS
    }
}

/// Freshness-checked view over a [`SessionStore`]
///
/// Absent, malformed and stale records are all the same thing: a miss.
pub struct ListingCache<'a, S: SessionStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: SessionStore + ?Sized> ListingCache<'a, S> {
    /// Wrap a store
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Fresh items under `key`, if any
    pub fn load(&self, key: &str, now_ms: u64) -> Option<Vec<MediaEntry>> {
        let raw = self.store.get_item(key)?;

        let record: CacheRecord = match serde_json::from_str(&raw) {
            Ok(record) => record,
            Err(e) => {
                debug!("[cache] ignoring malformed record under {}: {}", key, e);
                return None;
            }
        };

        if !record.is_fresh(now_ms) {
            debug!(
                "[cache] record under {} is stale ({} ms old)",
                key,
                record.age_ms(now_ms)
            );
            return None;
        }

        debug!("[cache] hit for {} ({} items)", key, record.items.len());
        Some(record.items)
    }

    /// Best-effort write; failures are logged and dropped.
    pub fn store(&self, key: &str, now_ms: u64, items: &[MediaEntry]) {
        let record = CacheRecord::new(now_ms, items.to_vec());
        let json = match serde_json::to_string(&record) {
            Ok(json) => json,
            Err(e) => {
                warn!("[cache] failed to encode record for {}: {}", key, e);
                return;
            }
        };

        if let Err(e) = self.store.set_item(key, &json) {
            warn!("[cache] write for {} dropped: {}", key, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MemoryStore;

    const NOW: u64 = 1_700_000_000_000;
    const MINUTE: u64 = 60 * 1000;

    fn items() -> Vec<MediaEntry> {
        vec![
            MediaEntry::new("a.png", "u1", "p1").unwrap(),
            MediaEntry::new("b.mp4", "u2", "p2").unwrap(),
        ]
    }

    #[test]
    fn test_record_freshness_boundaries() {
        let record = CacheRecord::new(NOW - 9 * MINUTE, vec![]);
        assert!(record.is_fresh(NOW));

        let record = CacheRecord::new(NOW - 11 * MINUTE, vec![]);
        assert!(!record.is_fresh(NOW));

        let record = CacheRecord::new(NOW - FRESHNESS_WINDOW_MS, vec![]);
        assert!(!record.is_fresh(NOW));
    }

    #[test]
    fn test_future_timestamp_is_fresh() {
        let record = CacheRecord::new(NOW + MINUTE, vec![]);
        assert_eq!(record.age_ms(NOW), 0);
        assert!(record.is_fresh(NOW));
    }

    #[test]
    fn test_store_then_load() {
        let store = MemoryStore::new();
        let cache = ListingCache::new(&store);

        cache.store("k", NOW, &items());
        let loaded = cache.load("k", NOW + MINUTE).unwrap();

        assert_eq!(loaded, items());
    }

    #[test]
    fn test_stale_record_is_miss() {
        let store = MemoryStore::new();
        let cache = ListingCache::new(&store);

        cache.store("k", NOW - 11 * MINUTE, &items());
        assert!(cache.load("k", NOW).is_none());
    }

    #[test]
    fn test_malformed_records_are_miss() {
        let store = MemoryStore::new();
        let cache = ListingCache::new(&store);

        for raw in [
            "not json",
            "{}",
            r#"{"t":1}"#,
            r#"{"items":[]}"#,
            r#"{"t":1,"items":{}}"#,
            r#"{"t":"yesterday","items":[]}"#,
        ] {
            store.insert("k", raw);
            assert!(cache.load("k", NOW).is_none(), "{raw}");
        }
    }

    #[test]
    fn test_record_written_by_site_script_is_read() {
        let store = MemoryStore::new();
        store.insert(
            "k",
            &format!(
                r#"{{"t":{},"items":[{{"name":"a.png","type":"image","download_url":"u1","html_url":"p1"}}]}}"#,
                NOW - MINUTE
            ),
        );

        let loaded = ListingCache::new(&store).load("k", NOW).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name(), "a.png");
    }

    #[test]
    fn test_rejected_write_is_swallowed() {
        let store = MemoryStore::new();
        store.reject_writes(true);
        let cache = ListingCache::new(&store);

        cache.store("k", NOW, &items());
        assert!(cache.load("k", NOW).is_none());
        assert_eq!(store.write_count(), 0);
    }
}
