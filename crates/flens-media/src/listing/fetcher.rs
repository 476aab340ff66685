//! Listing fetch with session caching

use log::{debug, info, warn};

use super::{parse_listing, ListingLocation, LISTING_MEDIA_TYPE};
use crate::cache::{ListingCache, SessionStore};
use crate::clock::Clock;
use crate::error::{GalleryError, GalleryResult};
use crate::media::MediaEntry;

/// Raw HTTP answer from the listing endpoint
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    /// HTTP status code
    pub status: u16,
    /// Response body (may be empty for non-success statuses)
    pub body: String,
}

impl HttpReply {
    /// Create a new reply
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Check for a 2xx status
    #[inline]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Single-shot HTTP GET.
///
/// On WASM this wraps `window.fetch`. Implementations return
/// `GalleryError::Transport` when no response arrives at all; any response,
/// whatever its status, is an `Ok(HttpReply)`.
#[allow(async_fn_in_trait)]
pub trait ListingTransport {
    /// Issue a GET with the given `Accept` header
    async fn get(&self, url: &str, accept: &str) -> GalleryResult<HttpReply>;
}

impl<T: ListingTransport + ?Sized> ListingTransport for &T {
    async fn get(&self, url: &str, accept: &str) -> GalleryResult<HttpReply> {
        (**self).get(url, accept).await
    }
}

/// Fetches the media listing for one repository folder
///
/// A fresh cache record short-circuits the network. There are no retries.
pub struct ListingFetcher<T, S, C> {
    location: ListingLocation,
    transport: T,
    store: S,
    clock: C,
}

impl<T, S, C> ListingFetcher<T, S, C>
where
    T: ListingTransport,
    S: SessionStore,
    C: Clock,
{
    /// Create a new fetcher
    pub fn new(location: ListingLocation, transport: T, store: S, clock: C) -> Self {
        Self {
            location,
            transport,
            store,
            clock,
        }
    }

    /// Location being listed
    pub fn location(&self) -> &ListingLocation {
        &self.location
    }

    /// Fetch the canonical entry list (may be empty)
    pub async fn fetch_entries(&self) -> GalleryResult<Vec<MediaEntry>> {
        let key = self.location.cache_key();
        let cache = ListingCache::new(&self.store);

        if let Some(items) = cache.load(&key, self.clock.now_ms()) {
            return Ok(items);
        }

        let url = self.location.api_url();
        debug!("[listing] GET {}", url);
        let reply = self.transport.get(&url, LISTING_MEDIA_TYPE).await?;

        if !reply.is_success() {
            warn!("[listing] {} answered {}", url, reply.status);
            return Err(GalleryError::Upstream {
                status: reply.status,
            });
        }

        let entries = parse_listing(&reply.body)?;
        cache.store(&key, self.clock.now_ms(), &entries);

        info!(
            "[listing] {} media files in /{}",
            entries.len(),
            self.location.path
        );
        Ok(entries)
    }
}
