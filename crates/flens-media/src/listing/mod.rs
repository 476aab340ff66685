//! Repository listing
//!
//! Addressing for the repository-contents endpoint and normalization of its
//! JSON response into [`MediaEntry`] values.

mod fetcher;

pub use fetcher::{HttpReply, ListingFetcher, ListingTransport};

use log::debug;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Deserialize;

use crate::error::{GalleryError, GalleryResult};
use crate::media::MediaEntry;

/// Base URL of the repository-contents API
pub const API_BASE: &str = "https://api.github.com";

/// Media type requesting the structured JSON representation
pub const LISTING_MEDIA_TYPE: &str = "application/vnd.github+json";

/// Prefix of the session cache key
pub const CACHE_KEY_PREFIX: &str = "fs_media_cache";

/// Characters left alone by `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Repository folder to list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingLocation {
    pub owner: String,
    pub repo: String,
    pub path: String,
}

impl ListingLocation {
    /// Create a new location
    pub fn new(owner: impl Into<String>, repo: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            path: path.into(),
        }
    }

    /// Contents endpoint URL, each segment encoded as a URI component
    pub fn api_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            API_BASE,
            utf8_percent_encode(&self.owner, URI_COMPONENT),
            utf8_percent_encode(&self.repo, URI_COMPONENT),
            utf8_percent_encode(&self.path, URI_COMPONENT),
        )
    }

    /// Session cache key: `fs_media_cache_{owner}_{repo}_{path}`
    pub fn cache_key(&self) -> String {
        format!(
            "{}_{}_{}_{}",
            CACHE_KEY_PREFIX, self.owner, self.repo, self.path
        )
    }
}

/// One element of the contents response
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RemoteEntry {
    #[serde(rename = "type", default)]
    pub entry_type: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
}

impl RemoteEntry {
    /// Convert to a media entry if this is a supported file
    pub fn into_media(self) -> Option<MediaEntry> {
        if self.entry_type != "file" {
            return None;
        }
        MediaEntry::new(
            self.name?,
            self.download_url?,
            self.html_url.unwrap_or_default(),
        )
    }
}

/// Keep supported files, in response order
pub fn normalize(entries: impl IntoIterator<Item = RemoteEntry>) -> Vec<MediaEntry> {
    entries.into_iter().filter_map(RemoteEntry::into_media).collect()
}

/// Parse a contents response body.
///
/// The body must be a JSON array. Elements that are not entry objects are
/// skipped rather than failing the whole listing.
pub fn parse_listing(body: &str) -> GalleryResult<Vec<MediaEntry>> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| GalleryError::MalformedListing(e.to_string()))?;

    let serde_json::Value::Array(elements) = value else {
        return Err(GalleryError::MalformedListing(
            "expected a JSON array".to_string(),
        ));
    };

    let total = elements.len();
    let remote = elements
        .into_iter()
        .filter_map(|element| serde_json::from_value::<RemoteEntry>(element).ok());
    let entries = normalize(remote);

    debug!(
        "[listing] kept {} of {} remote entries",
        entries.len(),
        total
    );
    Ok(entries)
}
