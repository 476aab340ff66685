//! Media entries
//!
//! A [`MediaEntry`] can only be built from a name that classifies as
//! supported, both from a fresh listing and when reading it back from the
//! session cache.

mod classify;

pub use classify::{classify, extension_of, Classification, IMAGE_EXTENSIONS, VIDEO_EXTENSIONS};

use serde::{Deserialize, Serialize};

/// Kind of displayable media
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Check if this is a video
    #[inline]
    pub fn is_video(self) -> bool {
        matches!(self, MediaKind::Video)
    }
}

/// One remote file eligible for display
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredEntry", into = "StoredEntry")]
pub struct MediaEntry {
    name: String,
    kind: MediaKind,
    source_url: String,
    page_url: String,
}

impl MediaEntry {
    /// Build an entry, classifying `name`.
    ///
    /// Returns `None` for unsupported names.
    pub fn new(
        name: impl Into<String>,
        source_url: impl Into<String>,
        page_url: impl Into<String>,
    ) -> Option<Self> {
        let name = name.into();
        let kind = classify(&name).kind()?;
        Some(Self {
            name,
            kind,
            source_url: source_url.into(),
            page_url: page_url.into(),
        })
    }

    /// Original filename
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Image or video
    #[inline]
    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    /// Direct download URL used for rendering
    #[inline]
    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Browsable page URL (informational)
    #[inline]
    pub fn page_url(&self) -> &str {
        &self.page_url
    }
}

/// Cache wire shape: `{name, type, download_url, html_url}`
#[derive(Clone, Debug, Serialize, Deserialize)]
struct StoredEntry {
    name: String,
    #[serde(rename = "type")]
    kind: MediaKind,
    download_url: String,
    #[serde(default)]
    html_url: String,
}

impl TryFrom<StoredEntry> for MediaEntry {
    type Error = String;

    fn try_from(stored: StoredEntry) -> Result<Self, Self::Error> {
        MediaEntry::new(stored.name, stored.download_url, stored.html_url)
            .ok_or_else(|| "unsupported media name".to_string())
    }
}

impl From<MediaEntry> for StoredEntry {
    fn from(entry: MediaEntry) -> Self {
        Self {
            name: entry.name,
            kind: entry.kind,
            download_url: entry.source_url,
            html_url: entry.page_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_kind_from_name() {
        let entry = MediaEntry::new("b.mp4", "u2", "p2").unwrap();
        assert_eq!(entry.kind(), MediaKind::Video);
        assert_eq!(entry.source_url(), "u2");
        assert_eq!(entry.page_url(), "p2");
    }

    #[test]
    fn test_unsupported_entry_not_constructed() {
        assert!(MediaEntry::new("c.txt", "u3", "p3").is_none());
    }

    #[test]
    fn test_cache_shape() {
        let entry = MediaEntry::new("a.png", "u1", "p1").unwrap();
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "a.png",
                "type": "image",
                "download_url": "u1",
                "html_url": "p1"
            })
        );
    }

    #[test]
    fn test_cached_unsupported_name_rejected() {
        let json = r#"{"name":"evil.exe","type":"image","download_url":"u","html_url":"p"}"#;
        assert!(serde_json::from_str::<MediaEntry>(json).is_err());
    }

    #[test]
    fn test_cached_kind_rederived_from_name() {
        let json = r#"{"name":"clip.webm","type":"image","download_url":"u","html_url":"p"}"#;
        let entry: MediaEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.kind(), MediaKind::Video);
    }
}
