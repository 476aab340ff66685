//! Error types for the media gallery
//!
//! Only the listing fetch path can fail in a way the page has to react to.
//! Cache problems never surface here: a malformed or stale cache record is a
//! miss, and a failed cache write is logged and dropped.

use thiserror::Error;

/// Errors that can occur while fetching the media listing.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GalleryError {
    /// The request could not complete (network unreachable, aborted, blocked).
    #[error("transport error: {0}")]
    Transport(String),

    /// The listing endpoint answered with a non-success status.
    #[error("listing endpoint returned status {status}")]
    Upstream { status: u16 },

    /// The listing body is not a JSON array of directory entries.
    #[error("malformed listing: {0}")]
    MalformedListing(String),
}

impl GalleryError {
    /// HTTP status for upstream failures
    pub fn status(&self) -> Option<u16> {
        match self {
            GalleryError::Upstream { status } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for gallery operations
pub type GalleryResult<T> = Result<T, GalleryError>;
