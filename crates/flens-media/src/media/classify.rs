//! Filename classification

use super::MediaKind;

/// Extensions rendered as images
pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "webp", "gif"];

/// Extensions rendered as videos
pub const VIDEO_EXTENSIONS: [&str; 2] = ["mp4", "webm"];

/// Verdict for a single filename
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    /// Displayable, with the kind derived from the extension
    Supported(MediaKind),
    /// Unknown or missing extension
    Unsupported,
}

impl Classification {
    /// Check if the file can be displayed
    #[inline]
    pub fn is_supported(self) -> bool {
        matches!(self, Classification::Supported(_))
    }

    /// Media kind for supported files
    #[inline]
    pub fn kind(self) -> Option<MediaKind> {
        match self {
            Classification::Supported(kind) => Some(kind),
            Classification::Unsupported => None,
        }
    }
}

/// Lowercase extension after the last `.`
///
/// The extension must be non-empty ASCII alphanumerics, so `a.` and
/// `a.tar-gz` have none.
pub fn extension_of(name: &str) -> Option<String> {
    let (_, ext) = name.rsplit_once('.')?;
    if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Classify a filename. Never fails.
pub fn classify(name: &str) -> Classification {
    let Some(ext) = extension_of(name) else {
        return Classification::Unsupported;
    };

    if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        Classification::Supported(MediaKind::Image)
    } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
        Classification::Supported(MediaKind::Video)
    } else {
        Classification::Unsupported
    }
}
