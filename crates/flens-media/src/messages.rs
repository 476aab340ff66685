//! User-visible text
//!
//! The site is German; English is available through the `locale` option.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::media::MediaKind;

/// Message language
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    De,
    En,
}

/// Grid placeholder text with an optional inline code span.
///
/// Rendered as `lead <code>code</code> tail`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub lead: String,
    pub code: Option<String>,
    pub tail: String,
}

impl Notice {
    /// Plain text notice
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            lead: text.into(),
            code: None,
            tail: String::new(),
        }
    }

    /// Notice with a code span
    pub fn with_code(
        lead: impl Into<String>,
        code: impl Into<String>,
        tail: impl Into<String>,
    ) -> Self {
        Self {
            lead: lead.into(),
            code: Some(code.into()),
            tail: tail.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lead)?;
        if let Some(code) = &self.code {
            write!(f, "{}", code)?;
        }
        write!(f, "{}", self.tail)
    }
}

/// Message catalogue for one locale
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Messages {
    locale: Locale,
}

impl Messages {
    /// Create a catalogue
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Placeholder while the listing loads
    pub fn loading(&self) -> Notice {
        match self.locale {
            Locale::De => Notice::plain("Lade Media…"),
            Locale::En => Notice::plain("Loading media…"),
        }
    }

    /// Folder exists but holds no displayable files
    pub fn empty(&self, path: &str) -> Notice {
        let folder = format!("/{}", path);
        match self.locale {
            Locale::De => Notice::with_code("Noch keine Dateien in ", folder, " vorhanden."),
            Locale::En => Notice::with_code("No files in ", folder, " yet."),
        }
    }

    /// Listing failed; tells the site owner what to create
    pub fn load_failed(&self, path: &str) -> Notice {
        let folder = format!("/{}", path);
        match self.locale {
            Locale::De => Notice::with_code(
                "Konnte Media nicht laden. Lege einen Ordner ",
                folder,
                " im GitHub Repo an und lade Dateien hoch.",
            ),
            Locale::En => Notice::with_code(
                "Could not load media. Create a folder ",
                folder,
                " in the GitHub repository and upload files.",
            ),
        }
    }

    /// Accessible label of a grid tile
    pub fn tile_label(&self, kind: MediaKind, name: &str) -> String {
        match (self.locale, kind) {
            (Locale::De, MediaKind::Video) => format!("Video öffnen: {}", name),
            (Locale::De, MediaKind::Image) => format!("Bild öffnen: {}", name),
            (Locale::En, MediaKind::Video) => format!("Open video: {}", name),
            (Locale::En, MediaKind::Image) => format!("Open image: {}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_notice_names_folder() {
        let notice = Messages::new(Locale::De).load_failed("media");
        assert_eq!(notice.code.as_deref(), Some("/media"));
        assert_eq!(
            notice.to_string(),
            "Konnte Media nicht laden. Lege einen Ordner /media im GitHub Repo an und lade Dateien hoch."
        );
    }

    #[test]
    fn test_empty_notice() {
        let notice = Messages::new(Locale::De).empty("media");
        assert_eq!(notice.to_string(), "Noch keine Dateien in /media vorhanden.");
    }

    #[test]
    fn test_english_catalogue() {
        let messages = Messages::new(Locale::En);
        assert_eq!(messages.loading().to_string(), "Loading media…");
        assert_eq!(
            messages.tile_label(MediaKind::Image, "a.png"),
            "Open image: a.png"
        );
    }

    #[test]
    fn test_tile_labels() {
        let messages = Messages::default();
        assert_eq!(
            messages.tile_label(MediaKind::Video, "b.mp4"),
            "Video öffnen: b.mp4"
        );
        assert_eq!(
            messages.tile_label(MediaKind::Image, "a.png"),
            "Bild öffnen: a.png"
        );
    }

    #[test]
    fn test_locale_serde() {
        assert_eq!(serde_json::from_str::<Locale>(r#""en""#).unwrap(), Locale::En);
        assert_eq!(serde_json::to_string(&Locale::De).unwrap(), r#""de""#);
    }
}
