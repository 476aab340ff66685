//! Lightbox state machine
//!
//! ```text
//! Closed --open(i)--> Open(i)
//! Open(i) --close--> Closed
//! Open(i) --prev--> Open((i + N - 1) % N)
//! Open(i) --next--> Open((i + 1) % N)
//! ```
//!
//! Every transition yields a [`StageCommand`]; `None` means nothing changed.
//! Indices always address the canonical entry list.

use crate::media::{MediaEntry, MediaKind};

/// Lightbox state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LightboxState {
    #[default]
    Closed,
    Open(usize),
}

/// What the stage shows for one entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StageContent {
    /// Autoplaying inline video with controls
    Video { src: String },
    /// Still image labelled with the file name
    Image { src: String, alt: String },
}

impl StageContent {
    /// Stage content for an entry
    pub fn for_entry(entry: &MediaEntry) -> Self {
        match entry.kind() {
            MediaKind::Video => Self::Video {
                src: entry.source_url().to_string(),
            },
            MediaKind::Image => Self::Image {
                src: entry.source_url().to_string(),
                alt: entry.name().to_string(),
            },
        }
    }
}

/// Instruction for the rendering port.
///
/// Both variants start by halting any playing video and emptying the stage
/// and caption; `Show` then builds the new surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StageCommand {
    Show { index: usize, content: StageContent },
    Clear,
}

/// Lightbox controller
#[derive(Clone, Debug)]
pub struct Lightbox {
    state: LightboxState,
    enabled: bool,
}

impl Lightbox {
    /// Create a closed lightbox.
    ///
    /// A disabled lightbox (host page lacks the overlay) ignores every transition.
    pub fn new(enabled: bool) -> Self {
        Self {
            state: LightboxState::Closed,
            enabled,
        }
    }

    pub fn state(&self) -> LightboxState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open(_))
    }

    /// Canonical index on stage
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            LightboxState::Open(index) => Some(index),
            LightboxState::Closed => None,
        }
    }

    /// Open at `index`; out-of-range indices are ignored
    pub fn open(&mut self, entries: &[MediaEntry], index: usize) -> Option<StageCommand> {
        if !self.enabled {
            return None;
        }
        let entry = entries.get(index)?;
        self.state = LightboxState::Open(index);
        Some(StageCommand::Show {
            index,
            content: StageContent::for_entry(entry),
        })
    }

    pub fn close(&mut self) -> Option<StageCommand> {
        if !self.enabled || !self.is_open() {
            return None;
        }
        self.state = LightboxState::Closed;
        Some(StageCommand::Clear)
    }

    /// Step forward, wrapping past the last entry
    pub fn next(&mut self, entries: &[MediaEntry]) -> Option<StageCommand> {
        let current = self.current_index()?;
        let len = entries.len();
        if len == 0 {
            return None;
        }
        self.open(entries, (current + 1) % len)
    }

    /// Step back, wrapping past the first entry
    pub fn prev(&mut self, entries: &[MediaEntry]) -> Option<StageCommand> {
        let current = self.current_index()?;
        let len = entries.len();
        if len == 0 {
            return None;
        }
        self.open(entries, (current % len + len - 1) % len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(names: &[&str]) -> Vec<MediaEntry> {
        names
            .iter()
            .map(|&name| MediaEntry::new(name, format!("u/{}", name), format!("p/{}", name)).unwrap())
            .collect()
    }

    #[test]
    fn test_open_valid_index() {
        let list = entries(&["a.png", "b.mp4"]);
        let mut lightbox = Lightbox::new(true);

        let command = lightbox.open(&list, 1).unwrap();

        assert_eq!(lightbox.state(), LightboxState::Open(1));
        assert_eq!(
            command,
            StageCommand::Show {
                index: 1,
                content: StageContent::Video {
                    src: "u/b.mp4".to_string()
                }
            }
        );
    }

    #[test]
    fn test_image_content_uses_name_as_alt() {
        let list = entries(&["a.png"]);
        assert_eq!(
            StageContent::for_entry(&list[0]),
            StageContent::Image {
                src: "u/a.png".to_string(),
                alt: "a.png".to_string()
            }
        );
    }

    #[test]
    fn test_open_out_of_range_is_noop() {
        let list = entries(&["a.png"]);
        let mut lightbox = Lightbox::new(true);
        assert_eq!(lightbox.open(&list, 5), None);
        assert_eq!(lightbox.state(), LightboxState::Closed);

        lightbox.open(&list, 0);
        assert_eq!(lightbox.open(&list, 5), None);
        assert_eq!(lightbox.state(), LightboxState::Open(0));
    }

    #[test]
    fn test_reopen_same_index_rebuilds() {
        let list = entries(&["a.png"]);
        let mut lightbox = Lightbox::new(true);
        lightbox.open(&list, 0);
        assert!(matches!(
            lightbox.open(&list, 0),
            Some(StageCommand::Show { index: 0, .. })
        ));
    }

    #[test]
    fn test_wraparound() {
        let list = entries(&["a.png", "b.png", "c.png"]);
        let mut lightbox = Lightbox::new(true);

        lightbox.open(&list, 0);
        lightbox.prev(&list);
        assert_eq!(lightbox.state(), LightboxState::Open(2));

        lightbox.next(&list);
        assert_eq!(lightbox.state(), LightboxState::Open(0));
    }

    #[test]
    fn test_single_entry_navigation_stays() {
        let list = entries(&["a.png"]);
        let mut lightbox = Lightbox::new(true);
        lightbox.open(&list, 0);
        assert!(lightbox.next(&list).is_some());
        assert_eq!(lightbox.current_index(), Some(0));
    }

    #[test]
    fn test_navigation_while_closed_is_noop() {
        let list = entries(&["a.png", "b.png"]);
        let mut lightbox = Lightbox::new(true);
        assert_eq!(lightbox.next(&list), None);
        assert_eq!(lightbox.prev(&list), None);
        assert_eq!(lightbox.close(), None);
    }

    #[test]
    fn test_navigation_with_empty_list_is_noop() {
        let list = entries(&["a.png"]);
        let mut lightbox = Lightbox::new(true);
        lightbox.open(&list, 0);
        assert_eq!(lightbox.next(&[]), None);
        assert_eq!(lightbox.prev(&[]), None);
        assert_eq!(lightbox.current_index(), Some(0));
    }

    #[test]
    fn test_close() {
        let list = entries(&["a.png"]);
        let mut lightbox = Lightbox::new(true);
        lightbox.open(&list, 0);
        assert_eq!(lightbox.close(), Some(StageCommand::Clear));
        assert!(!lightbox.is_open());
    }

    #[test]
    fn test_disabled_ignores_everything() {
        let list = entries(&["a.png", "b.png"]);
        let mut lightbox = Lightbox::new(false);
        assert_eq!(lightbox.open(&list, 0), None);
        assert_eq!(lightbox.next(&list), None);
        assert_eq!(lightbox.close(), None);
        assert_eq!(lightbox.state(), LightboxState::Closed);
    }
}
