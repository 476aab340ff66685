//! Grid layout
//!
//! Turns the entry list and display order into plain tile data. Each tile
//! carries the canonical index of its entry, so activating it opens the
//! right entry whatever the shuffle did.

use crate::media::{MediaEntry, MediaKind};
use crate::messages::{Messages, Notice};
use crate::order::DisplayOrder;

/// Container class that selects the unlimited gallery
pub const FULL_GRID_CLASS: &str = "media-wall__grid--full";

/// Start offset appended to video thumbnails so a poster frame is decoded
pub const POSTER_FRAGMENT: &str = "#t=0.1";

/// How many tiles a grid shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridMode {
    /// Homepage strip capped at `limit` tiles
    Preview { limit: usize },
    /// Dedicated gallery page showing everything
    Full,
}

impl GridMode {
    /// Mode from the container's presentation flag
    pub fn from_full_flag(full: bool, limit: usize) -> Self {
        if full {
            GridMode::Full
        } else {
            GridMode::Preview { limit }
        }
    }

    /// Tiles shown out of `available`
    #[inline]
    pub fn visible_count(self, available: usize) -> usize {
        match self {
            GridMode::Preview { limit } => available.min(limit),
            GridMode::Full => available,
        }
    }
}

/// Tile thumbnail
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Thumbnail {
    /// Lazy-loaded image
    Image { src: String, alt: String },
    /// Muted poster-frame video with a play badge
    Video { src: String },
}

impl Thumbnail {
    fn for_entry(entry: &MediaEntry) -> Self {
        match entry.kind() {
            MediaKind::Image => Thumbnail::Image {
                src: entry.source_url().to_string(),
                alt: entry.name().to_string(),
            },
            MediaKind::Video => Thumbnail::Video {
                src: format!("{}{}", entry.source_url(), POSTER_FRAGMENT),
            },
        }
    }
}

/// One clickable grid cell
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    /// Position in the canonical entry list (`data-media-idx`)
    pub canonical_index: usize,
    pub name: String,
    pub kind: MediaKind,
    pub thumbnail: Thumbnail,
    /// Accessible label
    pub label: String,
}

/// Everything the grid container can show
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridView {
    Loading(Notice),
    Empty(Notice),
    Failed(Notice),
    Tiles(Vec<Tile>),
}

impl GridView {
    /// Lay out tiles in display order.
    ///
    /// An empty entry list yields the empty-folder notice.
    pub fn build(
        entries: &[MediaEntry],
        order: &DisplayOrder,
        mode: GridMode,
        messages: &Messages,
        path: &str,
    ) -> Self {
        if entries.is_empty() {
            return GridView::Empty(messages.empty(path));
        }

        let visible = mode.visible_count(order.len());
        let tiles = order
            .indices()
            .iter()
            .take(visible)
            .filter_map(|&canonical_index| {
                let entry = entries.get(canonical_index)?;
                Some(Tile {
                    canonical_index,
                    name: entry.name().to_string(),
                    kind: entry.kind(),
                    thumbnail: Thumbnail::for_entry(entry),
                    label: messages.tile_label(entry.kind(), entry.name()),
                })
            })
            .collect();

        GridView::Tiles(tiles)
    }

    /// Tiles, if this view shows any
    pub fn tiles(&self) -> &[Tile] {
        match self {
            GridView::Tiles(tiles) => tiles,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn entries(count: usize) -> Vec<MediaEntry> {
        (0..count)
            .map(|i| {
                let name = if i % 2 == 0 {
                    format!("img{}.png", i)
                } else {
                    format!("clip{}.mp4", i)
                };
                MediaEntry::new(name, format!("u{}", i), format!("p{}", i)).unwrap()
            })
            .collect()
    }

    #[test]
    fn test_mode_from_flag() {
        assert_eq!(GridMode::from_full_flag(true, 12), GridMode::Full);
        assert_eq!(
            GridMode::from_full_flag(false, 12),
            GridMode::Preview { limit: 12 }
        );
    }

    #[test]
    fn test_preview_caps_tiles() {
        let list = entries(20);
        let order = DisplayOrder::identity(list.len());
        let view = GridView::build(
            &list,
            &order,
            GridMode::Preview { limit: 12 },
            &Messages::default(),
            "media",
        );
        assert_eq!(view.tiles().len(), 12);
    }

    #[test]
    fn test_full_shows_everything() {
        let list = entries(20);
        let order = DisplayOrder::identity(list.len());
        let view = GridView::build(&list, &order, GridMode::Full, &Messages::default(), "media");
        assert_eq!(view.tiles().len(), 20);
    }

    #[test]
    fn test_empty_list_shows_notice() {
        let view = GridView::build(
            &[],
            &DisplayOrder::identity(0),
            GridMode::Full,
            &Messages::default(),
            "media",
        );
        assert!(matches!(view, GridView::Empty(_)));
        assert!(view.tiles().is_empty());
    }

    #[test]
    fn test_tiles_address_canonical_entries() {
        let list = entries(5);
        let mut rng = StdRng::seed_from_u64(17);
        let order = DisplayOrder::shuffled(list.len(), &mut rng);
        let view = GridView::build(&list, &order, GridMode::Full, &Messages::default(), "media");

        for (position, tile) in view.tiles().iter().enumerate() {
            assert_eq!(Some(tile.canonical_index), order.canonical_at(position));
            assert_eq!(tile.name, list[tile.canonical_index].name());
        }
    }

    #[test]
    fn test_video_thumbnail_and_label() {
        let list = entries(2);
        let order = DisplayOrder::identity(2);
        let view = GridView::build(&list, &order, GridMode::Full, &Messages::default(), "media");
        let tile = &view.tiles()[1];

        assert_eq!(
            tile.thumbnail,
            Thumbnail::Video {
                src: "u1#t=0.1".to_string()
            }
        );
        assert_eq!(tile.label, "Video öffnen: clip1.mp4");
    }

    #[test]
    fn test_image_thumbnail() {
        let list = entries(1);
        let view = GridView::build(
            &list,
            &DisplayOrder::identity(1),
            GridMode::Full,
            &Messages::default(),
            "media",
        );
        assert_eq!(
            view.tiles()[0].thumbnail,
            Thumbnail::Image {
                src: "u0".to_string(),
                alt: "img0.png".to_string()
            }
        );
    }
}
