//! Media Gallery Core for the FlensSabers site
//!
//! This crate provides the browser-independent half of the media wall:
//! - Filename classification (image / video)
//! - Repository listing fetch with a short-lived session cache
//! - Randomized display order
//! - Grid tile layout with stable canonical addressing
//! - Lightbox state machine with keyboard and swipe input
//! - Periodic reshuffle task with visibility-aware suspend/resume
//! - Mobile navigation drawer state
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`media`]: `MediaEntry`, `MediaKind` and the classifier
//! - [`listing`]: endpoint addressing, response normalization, `ListingFetcher`
//! - [`cache`]: `SessionStore` port and the freshness-checked `ListingCache`
//! - [`order`]: Fisher-Yates `shuffle` over any `rand::Rng`, `DisplayOrder`
//! - [`grid`]: `GridMode`, `Tile`, `GridView`
//! - [`lightbox`]: `Lightbox` state machine and stage commands
//! - [`input`]: key mapping and swipe gesture tracking
//! - [`schedule`]: `IntervalScheduler` port and `ReshuffleTask`
//! - [`gallery`]: `GalleryController` tying everything together
//! - [`nav`]: navigation drawer state
//! - [`mock`]: in-memory port implementations for tests
//!
//! ## Example
//!
//! ```rust
//! use flens_media::{classify, MediaKind};
//!
//! assert_eq!(classify("clip.MP4").kind(), Some(MediaKind::Video));
//! assert!(!classify("notes.txt").is_supported());
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable without a browser
//! 2. **Ports at the edges**: DOM, network, storage, clock, timers and randomness are traits
//! 3. **Canonical addressing**: the lightbox always resolves against fetch order, never display order

pub mod cache;
pub mod config;
pub mod gallery;
pub mod grid;
pub mod input;
pub mod lightbox;
pub mod listing;
pub mod media;
pub mod messages;
pub mod mock;
pub mod nav;
pub mod order;
pub mod schedule;

mod clock;
mod error;

// Re-export core types for convenience
pub use cache::{CacheRecord, ListingCache, SessionStore, StoreError, FRESHNESS_WINDOW_MS};
pub use clock::Clock;
pub use config::GalleryConfig;
pub use error::{GalleryError, GalleryResult};
pub use gallery::{GalleryController, GalleryPhase, GalleryView};
pub use grid::{GridMode, GridView, Thumbnail, Tile, FULL_GRID_CLASS};
pub use input::{LightboxKey, SwipeDirection, SwipeTracker, Vec2, SWIPE_THRESHOLD_PX};
pub use lightbox::{Lightbox, LightboxState, StageCommand, StageContent};
pub use listing::{HttpReply, ListingFetcher, ListingLocation, ListingTransport};
pub use media::{classify, Classification, MediaEntry, MediaKind};
pub use messages::{Locale, Messages, Notice};
pub use nav::NavDrawer;
pub use order::{shuffle, DisplayOrder};
pub use schedule::{IntervalScheduler, ReshuffleTask, TimerId};

/// The canonical, fetch-ordered list of entries used for lightbox addressing
pub type EntryList = Vec<MediaEntry>;
