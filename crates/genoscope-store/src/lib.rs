//! genoscope-store — Persisted favorites.
//!
//! A deduplicated set of favorited gene snapshots, written through to
//! an injected storage backend after every mutation, plus the flat
//! export projection the download action produces.

pub mod export;
pub mod favorites;
pub mod storage;

pub use export::{export_filename, export_filename_for, FavoriteExport};
pub use favorites::{FavoritesStore, FAVORITES_KEY};
pub use storage::{FileStorage, MemoryStorage, StorageBackend};
