//! The favorites store.
//!
//! A deduplicated set of gene snapshots keyed by id, kept in insertion
//! order and re-serialized to the backend after every mutation. A
//! mutation whose write fails is rolled back, so an `Err` always means
//! "effect not applied".

use genoscope_common::{GeneRecord, Result};
use tracing::{debug, warn};

use crate::storage::StorageBackend;

/// Storage key holding the persisted favorites blob: a JSON array of
/// full gene records. camelCase, matching the layout the presentation
/// layer persisted historically.
pub const FAVORITES_KEY: &str = "favoriteGenes";

pub struct FavoritesStore<B: StorageBackend> {
    backend: B,
    favorites: Vec<GeneRecord>,
}

impl<B: StorageBackend> FavoritesStore<B> {
    /// Load the persisted set. An absent key starts empty; a blob that
    /// fails to parse is purged from storage and also starts empty, so
    /// a corrupt entry can never wedge every subsequent load.
    pub fn load(backend: B) -> Result<Self> {
        let mut backend = backend;
        let favorites = match backend.read(FAVORITES_KEY)? {
            None => Vec::new(),
            Some(blob) => match serde_json::from_str::<Vec<GeneRecord>>(&blob) {
                Ok(favorites) => favorites,
                Err(err) => {
                    warn!(%err, "discarding unparsable favorites blob");
                    backend.delete(FAVORITES_KEY)?;
                    Vec::new()
                }
            },
        };

        debug!(count = favorites.len(), "favorites loaded");
        Ok(Self { backend, favorites })
    }

    /// Favorite a gene. Returns `Ok(false)` without touching storage
    /// when the id is already present.
    pub fn add(&mut self, gene: &GeneRecord) -> Result<bool> {
        if self.is_favorite(&gene.id) {
            return Ok(false);
        }

        self.favorites.push(gene.clone());
        if let Err(err) = self.persist() {
            self.favorites.pop();
            return Err(err);
        }
        Ok(true)
    }

    /// Unfavorite by id. Returns `Ok(false)` when the id is absent.
    pub fn remove(&mut self, gene_id: &str) -> Result<bool> {
        let Some(index) = self.favorites.iter().position(|g| g.id == gene_id) else {
            return Ok(false);
        };

        let removed = self.favorites.remove(index);
        if let Err(err) = self.persist() {
            self.favorites.insert(index, removed);
            return Err(err);
        }
        Ok(true)
    }

    /// Empty the set unconditionally.
    pub fn clear(&mut self) -> Result<()> {
        let previous = std::mem::take(&mut self.favorites);
        if let Err(err) = self.persist() {
            self.favorites = previous;
            return Err(err);
        }
        Ok(())
    }

    pub fn is_favorite(&self, gene_id: &str) -> bool {
        self.favorites.iter().any(|g| g.id == gene_id)
    }

    /// Favorited snapshots, in insertion order.
    pub fn favorites(&self) -> &[GeneRecord] {
        &self.favorites
    }

    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Synchronously rewrite the whole set. Every mutation goes through
    /// here; persistence is never batched or deferred.
    fn persist(&mut self) -> Result<()> {
        let blob = serde_json::to_string(&self.favorites)?;
        self.backend.write(FAVORITES_KEY, &blob)?;
        debug!(count = self.favorites.len(), "favorites persisted");
        Ok(())
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
