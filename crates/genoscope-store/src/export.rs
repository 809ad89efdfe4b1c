//! Flat export projection of the favorites set.
//!
//! The download deliberately drops the nested tractability, quality,
//! and expression detail; it is a shortlist summary, not a backup.

use chrono::{NaiveDate, Utc};
use genoscope_common::{GeneRecord, Result};
use serde::{Deserialize, Serialize};

use crate::favorites::FavoritesStore;
use crate::storage::StorageBackend;

/// One exported favorite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteExport {
    pub symbol: String,
    pub name: String,
    pub fda_approved: bool,
    pub clinical_studies: u32,
    pub patents: u32,
    pub publications: u32,
    pub druggability: u8,
}

impl From<&GeneRecord> for FavoriteExport {
    fn from(gene: &GeneRecord) -> Self {
        Self {
            symbol: gene.symbol.clone(),
            name: gene.name.clone(),
            fda_approved: gene.fda_approved,
            clinical_studies: gene.clinical_studies,
            patents: gene.patents,
            publications: gene.publications,
            druggability: gene.druggability,
        }
    }
}

/// Filename for an export produced on `date`:
/// `gene-favorites-<ISO-date>.json`.
pub fn export_filename_for(date: NaiveDate) -> String {
    format!("gene-favorites-{}.json", date.format("%Y-%m-%d"))
}

/// Filename for an export produced today (UTC).
pub fn export_filename() -> String {
    export_filename_for(Utc::now().date_naive())
}

impl<B: StorageBackend> FavoritesStore<B> {
    /// Projection of every favorite, in insertion order.
    pub fn export_entries(&self) -> Vec<FavoriteExport> {
        self.favorites().iter().map(FavoriteExport::from).collect()
    }

    /// The export document: a pretty-printed UTF-8 JSON array. A
    /// serialization failure is reported, never applied half-way.
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.export_entries())?)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
