//! Ordering of gene collections by raw or derived keys.
//!
//! The sort is stable: genes with equal keys keep their prior relative
//! order. Numeric keys (including booleans as 0/1) compare with
//! `f64::total_cmp`; only `symbol` compares as a string.

use std::cmp::Ordering;

use genoscope_common::GeneRecord;
use serde::{Deserialize, Serialize};

use crate::scorer::score;
use crate::weights::Weights;

/// A sortable column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Symbol,
    FdaApproved,
    ClinicalStudies,
    Patents,
    Publications,
    Druggability,
    /// Composite score under the currently active weights.
    Score,
    /// Fold-change of one comparison column; 0.0 when absent.
    Expression(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Current sort column and direction, with the toggle rule: re-applying
/// the active key flips direction, a new key resets to ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    /// Apply the toggle rule for a user clicking `key`.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == key {
            self.direction = self.direction.flip();
        } else {
            self.key = key;
            self.direction = SortDirection::Ascending;
        }
    }
}

/// Compare two genes by `key`. One exhaustive dispatch covers the
/// string key and every numeric key; `weights` only matters for
/// [`SortKey::Score`].
pub fn compare_genes(
    a: &GeneRecord,
    b: &GeneRecord,
    key: &SortKey,
    direction: SortDirection,
    weights: &Weights,
) -> Ordering {
    let ord = match key {
        SortKey::Symbol => a.symbol.cmp(&b.symbol),
        SortKey::FdaApproved => {
            f64::from(a.fda_approved as u8).total_cmp(&f64::from(b.fda_approved as u8))
        }
        SortKey::ClinicalStudies => {
            f64::from(a.clinical_studies).total_cmp(&f64::from(b.clinical_studies))
        }
        SortKey::Patents => f64::from(a.patents).total_cmp(&f64::from(b.patents)),
        SortKey::Publications => {
            f64::from(a.publications).total_cmp(&f64::from(b.publications))
        }
        SortKey::Druggability => f64::from(a.druggability).total_cmp(&f64::from(b.druggability)),
        SortKey::Score => score(a, weights).total_cmp(&score(b, weights)),
        SortKey::Expression(comparison) => a
            .expression(comparison)
            .value
            .total_cmp(&b.expression(comparison).value),
    };
    match direction {
        SortDirection::Ascending => ord,
        SortDirection::Descending => ord.reverse(),
    }
}

/// Return a new ordering of `genes` by `key`. Record fields are never
/// mutated.
pub fn sort_genes(
    genes: &[GeneRecord],
    key: &SortKey,
    direction: SortDirection,
    weights: &Weights,
) -> Vec<GeneRecord> {
    let mut sorted = genes.to_vec();
    sorted.sort_by(|a, b| compare_genes(a, b, key, direction, weights));
    sorted
}

// ── Tests ───────────────────────────────────────────────────────────────────
