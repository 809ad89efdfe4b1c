//! One exploratory session over a gene collection.
//!
//! Owns the corpus, the active comparison set, the current weights, and
//! the sort toggle state. Single-threaded and synchronous; every
//! operation here is a non-blocking pure computation.

use genoscope_common::GeneRecord;
use tracing::debug;

use crate::classifier::{classify, ExpressionClass};
use crate::scorer::score;
use crate::sort::{compare_genes, SortKey, SortState};
use crate::weights::Weights;

pub struct RankingSession {
    genes: Vec<GeneRecord>,
    comparisons: Vec<String>,
    weights: Weights,
    sort: Option<SortState>,
}

impl RankingSession {
    /// The comparison set is fixed for the life of the session; it is
    /// what defines which expression columns exist.
    pub fn new(genes: Vec<GeneRecord>, comparisons: Vec<String>) -> Self {
        Self {
            genes,
            comparisons,
            weights: Weights::default(),
            sort: None,
        }
    }

    pub fn genes(&self) -> &[GeneRecord] {
        &self.genes
    }

    pub fn comparisons(&self) -> &[String] {
        &self.comparisons
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub fn sort_state(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// Replace the active weights. The current ordering is kept until
    /// the next sort; scores are always computed on demand.
    pub fn set_weights(&mut self, weights: Weights) {
        self.weights = weights;
    }

    /// Sort by `key`, applying the toggle rule: re-clicking the active
    /// column flips direction, a new column starts ascending. The sort
    /// is stable, so equal keys keep their current relative order.
    pub fn sort_by(&mut self, key: SortKey) {
        let state = match self.sort.take() {
            Some(mut state) => {
                state.toggle(key);
                state
            }
            None => SortState::new(key),
        };

        debug!(
            key = ?state.key,
            direction = ?state.direction,
            genes = self.genes.len(),
            "sorting session"
        );
        let weights = self.weights;
        self.genes
            .sort_by(|a, b| compare_genes(a, b, &state.key, state.direction, &weights));
        self.sort = Some(state);
    }

    /// Composite score of one gene under the session weights.
    pub fn score_of(&self, gene_id: &str) -> Option<f64> {
        self.gene(gene_id).map(|g| score(g, &self.weights))
    }

    /// Classification of one expression cell. A comparison the gene
    /// carries no entry for classifies as neutral and non-significant.
    pub fn classify_cell(&self, gene_id: &str, comparison: &str) -> Option<ExpressionClass> {
        self.gene(gene_id).map(|g| {
            let m = g.expression(comparison);
            classify(m.value, m.p_value)
        })
    }

    fn gene(&self, gene_id: &str) -> Option<&GeneRecord> {
        self.genes.iter().find(|g| g.id == gene_id)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
