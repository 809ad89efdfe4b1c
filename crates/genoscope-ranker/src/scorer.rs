//! Composite rank score computation.
//!
//! Each dimension carries a fixed sub-coefficient that normalizes its
//! natural range (publications run into the hundreds, druggability sits
//! in [1, 10]) so a user-facing weight has comparable marginal effect
//! across dimensions. The sub-coefficients are not user-configurable.

use genoscope_common::GeneRecord;

use crate::weights::Weights;

const CLINICAL_STUDIES_COEFF: f64 = 0.2;
const PATENTS_COEFF: f64 = 0.1;
const PUBLICATIONS_COEFF: f64 = 0.01;
const DRUGGABILITY_COEFF: f64 = 0.1;
const EXPRESSION_COEFF: f64 = 0.05;

/// Compute the composite score for a gene under the given weights.
///
/// Rounded to one decimal place, half away from zero; under
/// non-negative weights every term is non-negative, so this is
/// round-half-up and the result is >= 0.
pub fn score(gene: &GeneRecord, weights: &Weights) -> f64 {
    let raw = f64::from(gene.fda_approved as u8) * weights.fda_approved
        + f64::from(gene.clinical_studies) * weights.clinical_studies * CLINICAL_STUDIES_COEFF
        + f64::from(gene.patents) * weights.patents * PATENTS_COEFF
        + f64::from(gene.publications) * weights.publications * PUBLICATIONS_COEFF
        + f64::from(gene.druggability) * weights.druggability * DRUGGABILITY_COEFF
        + gene.total_absolute_expression() * weights.expression * EXPRESSION_COEFF;

    (raw * 10.0).round() / 10.0
}

/// Coarse tier of a rounded score, as rendered by the score badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    High,
    Medium,
    Low,
}

impl ScoreTier {
    pub fn of(score: f64) -> Self {
        if score > 10.0 {
            ScoreTier::High
        } else if score > 5.0 {
            ScoreTier::Medium
        } else {
            ScoreTier::Low
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use genoscope_test_utils::GeneBuilder;

    #[test]
    fn test_score_formula() {
        let gene = GeneBuilder::new("gene_1", "KRAS")
            .fda_approved(true)
            .clinical_studies(10)
            .patents(20)
            .publications(500)
            .druggability(8)
            .expression("SubtypeA_vs_Control", 2.0, 0.01)
            .expression("SubtypeB_vs_Control", -1.0, 0.2)
            .build();
        let weights = Weights {
            fda_approved: 1.0,
            clinical_studies: 1.0,
            patents: 1.0,
            publications: 1.0,
            druggability: 1.0,
            expression: 1.0,
        };
        // 1 + 10*0.2 + 20*0.1 + 500*0.01 + 8*0.1 + 3*0.05 = 10.95 → 11.0
        assert_eq!(score(&gene, &weights), 11.0);
    }

    #[test]
    fn test_rounding_is_half_up() {
        // Publications alone: 145 * 1.0 * 0.01 = 1.45 → 1.5
        let gene = GeneBuilder::new("gene_1", "TP53").publications(145).build();
        let mut weights = Weights::zero();
        weights.publications = 1.0;
        assert_eq!(score(&gene, &weights), 1.5);
    }

    #[test]
    fn test_score_non_negative_under_non_negative_weights() {
        let gene = GeneBuilder::new("gene_1", "MYC")
            .expression("SubtypeA_vs_Control", -2.9, 0.01)
            .build();
        assert!(score(&gene, &Weights::default()) >= 0.0);
        assert_eq!(score(&gene, &Weights::zero()), 0.0);
    }

    #[test]
    fn test_missing_expression_contributes_zero() {
        let with = GeneBuilder::new("gene_1", "EGFR")
            .expression("SubtypeA_vs_Control", 0.0, 1.0)
            .build();
        let without = GeneBuilder::new("gene_2", "EGFR").build();
        let weights = Weights::default();
        assert_eq!(score(&with, &weights), score(&without, &weights));
    }

    #[test]
    fn test_zero_weights_zero_everything() {
        let gene = GeneBuilder::new("gene_1", "BRAF")
            .fda_approved(true)
            .clinical_studies(20)
            .patents(50)
            .publications(2000)
            .druggability(10)
            .build();
        assert_eq!(score(&gene, &Weights::zero()), 0.0);
    }

    #[test]
    fn test_score_tiers() {
        assert_eq!(ScoreTier::of(12.3), ScoreTier::High);
        assert_eq!(ScoreTier::of(10.0), ScoreTier::Medium);
        assert_eq!(ScoreTier::of(5.1), ScoreTier::Medium);
        assert_eq!(ScoreTier::of(5.0), ScoreTier::Low);
        assert_eq!(ScoreTier::of(0.0), ScoreTier::Low);
    }
}
