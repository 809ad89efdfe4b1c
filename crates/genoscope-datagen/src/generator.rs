//! Synthetic gene corpus generation.
//!
//! The corpus is the system's only data source; there is no backend.
//! The Rng is threaded through explicitly so tests drive the
//! distributional contract from a seed instead of patching a global
//! generator.

use std::collections::HashMap;

use genoscope_common::{ExpressionMeasurement, GeneRecord, TargetQuality, TargetTractability};
use rand::Rng;
use tracing::debug;

use crate::catalogue::GENE_CATALOGUE;

/// Generate `count` annotated genes, one expression measurement per
/// comparison key.
///
/// `count` is clamped to the catalogue size; symbols are drawn without
/// replacement, so every returned gene is distinct. Ids are `gene_<i>`
/// in draw order.
pub fn generate<R: Rng>(count: usize, comparisons: &[String], rng: &mut R) -> Vec<GeneRecord> {
    let actual = count.min(GENE_CATALOGUE.len());
    let mut available: Vec<(&str, &str)> = GENE_CATALOGUE.to_vec();
    let mut genes = Vec::with_capacity(actual);

    for i in 0..actual {
        let (symbol, name) = available.remove(rng.gen_range(0..available.len()));

        let fda_approved = rng.gen_bool(0.2);
        // Approved genes tend to carry more trials.
        let clinical_studies = if fda_approved {
            rng.gen_range(0..=20)
        } else {
            rng.gen_range(0..=10)
        };

        let mut subtype_expressions = HashMap::with_capacity(comparisons.len());
        for comparison in comparisons {
            subtype_expressions.insert(comparison.clone(), draw_measurement(rng));
        }

        genes.push(GeneRecord {
            id: format!("gene_{i}"),
            symbol: symbol.to_string(),
            name: name.to_string(),
            fda_approved,
            clinical_studies,
            patents: rng.gen_range(0..=50),
            publications: rng.gen_range(50..=2000),
            druggability: rng.gen_range(1..=10),
            subtype_expressions,
            target_tractability: TargetTractability {
                small_molecule: rng.gen_range(1..=10),
                antibody: rng.gen_range(1..=10),
                other: rng.gen_range(1..=10),
            },
            target_quality: TargetQuality {
                genetic_association: rng.gen_range(1..=10),
                safety_risk: rng.gen_range(1..=10),
            },
        });
    }

    debug!(
        requested = count,
        generated = genes.len(),
        comparisons = comparisons.len(),
        "synthetic corpus generated"
    );
    genes
}

/// Generate with the thread-local Rng.
pub fn generate_default(count: usize, comparisons: &[String]) -> Vec<GeneRecord> {
    generate(count, comparisons, &mut rand::thread_rng())
}

/// One measurement. Larger effect sizes are more likely to come with a
/// significant p-value: 80% above |1.5|, 50% above |1|, 20% otherwise.
/// The correlation is a behavioral contract, not an accident; it is
/// what makes "significant but weak" and "extreme but non-significant"
/// cells reachable.
fn draw_measurement<R: Rng>(rng: &mut R) -> ExpressionMeasurement {
    let value: f64 = rng.gen_range(-3.0..=3.0);
    let abs = value.abs();

    let significant_probability = if abs > 1.5 {
        0.8
    } else if abs > 1.0 {
        0.5
    } else {
        0.2
    };

    let p_value = if rng.gen_bool(significant_probability) {
        rng.gen_range(0.0001..0.05)
    } else {
        rng.gen_range(0.05..0.5)
    };

    ExpressionMeasurement { value, p_value }
}

// ── Tests ───────────────────────────────────────────────────────────────────
