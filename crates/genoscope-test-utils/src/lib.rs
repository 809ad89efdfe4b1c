//! genoscope-test-utils — Shared fixtures for Genoscope tests.

use std::collections::HashMap;

use genoscope_common::{ExpressionMeasurement, GeneRecord, TargetQuality, TargetTractability};

/// Builder for [`GeneRecord`] fixtures.
///
/// Defaults are deliberately unremarkable (nothing approved, no
/// studies, mid-scale tractability) so a test only states the fields
/// it cares about.
pub struct GeneBuilder {
    record: GeneRecord,
}

impl GeneBuilder {
    pub fn new(id: &str, symbol: &str) -> Self {
        Self {
            record: GeneRecord {
                id: id.to_string(),
                symbol: symbol.to_string(),
                name: format!("{symbol} protein"),
                fda_approved: false,
                clinical_studies: 0,
                patents: 0,
                publications: 0,
                druggability: 1,
                subtype_expressions: HashMap::new(),
                target_tractability: TargetTractability {
                    small_molecule: 5,
                    antibody: 5,
                    other: 5,
                },
                target_quality: TargetQuality {
                    genetic_association: 5,
                    safety_risk: 5,
                },
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.record.name = name.to_string();
        self
    }

    pub fn fda_approved(mut self, approved: bool) -> Self {
        self.record.fda_approved = approved;
        self
    }

    pub fn clinical_studies(mut self, n: u32) -> Self {
        self.record.clinical_studies = n;
        self
    }

    pub fn patents(mut self, n: u32) -> Self {
        self.record.patents = n;
        self
    }

    pub fn publications(mut self, n: u32) -> Self {
        self.record.publications = n;
        self
    }

    pub fn druggability(mut self, score: u8) -> Self {
        self.record.druggability = score;
        self
    }

    /// Add one expression measurement for `comparison`.
    pub fn expression(mut self, comparison: &str, value: f64, p_value: f64) -> Self {
        self.record
            .subtype_expressions
            .insert(comparison.to_string(), ExpressionMeasurement { value, p_value });
        self
    }

    pub fn build(self) -> GeneRecord {
        self.record
    }
}

/// A small mixed corpus: one approved heavyweight, one unapproved gene
/// with strong expression, one sparse gene with no expression entries.
pub fn sample_corpus(comparison: &str) -> Vec<GeneRecord> {
    vec![
        GeneBuilder::new("gene_0", "KRAS")
            .name("GTPase KRas")
            .fda_approved(true)
            .clinical_studies(15)
            .patents(40)
            .publications(1800)
            .druggability(9)
            .expression(comparison, 0.3, 0.6)
            .build(),
        GeneBuilder::new("gene_1", "TP53")
            .name("Cellular tumor antigen p53")
            .clinical_studies(4)
            .patents(12)
            .publications(950)
            .druggability(5)
            .expression(comparison, -2.4, 0.003)
            .build(),
        GeneBuilder::new("gene_2", "SOX2")
            .name("Transcription factor SOX-2")
            .publications(120)
            .druggability(2)
            .build(),
    ]
}
