//! Core entity types for the gene catalogue.
//!
//! Field names serialize in camelCase so persisted favorites blobs and
//! exported documents keep the layout the presentation layer expects.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Expression measurement
// ---------------------------------------------------------------------------

/// One differential-expression measurement for a single comparison
/// (e.g. `"SubtypeA_vs_Control"`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpressionMeasurement {
    /// Log2 fold-change. Sign is direction, magnitude is effect size.
    pub value: f64,
    /// Synthetic significance proxy in (0, 1); < 0.05 is significant.
    pub p_value: f64,
}

impl ExpressionMeasurement {
    /// The neutral, non-significant measurement substituted for a
    /// comparison a gene carries no entry for.
    pub const NEUTRAL: ExpressionMeasurement = ExpressionMeasurement {
        value: 0.0,
        p_value: 1.0,
    };
}

// ---------------------------------------------------------------------------
// Tractability / quality sub-records
// ---------------------------------------------------------------------------

/// Modality-specific tractability scores, each on a 1-10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetTractability {
    pub small_molecule: u8,
    pub antibody: u8,
    pub other: u8,
}

/// Target quality scores, each on a 1-10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetQuality {
    pub genetic_association: u8,
    /// Higher is safer.
    pub safety_risk: u8,
}

// ---------------------------------------------------------------------------
// Gene record
// ---------------------------------------------------------------------------

/// A fully annotated gene. Value-like and immutable once generated;
/// consumers that need an independent lifetime (the favorites store)
/// keep their own clone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneRecord {
    /// Opaque unique identifier.
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub fda_approved: bool,
    pub clinical_studies: u32,
    pub patents: u32,
    pub publications: u32,
    /// 1-10 scale.
    pub druggability: u8,
    /// Keyed by comparison key, format `"<Group>_vs_<Group>"`.
    pub subtype_expressions: HashMap<String, ExpressionMeasurement>,
    pub target_tractability: TargetTractability,
    pub target_quality: TargetQuality,
}

impl GeneRecord {
    /// Measurement for `comparison`, or the neutral fallback when the
    /// gene carries no entry for it. A missing entry is never an error.
    pub fn expression(&self, comparison: &str) -> ExpressionMeasurement {
        self.subtype_expressions
            .get(comparison)
            .copied()
            .unwrap_or(ExpressionMeasurement::NEUTRAL)
    }

    /// Sum of absolute fold-changes across every comparison the gene
    /// carries. This is the expression term the scorer consumes.
    pub fn total_absolute_expression(&self) -> f64 {
        self.subtype_expressions
            .values()
            .map(|m| m.value.abs())
            .sum()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
