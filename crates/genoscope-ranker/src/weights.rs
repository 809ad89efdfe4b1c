//! Per-dimension scoring weights.

use serde::{Deserialize, Serialize};

/// One non-negative weight per scoring dimension.
///
/// The UI caps its dials at 10, but the engine accepts any non-negative
/// value; there is no structural upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weights {
    pub fda_approved: f64,
    pub clinical_studies: f64,
    pub patents: f64,
    pub publications: f64,
    pub druggability: f64,
    pub expression: f64,
}

impl Default for Weights {
    /// Initial dial positions of the explorer UI.
    fn default() -> Self {
        Self {
            fda_approved: 10.0,
            clinical_studies: 8.0,
            patents: 6.0,
            publications: 5.0,
            druggability: 9.0,
            expression: 7.0,
        }
    }
}

impl Weights {
    /// All dimensions weighted zero; every gene scores 0.0.
    pub fn zero() -> Self {
        Self {
            fda_approved: 0.0,
            clinical_studies: 0.0,
            patents: 0.0,
            publications: 0.0,
            druggability: 0.0,
            expression: 0.0,
        }
    }

    /// Validate that every weight is non-negative.
    pub fn validate(&self) -> bool {
        self.as_array().iter().all(|w| *w >= 0.0)
    }

    /// Convert to array for iteration.
    pub fn as_array(&self) -> [f64; 6] {
        [
            self.fda_approved,
            self.clinical_studies,
            self.patents,
            self.publications,
            self.druggability,
            self.expression,
        ]
    }
}
