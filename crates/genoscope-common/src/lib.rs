//! genoscope-common — Shared types and errors used across all Genoscope crates.

pub mod entities;
pub mod error;

// Re-export commonly used types
pub use entities::{ExpressionMeasurement, GeneRecord, TargetQuality, TargetTractability};
pub use error::{GenoscopeError, Result};
