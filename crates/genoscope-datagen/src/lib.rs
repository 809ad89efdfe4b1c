//! genoscope-datagen — Synthetic gene corpus generator.
//!
//! Draws a corpus of annotated genes from a fixed catalogue, with
//! effect-size-correlated significance on every expression
//! measurement. Not bit-for-bit reproducible across versions, but the
//! distributional contract is, and is pinned by seeded tests.

pub mod catalogue;
pub mod generator;

pub use catalogue::{catalogue_len, GENE_CATALOGUE};
pub use generator::{generate, generate_default};
