//! genoscope-ranker — Gene ranking engine.
//!
//! Weighted multi-factor scoring, expression significance
//! classification, stable sorting with direction toggling, and the
//! session object that ties them to one gene collection.

pub mod classifier;
pub mod scorer;
pub mod session;
pub mod sort;
pub mod weights;

pub use classifier::{classify, Bucket, ExpressionClass, Polarity};
pub use scorer::{score, ScoreTier};
pub use session::RankingSession;
pub use sort::{sort_genes, SortDirection, SortKey, SortState};
pub use weights::Weights;
