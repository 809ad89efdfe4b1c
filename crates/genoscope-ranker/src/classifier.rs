//! Expression significance classification.
//!
//! Maps a (log2 fold-change, p-value) pair to an effect-size bucket and
//! a significance flag. The presentation layer turns the pair into a
//! cell color and a full/reduced opacity; the classification itself is
//! exact and pure.

use serde::{Deserialize, Serialize};

/// Effect-size bucket, derived from |value| alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    /// |value| < 0.5 — no meaningful change.
    Neutral,
    /// 0.5 <= |value| <= 1.
    Weak,
    /// 1 < |value| <= 1.5.
    Moderate,
    /// 1.5 < |value| <= 2.
    Strong,
    /// |value| > 2.
    Extreme,
}

/// Direction of change. Neutral cells carry none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Up,
    Down,
}

/// Classification of one expression cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpressionClass {
    pub bucket: Bucket,
    pub polarity: Option<Polarity>,
    pub significant: bool,
}

/// Classify a measurement. Pure: same inputs, same output.
pub fn classify(value: f64, p_value: f64) -> ExpressionClass {
    let abs = value.abs();

    let bucket = if abs < 0.5 {
        Bucket::Neutral
    } else if abs > 2.0 {
        Bucket::Extreme
    } else if abs > 1.5 {
        Bucket::Strong
    } else if abs > 1.0 {
        Bucket::Moderate
    } else {
        Bucket::Weak
    };

    let polarity = match bucket {
        Bucket::Neutral => None,
        _ if value > 0.0 => Some(Polarity::Up),
        _ => Some(Polarity::Down),
    };

    ExpressionClass {
        bucket,
        polarity,
        significant: p_value < 0.05,
    }
}

impl ExpressionClass {
    /// Stable display token for the cell, mirroring the heatmap's
    /// color classes. Non-significant cells render at reduced opacity.
    pub fn display_token(&self) -> &'static str {
        match (self.bucket, self.polarity) {
            (Bucket::Neutral, _) => "neutral",
            (Bucket::Weak, Some(Polarity::Up)) => "up-weak",
            (Bucket::Moderate, Some(Polarity::Up)) => "up-moderate",
            (Bucket::Strong, Some(Polarity::Up)) => "up-strong",
            (Bucket::Extreme, Some(Polarity::Up)) => "up-extreme",
            (Bucket::Weak, Some(Polarity::Down)) => "down-weak",
            (Bucket::Moderate, Some(Polarity::Down)) => "down-moderate",
            (Bucket::Strong, Some(Polarity::Down)) => "down-strong",
            (Bucket::Extreme, Some(Polarity::Down)) => "down-extreme",
            // Non-neutral buckets always carry a polarity.
            (_, None) => "neutral",
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(classify(0.49, 0.9).bucket, Bucket::Neutral);
        assert_eq!(classify(0.5, 0.01).bucket, Bucket::Weak);
        assert_eq!(classify(1.0, 0.01).bucket, Bucket::Weak);
        assert_eq!(classify(1.01, 0.01).bucket, Bucket::Moderate);
        assert_eq!(classify(1.5, 0.01).bucket, Bucket::Moderate);
        assert_eq!(classify(1.51, 0.01).bucket, Bucket::Strong);
        assert_eq!(classify(2.0, 0.01).bucket, Bucket::Strong);
        assert_eq!(classify(2.01, 0.01).bucket, Bucket::Extreme);
    }

    #[test]
    fn test_bucket_ignores_sign() {
        assert_eq!(classify(-2.4, 0.01).bucket, Bucket::Extreme);
        assert_eq!(classify(-0.7, 0.01).bucket, Bucket::Weak);
    }

    #[test]
    fn test_polarity_follows_sign() {
        assert_eq!(classify(1.2, 0.01).polarity, Some(Polarity::Up));
        assert_eq!(classify(-1.2, 0.01).polarity, Some(Polarity::Down));
        assert_eq!(classify(0.1, 0.01).polarity, None);
    }

    #[test]
    fn test_significance_threshold() {
        assert!(classify(1.0, 0.049).significant);
        assert!(!classify(1.0, 0.05).significant);
        assert!(!classify(1.0, 0.9).significant);
    }

    #[test]
    fn test_classify_is_pure() {
        let a = classify(1.7, 0.03);
        let b = classify(1.7, 0.03);
        assert_eq!(a, b);
    }

    #[test]
    fn test_edge_combinations_reachable() {
        // Significant but weak
        let weak = classify(0.6, 0.001);
        assert_eq!(weak.bucket, Bucket::Weak);
        assert!(weak.significant);
        // Extreme but non-significant
        let extreme = classify(2.8, 0.4);
        assert_eq!(extreme.bucket, Bucket::Extreme);
        assert!(!extreme.significant);
    }

    #[test]
    fn test_display_tokens() {
        assert_eq!(classify(0.2, 0.5).display_token(), "neutral");
        assert_eq!(classify(2.5, 0.01).display_token(), "up-extreme");
        assert_eq!(classify(-1.7, 0.01).display_token(), "down-strong");
    }
}
