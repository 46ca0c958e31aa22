//! Raw predictions from the remote classifier and the reduced two-class pair.

use serde::{Deserialize, Serialize};

/// A single label/confidence pair returned by the remote classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub label: String,
    /// Confidence in `[0, 1]`.
    pub score: f64,
}

impl Prediction {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// Canonical (real, fake) probability pair.
///
/// Once normalized, `real + fake == 1.0` within floating tolerance. The pair
/// `(0.0, 0.0)` is the "no signal" sentinel: no recognised label was present
/// in the response. It is distinct from a genuine 50/50 split.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityPair {
    pub real: f64,
    pub fake: f64,
}

impl ProbabilityPair {
    /// The "no usable signal" sentinel.
    pub const NO_SIGNAL: Self = Self {
        real: 0.0,
        fake: 0.0,
    };

    pub fn new(real: f64, fake: f64) -> Self {
        Self { real, fake }
    }

    /// `true` for the `(0.0, 0.0)` sentinel.
    pub fn is_no_signal(&self) -> bool {
        self.real == 0.0 && self.fake == 0.0
    }

    pub fn total(&self) -> f64 {
        self.real + self.fake
    }

    /// Real probability as a whole percentage (0-100).
    pub fn real_percent(&self) -> u8 {
        to_percent(self.real)
    }

    /// Fake probability as a whole percentage (0-100).
    pub fn fake_percent(&self) -> u8 {
        to_percent(self.fake)
    }
}

impl Default for ProbabilityPair {
    fn default() -> Self {
        Self::NO_SIGNAL
    }
}

fn to_percent(p: f64) -> u8 {
    (p.clamp(0.0, 1.0) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_sentinel() {
        let pair = ProbabilityPair::default();
        assert!(pair.is_no_signal());
        assert_eq!(pair.total(), 0.0);
    }

    #[test]
    fn even_split_is_not_sentinel() {
        assert!(!ProbabilityPair::new(0.5, 0.5).is_no_signal());
    }

    #[test]
    fn percentages_round_to_whole_numbers() {
        let pair = ProbabilityPair::new(0.804, 0.196);
        assert_eq!(pair.real_percent(), 80);
        assert_eq!(pair.fake_percent(), 20);
    }

    #[test]
    fn percentages_clamp_out_of_range_values() {
        let pair = ProbabilityPair::new(1.2, -0.1);
        assert_eq!(pair.real_percent(), 100);
        assert_eq!(pair.fake_percent(), 0);
    }

    #[test]
    fn prediction_deserializes_from_provider_json() {
        let json = r#"{"label": "LABEL_1", "score": 0.93}"#;
        let parsed: Prediction = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, Prediction::new("LABEL_1", 0.93));
    }
}
