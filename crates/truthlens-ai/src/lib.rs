//! Reduction layer: raw classifier payload → predictions → probability pair → verdict.

pub mod classifier;
pub mod labels;
pub mod reducer;
pub mod shape;

pub use classifier::{VERDICT_THRESHOLD, classify};
pub use labels::{LabelAliases, LabelClass};
pub use reducer::{ScoreReducer, reduce};
pub use shape::{ResponseShape, embedded_error, parse};

use serde_json::Value;
use truthlens_core::{ProbabilityPair, VerdictKind};

/// Run a decoded success payload through parse → reduce → classify.
pub fn evaluate(raw: &Value) -> (ProbabilityPair, VerdictKind) {
    let predictions = parse(raw);
    let pair = reduce(&predictions);
    (pair, classify(pair))
}
