//! Three-way verdict from a normalized probability pair.

use truthlens_core::{ProbabilityPair, VerdictKind};

/// Probability a class must reach to be reported as the verdict.
///
/// Two normalized classes cannot both reach 0.65, so at most one check can
/// pass. An even 0.5/0.5 split falls through to [`VerdictKind::Uncertain`].
pub const VERDICT_THRESHOLD: f64 = 0.65;

/// Map a pair to a verdict. Pure and total.
///
/// The real-leaning check runs first. The no-signal sentinel `(0.0, 0.0)`
/// is [`VerdictKind::Uncertain`].
pub fn classify(pair: ProbabilityPair) -> VerdictKind {
    if pair.real >= VERDICT_THRESHOLD {
        VerdictKind::Authentic
    } else if pair.fake >= VERDICT_THRESHOLD {
        VerdictKind::Fake
    } else {
        VerdictKind::Uncertain
    }
}
