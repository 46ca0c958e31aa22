//! Fold predictions into a canonical (real, fake) probability pair.

use std::sync::LazyLock;

use tracing::debug;
use truthlens_core::{Prediction, ProbabilityPair};

use crate::labels::{LabelAliases, LabelClass};

static DEFAULT_REDUCER: LazyLock<ScoreReducer> = LazyLock::new(ScoreReducer::default);

/// Reduces predictions using a [`LabelAliases`] table.
///
/// Each bucket keeps the maximum score seen, not a sum: providers that emit
/// overlapping labels for the same class at different granularities would
/// otherwise be double-counted. The two maxima are then normalized to sum to
/// one. With no recognised label the result is
/// [`ProbabilityPair::NO_SIGNAL`].
#[derive(Debug, Clone, Default)]
pub struct ScoreReducer {
    aliases: LabelAliases,
}

impl ScoreReducer {
    pub fn new(aliases: LabelAliases) -> Self {
        Self { aliases }
    }

    pub fn aliases(&self) -> &LabelAliases {
        &self.aliases
    }

    pub fn reduce(&self, predictions: &[Prediction]) -> ProbabilityPair {
        let mut real = 0.0f64;
        let mut fake = 0.0f64;
        let mut ignored = 0usize;

        for prediction in predictions {
            match self.aliases.classify(&prediction.label) {
                LabelClass::Real => real = real.max(prediction.score),
                LabelClass::Fake => fake = fake.max(prediction.score),
                LabelClass::Ignored => ignored += 1,
            }
        }

        let pair = normalize(real, fake);
        debug!(
            predictions = predictions.len(),
            ignored,
            real = pair.real,
            fake = pair.fake,
            "reduced predictions"
        );
        pair
    }
}

/// Reduce with the built-in alias table.
pub fn reduce(predictions: &[Prediction]) -> ProbabilityPair {
    DEFAULT_REDUCER.reduce(predictions)
}

// A lone class normalizes to 1.0; both zero stays at the sentinel.
fn normalize(real: f64, fake: f64) -> ProbabilityPair {
    let total = real + fake;
    if total > 0.0 {
        ProbabilityPair::new(real / total, fake / total)
    } else {
        ProbabilityPair::NO_SIGNAL
    }
}
