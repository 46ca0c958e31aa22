//! Shape detection for classifier payloads.
//!
//! Hosted text-classification endpoints answer in one of two shapes:
//!
//! - flat: `[{"label": "REAL", "score": 0.9}, ...]`
//! - nested: `[[{"label": "REAL", "score": 0.9}, ...]]`
//!
//! Detection looks only at the first element. Anything else is
//! [`ResponseShape::Unrecognized`] and yields no predictions; the reducer
//! turns that into the no-signal sentinel rather than failing the call.

use serde_json::Value;
use tracing::debug;
use truthlens_core::Prediction;

/// Discriminated view over a decoded payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResponseShape<'a> {
    /// Outer list whose first element is itself a list; holds that inner list.
    Nested(&'a [Value]),
    /// Outer list of label/score objects.
    Flat(&'a [Value]),
    Unrecognized,
}

impl<'a> ResponseShape<'a> {
    pub fn detect(raw: &'a Value) -> Self {
        let Some(items) = raw.as_array() else {
            return Self::Unrecognized;
        };
        match items.first() {
            Some(Value::Array(inner)) => Self::Nested(inner.as_slice()),
            Some(Value::Object(_)) => Self::Flat(items.as_slice()),
            _ => Self::Unrecognized,
        }
    }

    /// The candidate prediction entries for this shape.
    pub fn entries(&self) -> &'a [Value] {
        match self {
            Self::Nested(entries) | Self::Flat(entries) => entries,
            Self::Unrecognized => &[],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Nested(_) => "nested",
            Self::Flat(_) => "flat",
            Self::Unrecognized => "unrecognized",
        }
    }
}

/// Extract predictions from a decoded payload of any shape.
///
/// Entries without a string `label` and a numeric `score` are skipped.
/// Scores are clamped into `[0, 1]`.
pub fn parse(raw: &Value) -> Vec<Prediction> {
    let shape = ResponseShape::detect(raw);
    let predictions: Vec<Prediction> = shape
        .entries()
        .iter()
        .filter_map(prediction_from)
        .collect();

    debug!(
        shape = shape.name(),
        entries = shape.entries().len(),
        predictions = predictions.len(),
        "parsed classifier response"
    );
    predictions
}

/// Error text from a provider that answers 2xx with `{"error": ...}`.
pub fn embedded_error(raw: &Value) -> Option<String> {
    let error = raw.as_object()?.get("error")?;
    Some(match error {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

fn prediction_from(entry: &Value) -> Option<Prediction> {
    let obj = entry.as_object()?;
    let label = obj.get("label")?.as_str()?;
    let score = obj.get("score")?.as_f64()?;
    if !score.is_finite() {
        return None;
    }
    Some(Prediction::new(label, score.clamp(0.0, 1.0)))
}
