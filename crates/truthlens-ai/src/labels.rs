//! Label alias table for two-class authenticity models.
//!
//! Providers do not agree on label vocabulary: some say `REAL`/`FAKE`, some
//! `LABEL_1`/`LABEL_0`, some `POSITIVE`/`NEGATIVE`. Every label is folded into
//! one of three buckets by case-insensitive matching against this table.
//! The table is data; supporting a new provider convention means adding an
//! alias, not a branch.

/// Substrings that mark a label as real-leaning (e.g. `REAL`, `Realism`).
pub const REAL_SUBSTRINGS: &[&str] = &["REAL"];

/// Whole labels that mark a label as real-leaning.
pub const REAL_EXACT: &[&str] = &["LABEL_1", "POSITIVE", "TRUE", "LEGIT"];

/// Substrings that mark a label as fake-leaning (e.g. `FAKE`, `deepfake`).
pub const FAKE_SUBSTRINGS: &[&str] = &["FAKE"];

/// Whole labels that mark a label as fake-leaning.
pub const FAKE_EXACT: &[&str] = &["LABEL_0", "NEGATIVE", "FALSE"];

/// Bucket a label falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelClass {
    Real,
    Fake,
    /// Neither accumulator is updated.
    Ignored,
}

impl LabelClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Real => "real",
            Self::Fake => "fake",
            Self::Ignored => "ignored",
        }
    }
}

/// Alias table consumed by the score reducer.
///
/// All entries are stored uppercase. Real-leaning rules are consulted first,
/// so a label matching both classes counts as real.
#[derive(Debug, Clone)]
pub struct LabelAliases {
    real_substrings: Vec<String>,
    real_exact: Vec<String>,
    fake_substrings: Vec<String>,
    fake_exact: Vec<String>,
}

impl Default for LabelAliases {
    fn default() -> Self {
        Self {
            real_substrings: upper_all(REAL_SUBSTRINGS),
            real_exact: upper_all(REAL_EXACT),
            fake_substrings: upper_all(FAKE_SUBSTRINGS),
            fake_exact: upper_all(FAKE_EXACT),
        }
    }
}

impl LabelAliases {
    /// Add a whole-label alias for the real-leaning class.
    pub fn with_real_alias(mut self, alias: &str) -> Self {
        self.real_exact.push(normalize(alias));
        self
    }

    /// Add a whole-label alias for the fake-leaning class.
    pub fn with_fake_alias(mut self, alias: &str) -> Self {
        self.fake_exact.push(normalize(alias));
        self
    }

    /// Classify one label. Matching trims whitespace and ignores case.
    pub fn classify(&self, label: &str) -> LabelClass {
        let label = normalize(label);

        if matches_any(&label, &self.real_substrings, &self.real_exact) {
            LabelClass::Real
        } else if matches_any(&label, &self.fake_substrings, &self.fake_exact) {
            LabelClass::Fake
        } else {
            LabelClass::Ignored
        }
    }
}

fn matches_any(label: &str, substrings: &[String], exact: &[String]) -> bool {
    substrings.iter().any(|s| label.contains(s.as_str())) || exact.iter().any(|e| e == label)
}

fn normalize(label: &str) -> String {
    label.trim().to_uppercase()
}

fn upper_all(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| normalize(v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class_of(label: &str) -> LabelClass {
        LabelAliases::default().classify(label)
    }

    #[test]
    fn substring_matches() {
        assert_eq!(class_of("REAL"), LabelClass::Real);
        assert_eq!(class_of("Realism"), LabelClass::Real);
        assert_eq!(class_of("FAKE"), LabelClass::Fake);
        assert_eq!(class_of("Deepfake"), LabelClass::Fake);
    }

    #[test]
    fn exact_aliases() {
        for label in ["LABEL_1", "POSITIVE", "TRUE", "LEGIT"] {
            assert_eq!(class_of(label), LabelClass::Real, "{label}");
        }
        for label in ["LABEL_0", "NEGATIVE", "FALSE"] {
            assert_eq!(class_of(label), LabelClass::Fake, "{label}");
        }
    }

    #[test]
    fn matching_ignores_case_and_whitespace() {
        assert_eq!(class_of("real"), LabelClass::Real);
        assert_eq!(class_of(" label_0 "), LabelClass::Fake);
        assert_eq!(class_of("Positive"), LabelClass::Real);
    }

    #[test]
    fn exact_aliases_do_not_match_as_substrings() {
        assert_eq!(class_of("LABEL_10"), LabelClass::Ignored);
        assert_eq!(class_of("UNTRUE"), LabelClass::Ignored);
        assert_eq!(class_of("NEGATIVELY"), LabelClass::Ignored);
    }

    #[test]
    fn unknown_labels_are_ignored() {
        assert_eq!(class_of("NEUTRAL"), LabelClass::Ignored);
        assert_eq!(class_of("LABEL_2"), LabelClass::Ignored);
        assert_eq!(class_of(""), LabelClass::Ignored);
    }

    #[test]
    fn real_wins_when_both_match() {
        assert_eq!(class_of("REAL_OR_FAKE"), LabelClass::Real);
    }

    #[test]
    fn custom_aliases_are_additive() {
        let aliases = LabelAliases::default()
            .with_real_alias("human")
            .with_fake_alias("Machine");

        assert_eq!(aliases.classify("HUMAN"), LabelClass::Real);
        assert_eq!(aliases.classify("machine"), LabelClass::Fake);
        // Built-in entries still apply.
        assert_eq!(aliases.classify("LABEL_0"), LabelClass::Fake);
        assert_eq!(aliases.classify("REAL"), LabelClass::Real);
    }

    #[test]
    fn as_str_names() {
        assert_eq!(LabelClass::Real.as_str(), "real");
        assert_eq!(LabelClass::Fake.as_str(), "fake");
        assert_eq!(LabelClass::Ignored.as_str(), "ignored");
    }
}
