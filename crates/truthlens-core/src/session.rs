//! Single-slot, caller-owned cache of the last analysis outcome.
//!
//! Each session owns its own [`SessionResultCache`]; nothing here is
//! process-wide, so independent sessions never observe each other's results.
//! The cache has three display states: no result yet, a live
//! [`Outcome::Success`], or a live [`Outcome::Failure`].

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::outcome::Outcome;

/// The outcome currently on display, with the time it was stored.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveResult {
    pub outcome: Outcome,
    pub stored_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct SessionResultCache {
    live: Option<LiveResult>,
}

impl SessionResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the live result with `outcome`. Nothing from the previous
    /// result is carried over.
    pub fn store(&mut self, outcome: Outcome) -> &LiveResult {
        debug!(
            success = outcome.is_success(),
            replaced = self.live.is_some(),
            "storing session result"
        );
        self.live.insert(LiveResult {
            outcome,
            stored_at: Utc::now(),
        })
    }

    /// The live result, or `None` when nothing has been analyzed since the
    /// session started or was last cleared.
    pub fn current(&self) -> Option<&LiveResult> {
        self.live.as_ref()
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.live.as_ref().map(|r| &r.outcome)
    }

    /// Reset to "no result". Returns the result that was dropped, if any.
    pub fn clear(&mut self) -> Option<LiveResult> {
        let dropped = self.live.take();
        debug!(had_result = dropped.is_some(), "cleared session result");
        dropped
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{ErrorKind, VerdictKind};
    use crate::prediction::ProbabilityPair;

    fn uncertain_success() -> Outcome {
        Outcome::success(ProbabilityPair::NO_SIGNAL, VerdictKind::Uncertain)
    }

    #[test]
    fn starts_empty() {
        let cache = SessionResultCache::new();
        assert!(cache.is_empty());
        assert!(cache.current().is_none());
        assert!(cache.outcome().is_none());
    }

    #[test]
    fn store_replaces_previous_result() {
        let mut cache = SessionResultCache::new();
        cache.store(Outcome::failure(ErrorKind::ModelWarming, "loading"));
        cache.store(Outcome::success(
            ProbabilityPair::new(0.9, 0.1),
            VerdictKind::Authentic,
        ));

        assert_eq!(
            cache.outcome(),
            Some(&Outcome::success(
                ProbabilityPair::new(0.9, 0.1),
                VerdictKind::Authentic
            ))
        );
    }

    #[test]
    fn store_returns_the_live_entry() {
        let mut cache = SessionResultCache::new();
        let before = Utc::now();
        let live = cache.store(uncertain_success());
        assert_eq!(live.outcome, uncertain_success());
        assert!(live.stored_at >= before);
    }

    #[test]
    fn clear_is_distinct_from_failure_and_uncertain() {
        let mut cache = SessionResultCache::new();

        cache.store(uncertain_success());
        assert!(!cache.is_empty());

        let dropped = cache.clear().expect("a result was live");
        assert_eq!(dropped.outcome, uncertain_success());
        assert!(cache.is_empty());
        assert!(cache.outcome().is_none());
    }

    #[test]
    fn clear_on_empty_cache_is_a_no_op() {
        let mut cache = SessionResultCache::new();
        assert!(cache.clear().is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn sessions_are_independent() {
        let mut a = SessionResultCache::new();
        let b = SessionResultCache::new();
        a.store(uncertain_success());
        assert!(!a.is_empty());
        assert!(b.is_empty());
    }
}
