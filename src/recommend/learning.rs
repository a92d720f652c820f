// src/recommend/learning.rs
//! Feedback memory: which recommendation patterns keep coming up, and how
//! implementations of them worked out.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::types::Recommendation;
use crate::utils::now_millis;

/// Aggregate stats for one `category_kind` pattern.
#[derive(Debug, Clone, Serialize)]
pub struct PatternStats {
    /// How many times a recommendation with this pattern was surfaced.
    pub count: usize,
    /// Prior-weighted success rate, starting from an uninformed 0.5.
    pub success_rate: f64,
    successes: usize,
    samples: usize,
}

impl PatternStats {
    fn new() -> Self {
        Self {
            count: 0,
            success_rate: 0.5,
            successes: 0,
            samples: 0,
        }
    }

    fn record(&mut self, success: bool) {
        self.samples += 1;
        if success {
            self.successes += 1;
        }
        // One phantom sample at 0.5 keeps early rates from saturating.
        #[allow(clippy::cast_precision_loss)]
        {
            self.success_rate = (0.5 + self.successes as f64) / (1.0 + self.samples as f64);
        }
    }
}

/// One piece of user feedback about an implemented recommendation.
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackRecord {
    pub recommendation_id: String,
    pub success: bool,
    pub note: Option<String>,
    pub recorded_at: u64,
}

/// In-memory learning state. Surfaced recommendations seed pattern counts;
/// feedback updates success rates and marks trigger sets as having history,
/// which later nudges confidence for entries with the same triggers.
#[derive(Debug, Default)]
pub struct LearningStore {
    patterns: BTreeMap<String, PatternStats>,
    feedback: Vec<FeedbackRecord>,
    rec_keys: BTreeMap<String, RecKeys>,
    implemented_triggers: BTreeSet<String>,
}

#[derive(Debug, Clone)]
struct RecKeys {
    pattern: String,
    trigger: Option<String>,
}

impl LearningStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember which pattern and trigger set produced a recommendation, so
    /// later feedback keyed by id can be attributed.
    pub fn register(&mut self, id: &str, pattern_key: String, trigger_key: Option<String>) {
        self.rec_keys.insert(
            id.to_string(),
            RecKeys {
                pattern: pattern_key,
                trigger: trigger_key,
            },
        );
    }

    /// Seed or bump the pattern counter for every surfaced recommendation.
    pub fn learn(&mut self, recommendations: &[Recommendation]) {
        for rec in recommendations {
            self.patterns
                .entry(rec.pattern_key())
                .or_insert_with(PatternStats::new)
                .count += 1;
        }
    }

    /// Record implementation feedback for a previously surfaced
    /// recommendation. Unknown ids still append to the feedback log.
    pub fn record(&mut self, recommendation_id: &str, success: bool, note: Option<String>) {
        self.feedback.push(FeedbackRecord {
            recommendation_id: recommendation_id.to_string(),
            success,
            note,
            recorded_at: now_millis(),
        });
        if let Some(keys) = self.rec_keys.get(recommendation_id).cloned() {
            self.patterns
                .entry(keys.pattern)
                .or_insert_with(PatternStats::new)
                .record(success);
            if let Some(trigger) = keys.trigger {
                self.implemented_triggers.insert(trigger);
            }
        }
    }

    /// True once any recommendation built from this trigger set has received
    /// feedback.
    #[must_use]
    pub fn has_history(&self, trigger_key: &str) -> bool {
        self.implemented_triggers.contains(trigger_key)
    }

    /// Current success rate for a pattern, 0.5 when nothing is known.
    #[must_use]
    pub fn success_rate(&self, pattern_key: &str) -> f64 {
        self.patterns
            .get(pattern_key)
            .map_or(0.5, |stats| stats.success_rate)
    }

    #[must_use]
    pub fn pattern_count(&self, pattern_key: &str) -> usize {
        self.patterns.get(pattern_key).map_or(0, |stats| stats.count)
    }

    #[must_use]
    pub fn feedback_log(&self) -> &[FeedbackRecord] {
        &self.feedback
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::types::{Effort, Priority, RecKind, Recommendation, Scope};

    fn rec(category: &str, kind: RecKind) -> Recommendation {
        Recommendation {
            id: Recommendation::make_id(&Scope::Global, None, "t"),
            kind,
            category: category.to_string(),
            priority: Priority::High,
            title: String::from("t"),
            description: String::new(),
            implementation: String::new(),
            impact: String::new(),
            effort: Effort::Medium,
            confidence: 0.8,
            scope: Scope::Global,
            line: None,
            rank: 0,
            created_at: 0,
        }
    }

    #[test]
    fn surfaced_recommendations_seed_pattern_counts() {
        let mut store = LearningStore::new();
        store.learn(&[
            rec("sql-injection", RecKind::Fix),
            rec("sql-injection", RecKind::Fix),
            rec("complexity", RecKind::Optimization),
        ]);
        assert_eq!(store.pattern_count("sql-injection_fix"), 2);
        assert_eq!(store.pattern_count("complexity_optimization"), 1);
        assert_eq!(store.pattern_count("never-seen_fix"), 0);
        assert_eq!(store.success_rate("sql-injection_fix"), 0.5);
    }

    #[test]
    fn feedback_moves_the_success_rate_from_its_prior() {
        let mut store = LearningStore::new();
        store.register("abc", String::from("sql-injection_fix"), None);
        store.record("abc", true, None);
        // (0.5 + 1) / (1 + 1)
        assert_eq!(store.success_rate("sql-injection_fix"), 0.75);
        store.record("abc", false, Some(String::from("regressed")));
        // (0.5 + 1) / (1 + 2)
        assert_eq!(store.success_rate("sql-injection_fix"), 0.5);
        assert_eq!(store.feedback_log().len(), 2);
    }

    #[test]
    fn trigger_history_appears_only_after_feedback() {
        let mut store = LearningStore::new();
        store.register(
            "abc",
            String::from("sql-injection_fix"),
            Some(String::from("sql,injection")),
        );
        assert!(!store.has_history("sql,injection"));
        store.record("abc", true, None);
        assert!(store.has_history("sql,injection"));
        assert!(!store.has_history("password,hardcoded"));
    }

    #[test]
    fn unknown_ids_are_logged_but_change_no_stats() {
        let mut store = LearningStore::new();
        store.record("never-registered", true, None);
        assert_eq!(store.feedback_log().len(), 1);
        assert_eq!(store.success_rate("anything_fix"), 0.5);
        assert!(!store.has_history("sql,injection"));
    }
}
