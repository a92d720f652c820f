use serde::Serialize;
use std::path::PathBuf;

use super::Priority;
use crate::utils::compute_sha256;

/// The broad shape of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecKind {
    /// Direct remediation of a detected issue.
    Fix,
    Security,
    Optimization,
    Preventive,
    Architecture,
}

impl RecKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Fix => "fix",
            Self::Security => "security",
            Self::Optimization => "optimization",
            Self::Preventive => "preventive",
            Self::Architecture => "architecture",
        }
    }
}

/// Rough implementation cost, used as a ranking tiebreaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Effort {
    Low,
    Medium,
    High,
}

impl Effort {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Whether a recommendation targets one file or the project at large.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "scope", content = "path")]
pub enum Scope {
    File(PathBuf),
    Global,
}

/// An actionable suggestion produced by the advisor or a file aggregator.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    /// Stable content hash of file, line, and title. Feedback identity only;
    /// duplicates across generators keep distinct instances.
    pub id: String,
    pub kind: RecKind,
    /// Problem area, e.g. "security" or "maintainability".
    pub category: String,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    /// How to implement the suggestion.
    pub implementation: String,
    /// Expected payoff.
    pub impact: String,
    pub effort: Effort,
    /// 0.0 to 1.0.
    pub confidence: f64,
    pub scope: Scope,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// Assigned by the ranking pass; recomputed on every sort.
    pub rank: u32,
    pub created_at: u64,
}

impl Recommendation {
    /// Derives the stable id from the scope, line, and title.
    #[must_use]
    pub fn make_id(scope: &Scope, line: Option<usize>, title: &str) -> String {
        let path = match scope {
            Scope::File(p) => p.to_string_lossy().into_owned(),
            Scope::Global => String::from("global"),
        };
        let seed = format!("{path}:{}:{title}", line.unwrap_or(0));
        let mut hash = compute_sha256(&seed);
        hash.truncate(16);
        hash
    }

    /// Composite rank: tier score, confidence spread, then domain nudges.
    #[must_use]
    pub fn rank_score(&self) -> f64 {
        let mut score = f64::from(self.priority.score());
        score += self.confidence * 20.0;
        if self.kind == RecKind::Security {
            score += 10.0;
        }
        if self.effort == Effort::Low {
            score += 5.0;
        }
        score
    }

    /// Aggregation key consulted by the learning store.
    #[must_use]
    pub fn pattern_key(&self) -> String {
        format!("{}_{}", self.category, self.kind.label())
    }

    #[must_use]
    pub fn file_path(&self) -> Option<&PathBuf> {
        match &self.scope {
            Scope::File(p) => Some(p),
            Scope::Global => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample(kind: RecKind, priority: Priority, effort: Effort) -> Recommendation {
        Recommendation {
            id: String::from("x"),
            kind,
            category: String::from("security"),
            priority,
            title: String::from("t"),
            description: String::new(),
            implementation: String::new(),
            impact: String::new(),
            effort,
            confidence: 0.8,
            scope: Scope::Global,
            line: None,
            rank: 0,
            created_at: 0,
        }
    }

    #[test]
    fn id_is_stable_for_same_inputs() {
        let scope = Scope::File(PathBuf::from("src/auth.js"));
        let a = Recommendation::make_id(&scope, Some(10), "Fix injection");
        let b = Recommendation::make_id(&scope, Some(10), "Fix injection");
        assert_eq!(a, b);
        assert_eq!(a.len(), 16);
    }

    #[test]
    fn id_differs_by_title() {
        let a = Recommendation::make_id(&Scope::Global, None, "Split module");
        let b = Recommendation::make_id(&Scope::Global, None, "Add validation");
        assert_ne!(a, b);
    }

    #[test]
    fn rank_prefers_security_at_equal_tier() {
        let plain = sample(RecKind::Optimization, Priority::High, Effort::Medium);
        let security = sample(RecKind::Security, Priority::High, Effort::Medium);
        assert!(security.rank_score() > plain.rank_score());
    }

    #[test]
    fn low_effort_breaks_ties() {
        let costly = sample(RecKind::Preventive, Priority::Medium, Effort::High);
        let cheap = sample(RecKind::Preventive, Priority::Medium, Effort::Low);
        assert!(cheap.rank_score() > costly.rank_score());
    }

    #[test]
    fn pattern_key_joins_category_and_kind() {
        let rec = sample(RecKind::Fix, Priority::High, Effort::Low);
        assert_eq!(rec.pattern_key(), "security_fix");
    }
}
