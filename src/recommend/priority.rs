// src/recommend/priority.rs
//! Ordering for recommendations and issues.

use std::cmp::Ordering;

use crate::types::{Issue, Recommendation};

/// Order recommendations by priority tier, then confidence, and stamp each
/// one's rank. Sorting is stable, so generation order breaks remaining ties.
#[must_use]
pub fn prioritize(mut recommendations: Vec<Recommendation>) -> Vec<Recommendation> {
    recommendations.sort_by(|a, b| {
        b.priority
            .score()
            .cmp(&a.priority.score())
            .then_with(|| b.confidence.partial_cmp(&a.confidence).unwrap_or(Ordering::Equal))
    });
    for rec in &mut recommendations {
        rec.rank = rec.rank_score().round() as u32;
    }
    recommendations
}

/// The `limit` most severe issues, most severe first. Stable, so issues of
/// equal severity keep their detection order.
#[must_use]
pub fn top_issues(mut issues: Vec<Issue>, limit: usize) -> Vec<Issue> {
    issues.sort_by_key(|issue| std::cmp::Reverse(issue.priority.score()));
    issues.truncate(limit);
    issues
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{Effort, IssueKind, Priority, RecKind, Scope};
    use std::path::PathBuf;

    fn rec(title: &str, priority: Priority, confidence: f64) -> Recommendation {
        Recommendation {
            id: title.to_string(),
            kind: RecKind::Fix,
            category: String::from("sql-injection"),
            priority,
            title: title.to_string(),
            description: String::new(),
            implementation: String::new(),
            impact: String::new(),
            effort: Effort::Medium,
            confidence,
            scope: Scope::Global,
            line: None,
            rank: 0,
            created_at: 0,
        }
    }

    fn issue(message: &str, priority: Priority) -> Issue {
        Issue::file_level(
            IssueKind::Quality,
            "todo",
            priority,
            message.to_string(),
            &PathBuf::from("a.js"),
        )
    }

    #[test]
    fn severity_outranks_confidence() {
        let ordered = prioritize(vec![
            rec("medium-sure", Priority::Medium, 1.0),
            rec("critical-unsure", Priority::Critical, 0.7),
        ]);
        assert_eq!(ordered[0].title, "critical-unsure");
    }

    #[test]
    fn confidence_breaks_ties_within_a_tier() {
        let ordered = prioritize(vec![
            rec("first", Priority::High, 0.7),
            rec("second", Priority::High, 0.9),
            rec("third", Priority::High, 0.7),
        ]);
        assert_eq!(ordered[0].title, "second");
        // Stable: equal (priority, confidence) keeps generation order.
        assert_eq!(ordered[1].title, "first");
        assert_eq!(ordered[2].title, "third");
    }

    #[test]
    fn rank_is_stamped_from_the_scoring_formula() {
        let ordered = prioritize(vec![rec("only", Priority::High, 0.8)]);
        // 75 + 0.8 * 20 = 91
        assert_eq!(ordered[0].rank, 91);
    }

    #[test]
    fn top_issues_takes_the_most_severe_first() {
        let picked = top_issues(
            vec![
                issue("low", Priority::Low),
                issue("crit-a", Priority::Critical),
                issue("high", Priority::High),
                issue("crit-b", Priority::Critical),
                issue("medium", Priority::Medium),
            ],
            3,
        );
        let messages: Vec<&str> = picked.iter().map(|i| i.message.as_str()).collect();
        assert_eq!(messages, ["crit-a", "crit-b", "high"]);
    }

    #[test]
    fn top_issues_with_large_limit_returns_everything() {
        let picked = top_issues(vec![issue("only", Priority::Low)], 10);
        assert_eq!(picked.len(), 1);
    }
}
