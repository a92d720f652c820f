// src/analysis/metrics.rs
//! Per-file metrics and the threshold recommendations derived from them.

use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::Thresholds;
use crate::types::{Effort, FileMetrics, Priority, RecKind, Recommendation, Scope};
use crate::utils::now_millis;

static BRANCH_KEYWORDS: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"\b(?:if|else|while|for|switch|case|catch|try)\b").ok()
});

/// Approximate cyclomatic complexity: 1 plus one per whole-word
/// control-flow keyword anywhere in the file.
#[must_use]
pub fn complexity(content: &str) -> usize {
    let matches = BRANCH_KEYWORDS
        .as_ref()
        .map_or(0, |re| re.find_iter(content).count());
    1 + matches
}

/// Counts distinct trimmed lines (length at least 6) that occur more than
/// once. A line repeated many times still counts once, at its second
/// occurrence.
#[must_use]
pub fn duplicate_lines(content: &str) -> usize {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut duplicates = 0;
    for line in content.split('\n') {
        let trimmed = line.trim();
        if trimmed.chars().count() <= 5 {
            continue;
        }
        let count = counts.entry(trimmed).or_insert(0);
        *count += 1;
        if *count == 2 {
            duplicates += 1;
        }
    }
    duplicates
}

/// Computes the full metric set for one file.
#[must_use]
pub fn compute(content: &str) -> FileMetrics {
    FileMetrics {
        line_count: content.split('\n').count(),
        complexity: complexity(content),
        duplicate_lines: duplicate_lines(content),
        byte_size: content.len(),
    }
}

/// Threshold recommendations from metrics alone, independent of the
/// knowledge-based advisor.
#[must_use]
pub fn local_recommendations(
    path: &Path,
    metrics: &FileMetrics,
    thresholds: &Thresholds,
) -> Vec<Recommendation> {
    let mut recs = Vec::new();
    let scope = Scope::File(path.to_path_buf());

    if metrics.line_count > thresholds.split_file_lines {
        recs.push(local_rec(
            &scope,
            Priority::Medium,
            Effort::High,
            "Split file into smaller modules",
            format!(
                "Large file ({} lines) - consider splitting into smaller modules",
                metrics.line_count
            ),
            "Identify cohesive sections and move each into its own module",
        ));
    }
    if metrics.complexity > thresholds.max_complexity {
        recs.push(local_rec(
            &scope,
            Priority::High,
            Effort::Medium,
            "Reduce complexity",
            format!(
                "High complexity ({}) - simplify the logic",
                metrics.complexity
            ),
            "Extract branches into named helper functions",
        ));
    }
    if metrics.duplicate_lines > thresholds.max_duplicate_lines {
        recs.push(local_rec(
            &scope,
            Priority::Medium,
            Effort::Medium,
            "Extract common code",
            format!(
                "Duplicated code detected ({} repeated lines) - extract shared helpers",
                metrics.duplicate_lines
            ),
            "Move repeated fragments into shared functions",
        ));
    }
    recs
}

fn local_rec(
    scope: &Scope,
    priority: Priority,
    effort: Effort,
    title: &str,
    description: String,
    implementation: &str,
) -> Recommendation {
    Recommendation {
        id: Recommendation::make_id(scope, None, title),
        kind: RecKind::Optimization,
        category: String::from("maintainability"),
        priority,
        title: title.to_string(),
        description,
        implementation: implementation.to_string(),
        impact: String::from("Better readability and maintainability"),
        effort,
        confidence: 1.0,
        scope: scope.clone(),
        line: None,
        rank: 0,
        created_at: now_millis(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn complexity_of_straight_line_code_is_one() {
        assert_eq!(complexity("const x = 1;\nconst y = 2;\n"), 1);
    }

    #[test]
    fn complexity_counts_whole_words_only() {
        // "forEach" and "gift" must not count; "else if" counts twice.
        let content = "items.forEach(f);\nconst gift = 1;\nif (a) {} else if (b) {}\n";
        assert_eq!(complexity(content), 1 + 3);
    }

    #[test]
    fn adding_an_if_raises_complexity_by_one() {
        let base = "if (a) { x(); }\n";
        let more = "if (a) { x(); }\nif (b) { y(); }\n";
        assert_eq!(complexity(more), complexity(base) + 1);
    }

    #[test]
    fn duplicate_count_increments_once_per_distinct_line() {
        let content = "abcdef\nabcdef\nabcdef\nxyzxyz\n";
        assert_eq!(duplicate_lines(content), 1);
    }

    #[test]
    fn short_lines_never_count_as_duplicates() {
        assert_eq!(duplicate_lines("}\n}\n}\nabc\nabc\n"), 0);
    }

    #[test]
    fn two_distinct_repeated_lines_count_twice() {
        let content = "let a = 1;\nlet b = 2;\nlet a = 1;\nlet b = 2;\n";
        assert_eq!(duplicate_lines(content), 2);
    }

    #[test]
    fn line_count_matches_newline_splits() {
        assert_eq!(compute("a\nb\nc").line_count, 3);
        assert_eq!(compute("a\nb\nc\n").line_count, 4);
        assert_eq!(compute("").line_count, 1);
    }

    #[test]
    fn all_three_thresholds_fire_together() {
        let thresholds = Thresholds::default();
        let metrics = FileMetrics {
            line_count: 600,
            complexity: 25,
            duplicate_lines: 8,
            byte_size: 0,
        };
        let recs = local_recommendations(&PathBuf::from("big.js"), &metrics, &thresholds);
        assert_eq!(recs.len(), 3);
        let titles: Vec<_> = recs.iter().map(|r| r.title.as_str()).collect();
        assert!(titles.contains(&"Split file into smaller modules"));
        assert!(titles.contains(&"Reduce complexity"));
        assert!(titles.contains(&"Extract common code"));
        assert!(recs
            .iter()
            .any(|r| r.title == "Reduce complexity" && r.priority == Priority::High));
    }

    #[test]
    fn thresholds_are_strict_inequalities() {
        let thresholds = Thresholds::default();
        let metrics = FileMetrics {
            line_count: 500,
            complexity: 20,
            duplicate_lines: 5,
            byte_size: 0,
        };
        let recs = local_recommendations(&PathBuf::from("ok.js"), &metrics, &thresholds);
        assert!(recs.is_empty());
    }
}
