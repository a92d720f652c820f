// src/analyzers/quality.rs
//! Readability checks: overlong lines and temporary-code markers.

use std::path::Path;

use crate::types::{Issue, IssueKind, Priority};

use super::catalog::{self, CompiledRule, LineRule};
use super::Analyzer;

const MAX_LINE_CHARS: usize = 100;

const RULES: &[LineRule] = &[LineRule {
    kind: IssueKind::Quality,
    category: "todo",
    priority: Priority::Low,
    pattern: r"(?i)TODO|FIXME|HACK",
    also: None,
    path_contains: None,
    message: "Temporary code marker detected",
    suggestion: Some("Finish the implementation"),
    cwe: None,
    redact: false,
}];

pub struct QualityAnalyzer {
    rules: Vec<CompiledRule>,
}

impl QualityAnalyzer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: catalog::compile(RULES),
        }
    }
}

impl Default for QualityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for QualityAnalyzer {
    fn name(&self) -> &'static str {
        "quality"
    }

    fn analyze_line(&self, line: &str, line_number: usize, path: &Path) -> Vec<Issue> {
        let mut issues = Vec::new();
        if line.chars().count() > MAX_LINE_CHARS {
            issues.push(
                Issue::at_line(
                    IssueKind::Quality,
                    "long-line",
                    Priority::Low,
                    String::from("Line too long"),
                    path,
                    line_number,
                    line.trim().to_string(),
                )
                .with_suggestion("Split across multiple lines"),
            );
        }
        issues.extend(catalog::scan_line(&self.rules, line, line_number, path));
        issues
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn run(line: &str) -> Vec<Issue> {
        QualityAnalyzer::new().analyze_line(line, 1, &PathBuf::from("src/app.js"))
    }

    #[test]
    fn line_over_100_chars_is_flagged() {
        let long = "x".repeat(101);
        let issues = run(&long);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].category, "long-line");
    }

    #[test]
    fn line_of_exactly_100_chars_passes() {
        let exact = "x".repeat(100);
        assert!(run(&exact).is_empty());
    }

    #[test]
    fn todo_markers_are_low_priority() {
        for marker in ["// TODO: fix", "// fixme later", "// HACK around it"] {
            let issues = run(marker);
            assert_eq!(issues.len(), 1, "expected one issue for {marker:?}");
            assert_eq!(issues[0].category, "todo");
            assert_eq!(issues[0].priority, Priority::Low);
        }
    }
}
