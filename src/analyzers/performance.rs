// src/analyzers/performance.rs
//! Slow-path detection: indexed loops, blocking calls, leftover debug output.

use std::path::Path;

use crate::types::{Issue, IssueKind, Priority};

use super::catalog::{self, CompiledRule, LineRule};
use super::Analyzer;

const RULES: &[LineRule] = &[
    LineRule {
        kind: IssueKind::Performance,
        category: "inefficient-loop",
        priority: Priority::Medium,
        pattern: r"for\s*\(.*\.length",
        also: Some(r"\+\+"),
        path_contains: None,
        message: "Potentially inefficient loop detected",
        suggestion: Some("Consider forEach() or map()"),
        cwe: None,
        redact: false,
    },
    LineRule {
        kind: IssueKind::Performance,
        category: "sync-operation",
        priority: Priority::High,
        pattern: r"\.sync\(|Sync\(",
        also: None,
        path_contains: None,
        message: "Synchronous operation detected",
        suggestion: Some("Use the asynchronous version"),
        cwe: None,
        redact: false,
    },
    LineRule {
        kind: IssueKind::Performance,
        category: "debug-code",
        priority: Priority::Low,
        pattern: r"console\.log",
        also: None,
        path_contains: Some("production"),
        message: "console.log in production code",
        suggestion: Some("Use a proper logger"),
        cwe: None,
        redact: false,
    },
];

pub struct PerformanceAnalyzer {
    rules: Vec<CompiledRule>,
}

impl PerformanceAnalyzer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: catalog::compile(RULES),
        }
    }
}

impl Default for PerformanceAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for PerformanceAnalyzer {
    fn name(&self) -> &'static str {
        "performance"
    }

    fn analyze_line(&self, line: &str, line_number: usize, path: &Path) -> Vec<Issue> {
        catalog::scan_line(&self.rules, line, line_number, path)
    }
}
