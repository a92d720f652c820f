// src/analyzers/security.rs
//! Injection, XSS, hardcoded-secret, and weak-crypto detection.

use std::path::Path;

use crate::types::{Issue, IssueKind, Priority};

use super::catalog::{self, CompiledRule, LineRule};
use super::Analyzer;

const RULES: &[LineRule] = &[
    LineRule {
        kind: IssueKind::Security,
        category: "sql-injection",
        priority: Priority::Critical,
        pattern: r"query.*\+.*\$\{",
        also: None,
        path_contains: None,
        message: "SQL injection risk detected",
        suggestion: Some("Use parameterized queries"),
        cwe: Some("CWE-89"),
        redact: false,
    },
    LineRule {
        kind: IssueKind::Security,
        category: "sql-injection",
        priority: Priority::Critical,
        pattern: r"(?i)SELECT.*\+.*\$\{",
        also: None,
        path_contains: None,
        message: "SQL injection risk detected",
        suggestion: Some("Use parameterized queries"),
        cwe: Some("CWE-89"),
        redact: false,
    },
    LineRule {
        kind: IssueKind::Security,
        category: "sql-injection",
        priority: Priority::Critical,
        pattern: r"(?i)INSERT.*\+.*\$\{",
        also: None,
        path_contains: None,
        message: "SQL injection risk detected",
        suggestion: Some("Use parameterized queries"),
        cwe: Some("CWE-89"),
        redact: false,
    },
    LineRule {
        kind: IssueKind::Security,
        category: "sql-injection",
        priority: Priority::Critical,
        pattern: r"(?i)UPDATE.*\+.*\$\{",
        also: None,
        path_contains: None,
        message: "SQL injection risk detected",
        suggestion: Some("Use parameterized queries"),
        cwe: Some("CWE-89"),
        redact: false,
    },
    LineRule {
        kind: IssueKind::Security,
        category: "sql-injection",
        priority: Priority::Critical,
        pattern: r"(?i)DELETE.*\+.*\$\{",
        also: None,
        path_contains: None,
        message: "SQL injection risk detected",
        suggestion: Some("Use parameterized queries"),
        cwe: Some("CWE-89"),
        redact: false,
    },
    LineRule {
        kind: IssueKind::Security,
        category: "xss",
        priority: Priority::High,
        pattern: r"innerHTML.*\+",
        also: None,
        path_contains: None,
        message: "XSS risk detected",
        suggestion: Some("Sanitize before writing to the DOM"),
        cwe: Some("CWE-79"),
        redact: false,
    },
    LineRule {
        kind: IssueKind::Security,
        category: "xss",
        priority: Priority::High,
        pattern: r"document\.write.*\+",
        also: None,
        path_contains: None,
        message: "XSS risk detected",
        suggestion: Some("Sanitize before writing to the DOM"),
        cwe: Some("CWE-79"),
        redact: false,
    },
    LineRule {
        kind: IssueKind::Security,
        category: "xss",
        priority: Priority::High,
        pattern: r"\.html\(.*\+",
        also: None,
        path_contains: None,
        message: "XSS risk detected",
        suggestion: Some("Sanitize before writing to the DOM"),
        cwe: Some("CWE-79"),
        redact: false,
    },
    LineRule {
        kind: IssueKind::Security,
        category: "hardcoded-secret",
        priority: Priority::Critical,
        pattern: r#"(?i)password\s*[:=]\s*['"]"#,
        also: None,
        path_contains: None,
        message: "Potentially hardcoded secret detected",
        suggestion: Some("Move the value to environment configuration"),
        cwe: Some("CWE-798"),
        redact: true,
    },
    LineRule {
        kind: IssueKind::Security,
        category: "hardcoded-secret",
        priority: Priority::Critical,
        pattern: r#"(?i)api[_-]?key\s*[:=]\s*['"]"#,
        also: None,
        path_contains: None,
        message: "Potentially hardcoded secret detected",
        suggestion: Some("Move the value to environment configuration"),
        cwe: Some("CWE-798"),
        redact: true,
    },
    LineRule {
        kind: IssueKind::Security,
        category: "hardcoded-secret",
        priority: Priority::Critical,
        pattern: r#"(?i)secret\s*[:=]\s*['"]"#,
        also: None,
        path_contains: None,
        message: "Potentially hardcoded secret detected",
        suggestion: Some("Move the value to environment configuration"),
        cwe: Some("CWE-798"),
        redact: true,
    },
    LineRule {
        kind: IssueKind::Security,
        category: "hardcoded-secret",
        priority: Priority::Critical,
        pattern: r#"(?i)token\s*[:=]\s*['"]"#,
        also: None,
        path_contains: None,
        message: "Potentially hardcoded secret detected",
        suggestion: Some("Move the value to environment configuration"),
        cwe: Some("CWE-798"),
        redact: true,
    },
    LineRule {
        kind: IssueKind::Security,
        category: "weak-crypto",
        priority: Priority::Medium,
        pattern: r#"(?i)crypto\.createHash\(['"]md5"#,
        also: None,
        path_contains: None,
        message: "Weak cryptographic algorithm detected",
        suggestion: Some("Use SHA-256 or stronger"),
        cwe: Some("CWE-328"),
        redact: false,
    },
    LineRule {
        kind: IssueKind::Security,
        category: "weak-crypto",
        priority: Priority::Medium,
        pattern: r#"(?i)crypto\.createHash\(['"]sha1"#,
        also: None,
        path_contains: None,
        message: "Weak cryptographic algorithm detected",
        suggestion: Some("Use SHA-256 or stronger"),
        cwe: Some("CWE-328"),
        redact: false,
    },
];

pub struct SecurityAnalyzer {
    rules: Vec<CompiledRule>,
}

impl SecurityAnalyzer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: catalog::compile(RULES),
        }
    }
}

impl Default for SecurityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for SecurityAnalyzer {
    fn name(&self) -> &'static str {
        "security"
    }

    fn analyze_line(&self, line: &str, line_number: usize, path: &Path) -> Vec<Issue> {
        catalog::scan_line(&self.rules, line, line_number, path)
    }
}
