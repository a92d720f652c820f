// src/analyzers/catalog.rs
//! Declarative line-rule tables and their interpreter.
//!
//! Rules are plain data; dispatch is one loop. Each analyzer owns a table,
//! compiled once at construction.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::{Issue, IssueKind, Priority};

/// One line-matching detection rule.
pub struct LineRule {
    pub kind: IssueKind,
    pub category: &'static str,
    pub priority: Priority,
    pub pattern: &'static str,
    /// Second pattern that must also match, for conjunctive rules.
    pub also: Option<&'static str>,
    /// Fire only when the path contains this fragment.
    pub path_contains: Option<&'static str>,
    pub message: &'static str,
    pub suggestion: Option<&'static str>,
    /// CWE identifier for rules detecting a recognized weakness class.
    pub cwe: Option<&'static str>,
    /// Mask quoted spans in the reported snippet.
    pub redact: bool,
}

/// A rule with its patterns compiled.
pub struct CompiledRule {
    rule: &'static LineRule,
    pattern: Regex,
    also: Option<Regex>,
}

/// Compiles a rule table. A rule whose pattern fails to compile is dropped
/// rather than aborting construction.
#[must_use]
pub fn compile(rules: &'static [LineRule]) -> Vec<CompiledRule> {
    rules
        .iter()
        .filter_map(|rule| {
            let pattern = Regex::new(rule.pattern).ok()?;
            let also = match rule.also {
                Some(p) => Some(Regex::new(p).ok()?),
                None => None,
            };
            Some(CompiledRule {
                rule,
                pattern,
                also,
            })
        })
        .collect()
}

/// Runs every compiled rule against one line. Each matching rule yields its
/// own issue, so a line can legitimately report twice in the same category.
#[must_use]
pub fn scan_line(
    rules: &[CompiledRule],
    line: &str,
    line_number: usize,
    path: &Path,
) -> Vec<Issue> {
    let mut issues = Vec::new();
    for compiled in rules {
        let rule = compiled.rule;
        if let Some(fragment) = rule.path_contains {
            if !path.to_string_lossy().contains(fragment) {
                continue;
            }
        }
        if !compiled.pattern.is_match(line) {
            continue;
        }
        if let Some(also) = &compiled.also {
            if !also.is_match(line) {
                continue;
            }
        }
        let snippet = if rule.redact {
            redact_quoted(line.trim())
        } else {
            line.trim().to_string()
        };
        let mut issue = Issue::at_line(
            rule.kind,
            rule.category,
            rule.priority,
            rule.message.to_string(),
            path,
            line_number,
            snippet,
        );
        if let Some(suggestion) = rule.suggestion {
            issue = issue.with_suggestion(suggestion);
        }
        if let Some(cwe) = rule.cwe {
            issue = issue.with_cwe(cwe);
        }
        issues.push(issue);
    }
    issues
}

static QUOTED_SPAN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#"['"].*['"]"#).ok());

/// Replaces the outermost quoted span with `"***"`. Secret values never
/// reach reports or the event log.
#[must_use]
pub fn redact_quoted(line: &str) -> String {
    match QUOTED_SPAN.as_ref() {
        Some(re) => re.replace(line, "\"***\"").into_owned(),
        None => String::from("\"***\""),
    }
}
