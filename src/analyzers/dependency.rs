// src/analyzers/dependency.rs
//! Manifest auditing for `package.json` files.

use std::path::Path;

use serde_json::Value;

use crate::types::{Issue, IssueKind, Priority};

use super::Analyzer;

const MANIFEST_NAME: &str = "package.json";

/// Known-bad `name@version` pins.
const VULNERABLE: &[&str] = &["lodash@4.17.15", "serialize-javascript@3.0.0"];

pub struct DependencyAnalyzer;

impl DependencyAnalyzer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn audit_manifest(content: &str, path: &Path) -> Vec<Issue> {
        let Ok(parsed) = serde_json::from_str::<Value>(content) else {
            return vec![Issue::file_level(
                IssueKind::Dependency,
                "invalid-json",
                Priority::Medium,
                String::from("Invalid package.json file"),
                path,
            )];
        };

        let mut issues = Vec::new();
        for section in ["dependencies", "devDependencies"] {
            let Some(deps) = parsed.get(section).and_then(Value::as_object) else {
                continue;
            };
            for (name, version) in deps {
                let Some(version) = version.as_str() else {
                    continue;
                };
                let pinned = format!("{name}@{version}");
                if VULNERABLE.contains(&pinned.as_str()) {
                    issues.push(
                        Issue::file_level(
                            IssueKind::Dependency,
                            "vulnerable-package",
                            Priority::High,
                            format!("Vulnerable dependency detected: {name}"),
                            path,
                        )
                        .with_suggestion("Update to a patched version"),
                    );
                }
                if version.starts_with("^0.") || version.starts_with("~0.") {
                    issues.push(
                        Issue::file_level(
                            IssueKind::Dependency,
                            "outdated-package",
                            Priority::Low,
                            format!("Potentially outdated version: {name}"),
                            path,
                        )
                        .with_suggestion("Check for available updates"),
                    );
                }
            }
        }
        issues
    }
}

impl Default for DependencyAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for DependencyAnalyzer {
    fn name(&self) -> &'static str {
        "dependency"
    }

    fn analyze_file(&self, content: &str, path: &Path) -> Vec<Issue> {
        let is_manifest = path
            .file_name()
            .is_some_and(|name| name.to_string_lossy() == MANIFEST_NAME);
        if !is_manifest {
            return Vec::new();
        }
        Self::audit_manifest(content, path)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn run(content: &str, path: &str) -> Vec<Issue> {
        DependencyAnalyzer::new().analyze_file(content, &PathBuf::from(path))
    }

    #[test]
    fn only_manifests_are_audited() {
        let issues = run("not even json", "src/data.json");
        assert!(issues.is_empty());
    }

    #[test]
    fn vulnerable_pin_is_high_priority() {
        let manifest = r#"{"dependencies": {"lodash": "4.17.15"}}"#;
        let issues = run(manifest, "package.json");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].category, "vulnerable-package");
        assert_eq!(issues[0].priority, Priority::High);
        assert!(issues[0].message.contains("lodash"));
        assert_eq!(issues[0].line, None);
    }

    #[test]
    fn zero_major_ranges_are_outdated() {
        let manifest = r#"{"devDependencies": {"leftpad": "^0.1.0", "chalk": "~0.4.0"}}"#;
        let issues = run(manifest, "app/package.json");
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.category == "outdated-package"));
        assert!(issues.iter().all(|i| i.priority == Priority::Low));
    }

    #[test]
    fn stable_versions_pass() {
        let manifest = r#"{"dependencies": {"express": "^4.18.2"}}"#;
        assert!(run(manifest, "package.json").is_empty());
    }

    #[test]
    fn malformed_json_yields_exactly_one_issue() {
        let issues = run("{ dependencies: ", "package.json");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].category, "invalid-json");
        assert_eq!(issues[0].priority, Priority::Medium);
    }

    #[test]
    fn manifest_without_dependency_sections_passes() {
        assert!(run(r#"{"name": "app", "version": "1.0.0"}"#, "package.json").is_empty());
    }
}
