// src/analyzers/architecture.rs
//! Whole-file structure checks: import fan-in and layering.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::{Issue, IssueKind, Priority};

use super::Analyzer;

const MAX_IMPORTS: usize = 20;

static REQUIRE_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#"require\(['"`]([^'"`]+)['"`]\)"#).ok());
static IMPORT_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#"import.*from\s+['"`]([^'"`]+)['"`]"#).ok());
static ROUTES_IMPORT_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#"(?:require\(|from\s+)['"`][^'"`]*routes"#).ok());

pub struct ArchitectureAnalyzer;

impl ArchitectureAnalyzer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn count_imports(content: &str) -> usize {
        let requires = REQUIRE_RE
            .as_ref()
            .map_or(0, |re| re.find_iter(content).count());
        let imports = IMPORT_RE
            .as_ref()
            .map_or(0, |re| re.find_iter(content).count());
        requires + imports
    }

    fn imports_from_routes(content: &str) -> bool {
        ROUTES_IMPORT_RE
            .as_ref()
            .is_some_and(|re| re.is_match(content))
    }
}

impl Default for ArchitectureAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for ArchitectureAnalyzer {
    fn name(&self) -> &'static str {
        "architecture"
    }

    fn analyze_file(&self, content: &str, path: &Path) -> Vec<Issue> {
        let mut issues = Vec::new();

        if Self::count_imports(content) > MAX_IMPORTS {
            issues.push(
                Issue::file_level(
                    IssueKind::Architecture,
                    "too-many-imports",
                    Priority::Medium,
                    String::from("Too many imports detected"),
                    path,
                )
                .with_suggestion("Review the dependency structure"),
            );
        }

        let normalized = path.to_string_lossy().replace('\\', "/");
        if normalized.contains("/models/") && Self::imports_from_routes(content) {
            issues.push(
                Issue::file_level(
                    IssueKind::Architecture,
                    "layer-violation",
                    Priority::High,
                    String::from("Layer violation: model depends on a route"),
                    path,
                )
                .with_suggestion("Respect the layered architecture"),
            );
        }

        issues
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn run(content: &str, path: &str) -> Vec<Issue> {
        ArchitectureAnalyzer::new().analyze_file(content, &PathBuf::from(path))
    }

    #[test]
    fn import_count_over_limit_is_flagged() {
        let mut content = String::new();
        for i in 0..21 {
            content.push_str(&format!("const m{i} = require('mod{i}');\n"));
        }
        let issues = run(&content, "src/hub.js");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].category, "too-many-imports");
        assert_eq!(issues[0].priority, Priority::Medium);
    }

    #[test]
    fn twenty_imports_exactly_pass() {
        let mut content = String::new();
        for i in 0..20 {
            content.push_str(&format!("import m{i} from 'mod{i}';\n"));
        }
        assert!(run(&content, "src/hub.js").is_empty());
    }

    #[test]
    fn model_importing_route_violates_layering() {
        let content = "const router = require('../routes/users');\n";
        let issues = run(content, "backend/src/models/User.js");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].category, "layer-violation");
        assert_eq!(issues[0].priority, Priority::High);
        assert_eq!(issues[0].line, None);
    }

    #[test]
    fn route_importing_model_is_allowed() {
        let content = "const User = require('../models/User');\n";
        assert!(run(content, "backend/src/routes/users.js").is_empty());
    }

    #[test]
    fn es_import_from_routes_also_violates() {
        let content = "import { router } from '../routes/index';\n";
        let issues = run(content, "app/models/Session.ts");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].category, "layer-violation");
    }
}
