// src/analysis/worker.rs
//! Per-file analysis routine run inside the scan fan-out.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::analyzers::Analyzer;
use crate::config::Thresholds;
use crate::types::{AnalysisResult, Issue};
use crate::utils::now_millis;

use super::metrics;

/// What one file produced, handed back to the sequential fan-in.
pub struct FileOutcome {
    pub path: PathBuf,
    /// `None` when the file could not be read; the failure stays confined
    /// to this file.
    pub result: Option<AnalysisResult>,
    pub elapsed_micros: u64,
    /// Analyzers that violated the no-panic contract on this file.
    pub panicked: Vec<&'static str>,
}

/// Reads and analyzes a single file. Never fails the scan: read errors
/// yield an empty outcome and a panicking analyzer contributes nothing.
#[must_use]
pub fn analyze(
    path: &Path,
    analyzers: &[Box<dyn Analyzer>],
    thresholds: &Thresholds,
) -> FileOutcome {
    let started = Instant::now();
    let mut outcome = FileOutcome {
        path: path.to_path_buf(),
        result: None,
        elapsed_micros: 0,
        panicked: Vec::new(),
    };

    let Ok(content) = std::fs::read_to_string(path) else {
        outcome.elapsed_micros = elapsed_micros(&started);
        return outcome;
    };

    let lines: Vec<&str> = content.split('\n').collect();
    let mut issues: Vec<Issue> = Vec::new();

    for analyzer in analyzers {
        let scanned = catch_unwind(AssertUnwindSafe(|| {
            let mut found = Vec::new();
            for (index, line) in lines.iter().enumerate() {
                found.extend(analyzer.analyze_line(line, index + 1, path));
            }
            found
        }));
        match scanned {
            Ok(found) => issues.extend(found),
            Err(_) => outcome.panicked.push(analyzer.name()),
        }
    }
    // Line order first; the stable sort keeps pipeline order within a line.
    issues.sort_by_key(|issue| issue.line.unwrap_or(0));

    for analyzer in analyzers {
        match catch_unwind(AssertUnwindSafe(|| analyzer.analyze_file(&content, path))) {
            Ok(found) => issues.extend(found),
            Err(_) => outcome.panicked.push(analyzer.name()),
        }
    }

    let file_metrics = metrics::compute(&content);
    let local_recommendations = metrics::local_recommendations(path, &file_metrics, thresholds);

    outcome.result = Some(AnalysisResult {
        path: path.to_path_buf(),
        issues,
        metrics: file_metrics,
        local_recommendations,
        analyzed_at: now_millis(),
        seq: 0,
    });
    outcome.elapsed_micros = elapsed_micros(&started);
    outcome
}

fn elapsed_micros(started: &Instant) -> u64 {
    u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::analyzers;
    use crate::types::IssueKind;
    use std::fs;

    struct PanickingAnalyzer;

    impl Analyzer for PanickingAnalyzer {
        fn name(&self) -> &'static str {
            "panicking"
        }

        fn analyze_line(&self, _line: &str, _line_number: usize, _path: &Path) -> Vec<Issue> {
            panic!("contract violation");
        }
    }

    #[test]
    fn line_issues_come_before_file_issues_in_line_order() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("app.js");
        fs::write(
            &file,
            "const x = fs.readFileSync(p);\n// TODO: replace\nel.innerHTML = '<b>' + v;\n",
        )
        .unwrap();

        let pipeline = analyzers::pipeline();
        let outcome = analyze(&file, &pipeline, &Thresholds::default());
        let result = outcome.result.unwrap();

        let lines: Vec<_> = result.issues.iter().map(|i| i.line).collect();
        assert_eq!(lines, vec![Some(1), Some(2), Some(3)]);
        assert_eq!(result.issues[0].category, "sync-operation");
        assert_eq!(result.issues[1].category, "todo");
        assert_eq!(result.issues[2].category, "xss");
    }

    #[test]
    fn unreadable_file_yields_no_result() {
        let pipeline = analyzers::pipeline();
        let outcome = analyze(
            Path::new("/no/such/file.js"),
            &pipeline,
            &Thresholds::default(),
        );
        assert!(outcome.result.is_none());
        assert!(outcome.panicked.is_empty());
    }

    #[test]
    fn panicking_analyzer_contributes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("app.js");
        fs::write(&file, "// TODO: note\n").unwrap();

        let pipeline: Vec<Box<dyn Analyzer>> = vec![
            Box::new(PanickingAnalyzer),
            Box::new(analyzers::QualityAnalyzer::new()),
        ];
        let outcome = analyze(&file, &pipeline, &Thresholds::default());
        let result = outcome.result.unwrap();

        assert_eq!(outcome.panicked, vec!["panicking"]);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].kind, IssueKind::Quality);
    }

    #[test]
    fn same_input_gives_identical_issue_sequence() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("prod/production.js");
        fs::create_dir_all(file.parent().unwrap()).unwrap();
        fs::write(
            &file,
            "console.log('a');\nconst q = `SELECT x FROM t WHERE id=` + `${id}`;\n",
        )
        .unwrap();

        let pipeline = analyzers::pipeline();
        let first = analyze(&file, &pipeline, &Thresholds::default());
        let second = analyze(&file, &pipeline, &Thresholds::default());

        let render = |o: &FileOutcome| {
            o.result
                .as_ref()
                .unwrap()
                .issues
                .iter()
                .map(|i| format!("{}:{:?}:{}", i.category, i.line, i.message))
                .collect::<Vec<_>>()
        };
        assert_eq!(render(&first), render(&second));
    }
}
