// src/analysis/store.rs
//! Per-file result store owned by the engine.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::types::{AnalysisResult, Issue, IssueKind, Priority, Recommendation};

/// Holds one `AnalysisResult` per path. Results are replaced wholesale on
/// re-analysis; every projection iterates in path order, so reads are
/// deterministic.
#[derive(Debug, Default)]
pub struct AnalysisStore {
    results: BTreeMap<PathBuf, AnalysisResult>,
    next_seq: BTreeMap<PathBuf, u64>,
}

impl AnalysisStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, path: &Path) -> Option<&AnalysisResult> {
        self.results.get(path)
    }

    /// Inserts or replaces the result for its path, stamping it with the
    /// next per-path sequence number. Returns the stamped sequence.
    pub fn upsert(&mut self, mut result: AnalysisResult) -> u64 {
        let seq = self.next_seq.entry(result.path.clone()).or_insert(0);
        *seq += 1;
        result.seq = *seq;
        let stamped = *seq;
        self.results.insert(result.path.clone(), result);
        stamped
    }

    /// Drops a file's result. The sequence counter survives so a later
    /// re-add keeps increasing.
    pub fn remove(&mut self, path: &Path) -> Option<AnalysisResult> {
        self.results.remove(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PathBuf, &AnalysisResult)> {
        self.results.iter()
    }

    /// Flattens every file's issues, in path order.
    #[must_use]
    pub fn all_issues(&self) -> Vec<Issue> {
        self.results
            .values()
            .flat_map(|r| r.issues.iter().cloned())
            .collect()
    }

    #[must_use]
    pub fn count_by_kind(&self, kind: IssueKind) -> usize {
        self.results
            .values()
            .flat_map(|r| r.issues.iter())
            .filter(|i| i.kind == kind)
            .count()
    }

    #[must_use]
    pub fn total_issues(&self) -> usize {
        self.results.values().map(AnalysisResult::issue_count).sum()
    }

    #[must_use]
    pub fn critical_count(&self) -> usize {
        self.results
            .values()
            .flat_map(|r| r.issues.iter())
            .filter(|i| i.priority == Priority::Critical)
            .count()
    }

    /// Every file's threshold recommendations, in path order.
    #[must_use]
    pub fn local_recommendations(&self) -> Vec<Recommendation> {
        self.results
            .values()
            .flat_map(|r| r.local_recommendations.iter().cloned())
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::FileMetrics;

    fn result_for(path: &str, issues: Vec<Issue>) -> AnalysisResult {
        AnalysisResult {
            path: PathBuf::from(path),
            issues,
            metrics: FileMetrics::default(),
            local_recommendations: Vec::new(),
            analyzed_at: 0,
            seq: 0,
        }
    }

    fn issue(path: &str, priority: Priority) -> Issue {
        Issue::file_level(
            IssueKind::Security,
            "weak-crypto",
            priority,
            String::from("x"),
            &PathBuf::from(path),
        )
    }

    #[test]
    fn upsert_stamps_increasing_sequences_per_path() {
        let mut store = AnalysisStore::new();
        assert_eq!(store.upsert(result_for("a.js", vec![])), 1);
        assert_eq!(store.upsert(result_for("b.js", vec![])), 1);
        assert_eq!(store.upsert(result_for("a.js", vec![])), 2);
        assert_eq!(store.get(&PathBuf::from("a.js")).unwrap().seq, 2);
    }

    #[test]
    fn reanalysis_replaces_the_whole_result() {
        let mut store = AnalysisStore::new();
        store.upsert(result_for(
            "a.js",
            vec![issue("a.js", Priority::Low), issue("a.js", Priority::Low)],
        ));
        store.upsert(result_for("a.js", vec![issue("a.js", Priority::High)]));
        assert_eq!(store.total_issues(), 1);
    }

    #[test]
    fn sequence_survives_removal() {
        let mut store = AnalysisStore::new();
        store.upsert(result_for("a.js", vec![]));
        store.remove(&PathBuf::from("a.js"));
        assert!(store.is_empty());
        assert_eq!(store.upsert(result_for("a.js", vec![])), 2);
    }

    #[test]
    fn projections_iterate_in_path_order() {
        let mut store = AnalysisStore::new();
        store.upsert(result_for("z.js", vec![issue("z.js", Priority::Low)]));
        store.upsert(result_for("a.js", vec![issue("a.js", Priority::High)]));
        let issues = store.all_issues();
        assert_eq!(issues[0].file, PathBuf::from("a.js"));
        assert_eq!(issues[1].file, PathBuf::from("z.js"));
    }

    #[test]
    fn critical_count_spans_files() {
        let mut store = AnalysisStore::new();
        store.upsert(result_for("a.js", vec![issue("a.js", Priority::Critical)]));
        store.upsert(result_for("b.js", vec![issue("b.js", Priority::Critical)]));
        store.upsert(result_for("c.js", vec![issue("c.js", Priority::Low)]));
        assert_eq!(store.critical_count(), 2);
        assert_eq!(store.count_by_kind(IssueKind::Security), 3);
    }
}
