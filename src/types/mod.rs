use serde::Serialize;
use std::path::{Path, PathBuf};

mod recommendation;
pub use recommendation::{Effort, RecKind, Recommendation, Scope};

/// Priority tier for an issue or recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    /// Numeric tier score used as the primary sort key.
    #[must_use]
    pub fn score(self) -> u32 {
        match self {
            Self::Critical => 100,
            Self::High => 75,
            Self::Medium => 50,
            Self::Low => 25,
        }
    }

    /// Maps a computed score back to a tier (>=80 critical, >=60 high,
    /// >=40 medium, else low).
    #[must_use]
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            Self::Critical
        } else if score >= 60 {
            Self::High
        } else if score >= 40 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Label shown in report output.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Which analyzer family produced an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Security,
    Performance,
    Quality,
    Dependency,
    Architecture,
}

impl IssueKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Security => "security",
            Self::Performance => "performance",
            Self::Quality => "quality",
            Self::Dependency => "dependency",
            Self::Architecture => "architecture",
        }
    }
}

/// A single detected problem instance tied to a file (and usually a line).
#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    pub kind: IssueKind,
    pub category: &'static str,
    pub priority: Priority,
    pub message: String,
    pub file: PathBuf,
    /// None for file-level issues (manifest, architecture).
    pub line: Option<usize>,
    /// Offending text. Secret values are redacted before this is populated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// CWE identifier for findings with a recognized weakness class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cwe: Option<&'static str>,
}

impl Issue {
    /// An issue anchored to a specific line.
    #[must_use]
    pub fn at_line(
        kind: IssueKind,
        category: &'static str,
        priority: Priority,
        message: String,
        file: &Path,
        line: usize,
        snippet: String,
    ) -> Self {
        Self {
            kind,
            category,
            priority,
            message,
            file: file.to_path_buf(),
            line: Some(line),
            snippet: Some(snippet),
            suggestion: None,
            cwe: None,
        }
    }

    /// An issue that applies to the whole file.
    #[must_use]
    pub fn file_level(
        kind: IssueKind,
        category: &'static str,
        priority: Priority,
        message: String,
        file: &Path,
    ) -> Self {
        Self {
            kind,
            category,
            priority,
            message,
            file: file.to_path_buf(),
            line: None,
            snippet: None,
            suggestion: None,
            cwe: None,
        }
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestion = Some(suggestion.to_string());
        self
    }

    #[must_use]
    pub fn with_cwe(mut self, cwe: &'static str) -> Self {
        self.cwe = Some(cwe);
        self
    }
}

/// Per-file metrics computed during analysis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FileMetrics {
    pub line_count: usize,
    /// Coarse cyclomatic proxy: 1 + control-flow keyword occurrences.
    pub complexity: usize,
    /// Distinct lines that appear more than once (counted once each).
    pub duplicate_lines: usize,
    pub byte_size: usize,
}

/// Analysis results for a single file. Replaced wholesale on re-analysis so a
/// reader never observes a half-updated record.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub path: PathBuf,
    pub issues: Vec<Issue>,
    pub metrics: FileMetrics,
    pub local_recommendations: Vec<Recommendation>,
    /// Milliseconds since the Unix epoch.
    pub analyzed_at: u64,
    /// Per-path upsert sequence, assigned by the store. Last writer wins.
    #[serde(skip)]
    pub seq: u64,
}

impl AnalysisResult {
    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }

    #[must_use]
    pub fn has_critical(&self) -> bool {
        self.issues.iter().any(|i| i.priority == Priority::Critical)
    }
}

/// Aggregated results from one scan pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanSummary {
    pub files_scanned: usize,
    pub lines_analyzed: usize,
    pub total_issues: usize,
    pub security_issues: usize,
    pub performance_issues: usize,
    pub quality_issues: usize,
    pub dependency_issues: usize,
    pub architecture_issues: usize,
    pub duration_ms: u128,
}

impl ScanSummary {
    #[must_use]
    pub fn has_issues(&self) -> bool {
        self.total_issues > 0
    }
}

/// Cumulative run counters maintained by the engine.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct CounterSnapshot {
    pub files_processed: usize,
    pub lines_analyzed: usize,
    /// Epoch millis of the most recent completed scan, if any.
    pub last_scan: Option<u64>,
    /// Mean per-file analysis time in microseconds.
    pub mean_file_micros: u64,
}

/// Point-in-time health digest emitted alongside the `HealthCheck` event.
#[derive(Debug, Clone, Serialize)]
pub struct HealthSummary {
    pub timestamp: u64,
    pub total_issues: usize,
    pub critical_issues: usize,
    pub counters: CounterSnapshot,
}

/// Read-only status surface for hosting shells.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectStatus {
    pub issue_count: usize,
    pub files_processed: usize,
    pub recent_recommendations: Vec<Recommendation>,
}

/// Security-focused digest: totals plus the critical/high partitions.
#[derive(Debug, Clone, Serialize)]
pub struct SecurityReport {
    pub total: usize,
    pub critical: Vec<Issue>,
    pub high: Vec<Issue>,
}
