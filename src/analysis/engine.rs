// src/analysis/engine.rs
//! Main execution logic for the vitals engine.
//! Unified entry point for scanning, incremental updates and reporting
//! surfaces.

use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};

use crate::analyzers::{self, Analyzer};
use crate::config::Config;
use crate::discovery::{self, ChangeEvent, ChangeKind};
use crate::error::Result;
use crate::events::{EventBus, EventKind, EventSink};
use crate::recommend::{priority, Advisor};
use crate::types::{
    CounterSnapshot, HealthSummary, Issue, IssueKind, Priority, ProjectStatus, Recommendation,
    ScanSummary, SecurityReport,
};
use crate::utils::now_millis;

use super::store::AnalysisStore;
use super::worker::{self, FileOutcome};

/// Cumulative run counters. Re-analysis of a file counts again; these track
/// work done, not repository size.
#[derive(Debug, Default)]
struct Counters {
    files_processed: usize,
    lines_analyzed: usize,
    last_scan: Option<u64>,
    total_micros: u64,
    samples: u64,
}

impl Counters {
    fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            files_processed: self.files_processed,
            lines_analyzed: self.lines_analyzed,
            last_scan: self.last_scan,
            mean_file_micros: if self.samples == 0 {
                0
            } else {
                self.total_micros / self.samples
            },
        }
    }
}

/// The analysis engine. Owns the result store, the analyzer pipeline, the
/// advisor and the event bus; hosting shells drive it through the public
/// methods and observe it through registered sinks.
pub struct Engine {
    root: PathBuf,
    config: Config,
    analyzers: Vec<Box<dyn Analyzer>>,
    store: AnalysisStore,
    counters: Counters,
    advisor: Advisor,
    events: EventBus,
}

impl Engine {
    #[must_use]
    pub fn new(root: &Path, config: Config) -> Self {
        let advisor = Advisor::new(config.thresholds);
        Self {
            root: root.to_path_buf(),
            config,
            analyzers: analyzers::pipeline(),
            store: AnalysisStore::new(),
            counters: Counters::default(),
            advisor,
            events: EventBus::new(),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &AnalysisStore {
        &self.store
    }

    #[must_use]
    pub fn counters(&self) -> CounterSnapshot {
        self.counters.snapshot()
    }

    /// Attach an event sink. Sinks receive every event published from now on.
    pub fn register_sink(&mut self, sink: Box<dyn EventSink>) {
        self.events.register(sink);
    }

    /// Extend the pipeline with an additional analyzer. It runs after the
    /// built-in ones on every subsequent analysis.
    pub fn register_analyzer(&mut self, analyzer: Box<dyn Analyzer>) {
        self.analyzers.push(analyzer);
    }

    /// Full scan: discover files under the root, analyze them in parallel
    /// batches, and fold the outcomes into the store in discovery order.
    ///
    /// # Errors
    /// Returns an error when the root directory cannot be walked.
    pub fn scan(&mut self) -> Result<ScanSummary> {
        let started = Instant::now();
        let files = discovery::discover(&self.root, &self.config)?;

        let mut files_scanned = 0;
        let mut lines_analyzed = 0;
        for chunk in files.chunks(self.config.scan.batch_width.max(1)) {
            let outcomes: Vec<FileOutcome> = chunk
                .par_iter()
                .map(|record| {
                    worker::analyze(&record.path, &self.analyzers, &self.config.thresholds)
                })
                .collect();
            for outcome in outcomes {
                files_scanned += 1;
                lines_analyzed += outcome
                    .result
                    .as_ref()
                    .map_or(0, |result| result.metrics.line_count);
                self.apply_outcome(outcome);
            }
        }

        self.counters.last_scan = Some(now_millis());
        self.events.publish(EventKind::MetricsUpdated {
            counters: self.counters.snapshot(),
        });

        let summary = ScanSummary {
            files_scanned,
            lines_analyzed,
            total_issues: self.store.total_issues(),
            security_issues: self.store.count_by_kind(IssueKind::Security),
            performance_issues: self.store.count_by_kind(IssueKind::Performance),
            quality_issues: self.store.count_by_kind(IssueKind::Quality),
            dependency_issues: self.store.count_by_kind(IssueKind::Dependency),
            architecture_issues: self.store.count_by_kind(IssueKind::Architecture),
            duration_ms: started.elapsed().as_millis(),
        };
        self.events.publish(EventKind::ScanCompleted {
            summary: summary.clone(),
        });
        Ok(summary)
    }

    /// React to a single file change. Events for files outside the scan
    /// scope are ignored.
    pub fn on_change(&mut self, event: &ChangeEvent) {
        if !discovery::change_applies(&self.root, event, &self.config) {
            return;
        }
        match event.kind {
            ChangeKind::Deleted => {
                if self.store.remove(&event.path).is_some() {
                    self.events.publish(EventKind::FileRemoved {
                        path: event.path.display().to_string(),
                    });
                }
            }
            ChangeKind::Created | ChangeKind::Modified => {
                let outcome =
                    worker::analyze(&event.path, &self.analyzers, &self.config.thresholds);
                self.apply_outcome(outcome);
            }
        }
    }

    fn apply_outcome(&mut self, outcome: FileOutcome) {
        if self.config.verbose {
            for name in &outcome.panicked {
                eprintln!(
                    "WARN: {name} analyzer panicked on {}",
                    outcome.path.display()
                );
            }
        }
        self.counters.total_micros += outcome.elapsed_micros;
        self.counters.samples += 1;

        if let Some(result) = outcome.result {
            self.counters.files_processed += 1;
            self.counters.lines_analyzed += result.metrics.line_count;
            let path = result.path.display().to_string();
            let issues = result.issue_count();
            self.store.upsert(result);
            self.events.publish(EventKind::FileAnalyzed { path, issues });
        } else if self.config.verbose {
            eprintln!("WARN: Skipped unreadable file {}", outcome.path.display());
        }
    }

    /// Stored analysis for one file, if it has been analyzed.
    #[must_use]
    pub fn analysis(&self, path: &Path) -> Option<&crate::types::AnalysisResult> {
        self.store.get(path)
    }

    /// Every stored issue, flattened in path order.
    #[must_use]
    pub fn all_issues(&self) -> Vec<Issue> {
        self.store.all_issues()
    }

    /// The `limit` most severe issues across the whole store.
    #[must_use]
    pub fn top_issues(&self, limit: usize) -> Vec<Issue> {
        priority::top_issues(self.store.all_issues(), limit)
    }

    /// Metric-threshold recommendations attached to one file's analysis.
    #[must_use]
    pub fn recommendations_for(&self, path: &Path) -> Vec<Recommendation> {
        self.store
            .get(path)
            .map(|analysis| analysis.local_recommendations.clone())
            .unwrap_or_default()
    }

    /// The full ranked recommendation list for the current store contents.
    pub fn recommendations(&mut self) -> Vec<Recommendation> {
        self.advisor.generate(&self.store)
    }

    /// The `limit` highest-ranked recommendations.
    pub fn top_recommendations(&mut self, limit: usize) -> Vec<Recommendation> {
        let mut recommendations = self.recommendations();
        recommendations.truncate(limit);
        recommendations
    }

    /// Record how implementing a recommendation worked out.
    pub fn record_feedback(
        &mut self,
        recommendation_id: &str,
        success: bool,
        note: Option<String>,
    ) {
        self.advisor.record_feedback(recommendation_id, success, note);
    }

    /// The feedback store, for per-pattern success-rate queries.
    #[must_use]
    pub fn learning(&self) -> &crate::recommend::LearningStore {
        self.advisor.learning()
    }

    /// Read-only status surface for hosting shells.
    #[must_use]
    pub fn project_status(&self) -> ProjectStatus {
        let mut recent = priority::prioritize(self.store.local_recommendations());
        recent.truncate(self.config.advisor.recent_limit);
        ProjectStatus {
            issue_count: self.store.total_issues(),
            files_processed: self.counters.files_processed,
            recent_recommendations: recent,
        }
    }

    /// Security digest: how many security issues exist, with the critical
    /// and high tiers listed in full.
    #[must_use]
    pub fn security_report(&self) -> SecurityReport {
        let security: Vec<Issue> = self
            .store
            .all_issues()
            .into_iter()
            .filter(|issue| issue.kind == IssueKind::Security)
            .collect();
        let total = security.len();
        let mut critical = Vec::new();
        let mut high = Vec::new();
        for issue in security {
            match issue.priority {
                Priority::Critical => critical.push(issue),
                Priority::High => high.push(issue),
                _ => {}
            }
        }
        SecurityReport {
            total,
            critical,
            high,
        }
    }

    /// Snapshot overall health and publish it. A `CriticalIssues` event
    /// precedes the health event whenever critical issues are present.
    #[must_use]
    pub fn health_check(&self) -> HealthSummary {
        let critical_issues = self.store.critical_count();
        if critical_issues > 0 {
            self.events.publish(EventKind::CriticalIssues {
                count: critical_issues,
            });
        }
        let summary = HealthSummary {
            timestamp: now_millis(),
            total_issues: self.store.total_issues(),
            critical_issues,
            counters: self.counters.snapshot(),
        };
        self.events.publish(EventKind::HealthCheck {
            summary: summary.clone(),
        });
        summary
    }
}
