// src/recommend/engine.rs
//! The advisor: turns stored analysis results into ranked recommendations.
//!
//! Four generators feed the ranking pass. Issue-driven fixes come from the
//! knowledge catalog, preventive advisories from risk patterns in the file
//! context, optimizations from metric thresholds, and a handful of global
//! advisories from repository-wide issue counts.

use crate::analysis::AnalysisStore;
use crate::config::Thresholds;
use crate::recommend::context::{Criticality, FileContext, Technology};
use crate::recommend::knowledge::{self, KnowledgeEntry};
use crate::recommend::learning::LearningStore;
use crate::recommend::priority;
use crate::types::{Effort, Issue, IssueKind, Priority, RecKind, Recommendation, Scope};
use crate::utils::now_millis;

/// Preventive advisories only surface above this probability.
const RISK_PROBABILITY_FLOOR: f64 = 0.7;
/// Complexity above this pushes estimated effort to high.
const EFFORT_COMPLEXITY_LIMIT: usize = 20;
/// More critical security issues than this trigger the audit advisory.
const AUDIT_CRITICAL_LIMIT: usize = 5;
/// More performance issues than this trigger the optimization plan.
const PERFORMANCE_PLAN_LIMIT: usize = 10;

pub struct Advisor {
    thresholds: Thresholds,
    learning: LearningStore,
}

impl Advisor {
    #[must_use]
    pub fn new(thresholds: Thresholds) -> Self {
        Self {
            thresholds,
            learning: LearningStore::new(),
        }
    }

    /// Generate the full ranked recommendation list for everything in the
    /// store. Deterministic for a given store and feedback state.
    pub fn generate(&mut self, store: &AnalysisStore) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();

        for (path, analysis) in store.iter() {
            let ctx = FileContext::derive(path, analysis);
            for issue in &analysis.issues {
                self.issue_driven(issue, &ctx, &mut recommendations);
            }
            preventive(&ctx, &mut recommendations);
            self.optimization(&ctx, &mut recommendations);
        }
        global(store, &mut recommendations);

        let ranked = priority::prioritize(recommendations);
        self.learning.learn(&ranked);
        ranked
    }

    /// Record how implementing a recommendation worked out. Raises future
    /// confidence for catalog entries sharing the same trigger set.
    pub fn record_feedback(
        &mut self,
        recommendation_id: &str,
        success: bool,
        note: Option<String>,
    ) {
        self.learning.record(recommendation_id, success, note);
    }

    #[must_use]
    pub fn learning(&self) -> &LearningStore {
        &self.learning
    }

    fn issue_driven(&mut self, issue: &Issue, ctx: &FileContext, out: &mut Vec<Recommendation>) {
        for entry in knowledge::relevant(issue, ctx) {
            let rec = self.build_fix(issue, entry, ctx);
            self.learning
                .register(&rec.id, rec.pattern_key(), Some(entry.trigger_key()));
            out.push(rec);
        }
    }

    fn build_fix(
        &self,
        issue: &Issue,
        entry: &KnowledgeEntry,
        ctx: &FileContext,
    ) -> Recommendation {
        let scope = Scope::File(issue.file.clone());
        Recommendation {
            id: Recommendation::make_id(&scope, issue.line, entry.recommendation),
            kind: RecKind::Fix,
            category: issue.category.to_string(),
            priority: adjusted_priority(issue, entry, ctx),
            title: entry.recommendation.to_string(),
            description: describe(issue, entry, ctx),
            implementation: implementation_for(issue, entry, ctx),
            impact: entry.impact.to_string(),
            effort: estimate_effort(issue, entry, ctx),
            confidence: self.confidence(issue, entry, ctx),
            scope,
            line: issue.line,
            rank: 0,
            created_at: now_millis(),
        }
    }

    /// Base 0.7, plus 0.2 for a classified weakness and 0.1 each for an
    /// entry whose technology tier matches the file and a trigger set with
    /// implementation history.
    fn confidence(&self, issue: &Issue, entry: &KnowledgeEntry, ctx: &FileContext) -> f64 {
        let mut confidence = 0.7_f64;
        if issue.cwe.is_some() {
            confidence += 0.2;
        }
        if entry.technology == ctx.technology {
            confidence += 0.1;
        }
        if self.learning.has_history(&entry.trigger_key()) {
            confidence += 0.1;
        }
        confidence.min(1.0)
    }

    fn optimization(&self, ctx: &FileContext, out: &mut Vec<Recommendation>) {
        if ctx.complexity > self.thresholds.advisor_complexity {
            let scope = Scope::File(ctx.path.clone());
            let title = "Reduce code complexity";
            out.push(Recommendation {
                id: Recommendation::make_id(&scope, None, title),
                kind: RecKind::Optimization,
                category: String::from("complexity"),
                priority: Priority::Medium,
                title: title.to_string(),
                description: format!(
                    "Current complexity: {}. Target: below {}",
                    ctx.complexity, self.thresholds.advisor_complexity
                ),
                implementation: String::from("Extract smaller functions and simplify conditions"),
                impact: String::from("More maintainable and testable code"),
                effort: Effort::Medium,
                confidence: 0.8,
                scope,
                line: None,
                rank: 0,
                created_at: now_millis(),
            });
        }

        if ctx.line_count > self.thresholds.advisor_lines {
            let scope = Scope::File(ctx.path.clone());
            let title = "Split the oversized file";
            out.push(Recommendation {
                id: Recommendation::make_id(&scope, None, title),
                kind: RecKind::Optimization,
                category: String::from("size"),
                priority: Priority::Low,
                title: title.to_string(),
                description: format!("File spans {} lines", ctx.line_count),
                implementation: String::from("Extract separate modules or classes"),
                impact: String::from("Better code organization"),
                effort: Effort::High,
                confidence: 0.9,
                scope,
                line: None,
                rank: 0,
                created_at: now_millis(),
            });
        }
    }
}

/// Issue severity adjusted by context: critical paths, the production tier
/// and critical catalog entries all push the tier up.
fn adjusted_priority(issue: &Issue, entry: &KnowledgeEntry, ctx: &FileContext) -> Priority {
    let mut score = issue.priority.score();
    if ctx.criticality == Criticality::High {
        score += 20;
    }
    if ctx.technology.is_production_tier() {
        score += 15;
    }
    if entry.priority == Priority::Critical {
        score += 30;
    }
    Priority::from_score(score)
}

fn describe(issue: &Issue, entry: &KnowledgeEntry, ctx: &FileContext) -> String {
    let file = issue
        .file
        .file_name()
        .map_or_else(|| issue.file.display().to_string(), |n| n.to_string_lossy().into_owned());
    let line = issue.line.map_or_else(|| String::from("-"), |n| n.to_string());
    format!(
        "{}\n\nProblem detected: {}\nLocation: {file}:{line}\nContext: {} - {}\n\nWhy it matters: {}",
        entry.recommendation,
        issue.message,
        ctx.technology.label(),
        ctx.layer.label(),
        entry.impact
    )
}

fn implementation_for(issue: &Issue, entry: &KnowledgeEntry, ctx: &FileContext) -> String {
    let mut implementation = String::from(entry.implementation);
    if ctx.technology == Technology::React && issue.kind == IssueKind::Performance {
        implementation
            .push_str("\n\nReact notes:\n- Use React.memo where it helps\n- Check useEffect dependencies");
    }
    if ctx.domain_specific {
        implementation.push_str(
            "\n\nPlatform notes:\n- Follow the education content standards\n- Keep the mobile clients compatible",
        );
    }
    implementation
}

/// Sequential adjustments; the last matching rule wins.
fn estimate_effort(issue: &Issue, entry: &KnowledgeEntry, ctx: &FileContext) -> Effort {
    let mut effort = Effort::Medium;
    if issue.kind == IssueKind::Security && issue.priority == Priority::Critical {
        effort = Effort::High;
    }
    if ctx.complexity > EFFORT_COMPLEXITY_LIMIT {
        effort = Effort::High;
    }
    if entry.implementation.len() < 100 {
        effort = Effort::Low;
    }
    effort
}

struct Risk {
    description: &'static str,
    category: &'static str,
    probability: f64,
    prevention: &'static str,
}

fn risks(ctx: &FileContext) -> Vec<Risk> {
    let mut risks = Vec::new();
    if ctx.has_async_ops && ctx.has_loops {
        risks.push(Risk {
            description: "Asynchronous operations inside loops",
            category: "performance",
            probability: 0.8,
            prevention: "Use Promise.all() or batching alternatives",
        });
    }
    if ctx.has_user_input && !ctx.has_validation {
        risks.push(Risk {
            description: "Unvalidated user input",
            category: "security",
            probability: 0.9,
            prevention: "Add input validation",
        });
    }
    risks
}

fn preventive(ctx: &FileContext, out: &mut Vec<Recommendation>) {
    for risk in risks(ctx) {
        if risk.probability > RISK_PROBABILITY_FLOOR {
            let scope = Scope::File(ctx.path.clone());
            let title = format!("Prevent risk: {}", risk.description);
            out.push(Recommendation {
                id: Recommendation::make_id(&scope, None, &title),
                kind: RecKind::Preventive,
                category: risk.category.to_string(),
                priority: Priority::Medium,
                title,
                description: String::from("Detected a pattern that could grow into a problem"),
                implementation: risk.prevention.to_string(),
                impact: String::from("Avoids future problems"),
                effort: Effort::Low,
                confidence: risk.probability,
                scope,
                line: None,
                rank: 0,
                created_at: now_millis(),
            });
        }
    }
}

fn global(store: &AnalysisStore, out: &mut Vec<Recommendation>) {
    let mut cycles = 0;
    let mut critical_security = 0;
    let mut performance = 0;
    for (_, analysis) in store.iter() {
        for issue in &analysis.issues {
            if issue.category == "circular-dependency" {
                cycles += 1;
            }
            if issue.kind == IssueKind::Security && issue.priority == Priority::Critical {
                critical_security += 1;
            }
            if issue.kind == IssueKind::Performance {
                performance += 1;
            }
        }
    }

    if cycles > 0 {
        let title = "Resolve circular dependencies";
        out.push(Recommendation {
            id: Recommendation::make_id(&Scope::Global, None, title),
            kind: RecKind::Architecture,
            category: String::from("dependencies"),
            priority: Priority::High,
            title: title.to_string(),
            description: format!("{cycles} dependency cycles detected"),
            implementation: String::from("Refactor the module graph to break the cycles"),
            impact: String::from("A more robust, maintainable architecture"),
            effort: Effort::High,
            confidence: 1.0,
            scope: Scope::Global,
            line: None,
            rank: 0,
            created_at: now_millis(),
        });
    }

    if critical_security > AUDIT_CRITICAL_LIMIT {
        let title = "Full security audit recommended";
        out.push(Recommendation {
            id: Recommendation::make_id(&Scope::Global, None, title),
            kind: RecKind::Security,
            category: String::from("audit"),
            priority: Priority::Critical,
            title: title.to_string(),
            description: format!("{critical_security} critical issues detected"),
            implementation: String::from("Run a complete security audit with an expert"),
            impact: String::from("Platform-wide security hardening"),
            effort: Effort::High,
            confidence: 1.0,
            scope: Scope::Global,
            line: None,
            rank: 0,
            created_at: now_millis(),
        });
    }

    if performance > PERFORMANCE_PLAN_LIMIT {
        let title = "Performance optimization plan";
        out.push(Recommendation {
            id: Recommendation::make_id(&Scope::Global, None, title),
            kind: RecKind::Optimization,
            category: String::from("optimization"),
            priority: Priority::Medium,
            title: title.to_string(),
            description: format!("{performance} performance issues detected"),
            implementation: String::from("Prioritize and fix the issues systematically"),
            impact: String::from("Overall performance improvement"),
            effort: Effort::Medium,
            confidence: 0.8,
            scope: Scope::Global,
            line: None,
            rank: 0,
            created_at: now_millis(),
        });
    }
}
