// src/recommend/knowledge.rs
//! Curated best-practice catalog the advisor draws from.
//!
//! Entries are matched against detected issues by substring triggers. The
//! search space is narrowed first by technology tier, with domain entries
//! added for files that carry a platform domain marker.

use crate::recommend::context::{FileContext, Technology};
use crate::types::{Issue, Priority};

/// One advisory backed by a trigger set. Triggers are lowercase; matching
/// lowercases the issue text, never the triggers.
#[derive(Debug, Clone, Copy)]
pub struct KnowledgeEntry {
    pub technology: Technology,
    pub area: &'static str,
    pub triggers: &'static [&'static str],
    pub recommendation: &'static str,
    pub priority: Priority,
    pub implementation: &'static str,
    pub impact: &'static str,
}

impl KnowledgeEntry {
    /// Stable key identifying this entry's trigger set in feedback records.
    #[must_use]
    pub fn trigger_key(&self) -> String {
        self.triggers.join(",")
    }

    /// True when any trigger appears in the issue's message, category or
    /// snippet, case-insensitively.
    #[must_use]
    pub fn matches(&self, issue: &Issue) -> bool {
        let haystack = format!(
            "{} {} {}",
            issue.message,
            issue.category,
            issue.snippet.as_deref().unwrap_or("")
        )
        .to_lowercase();
        self.triggers.iter().any(|t| haystack.contains(t))
    }
}

pub const CATALOG: &[KnowledgeEntry] = &[
    // Node.js backend
    KnowledgeEntry {
        technology: Technology::NodeJs,
        area: "security",
        triggers: &["password", "hardcoded"],
        recommendation: "Use environment variables",
        priority: Priority::Critical,
        implementation: "Replace the literal with a process.env lookup",
        impact: "Keeps secrets out of the source tree",
    },
    KnowledgeEntry {
        technology: Technology::NodeJs,
        area: "security",
        triggers: &["sql", "injection"],
        recommendation: "Use prepared statements",
        priority: Priority::Critical,
        implementation: "Run queries with bound parameters instead of string concatenation",
        impact: "Prevents SQL injection attacks",
    },
    KnowledgeEntry {
        technology: Technology::NodeJs,
        area: "performance",
        triggers: &["sync", "blocking"],
        recommendation: "Convert to an asynchronous operation",
        priority: Priority::High,
        implementation: "Use async/await or callback-based APIs",
        impact: "Improves throughput and keeps the event loop free",
    },
    KnowledgeEntry {
        technology: Technology::NodeJs,
        area: "performance",
        triggers: &["for", "length", "inefficient"],
        recommendation: "Use native array methods",
        priority: Priority::Medium,
        implementation: "Replace the indexed loop with forEach, map or filter",
        impact: "More readable and often faster code",
    },
    // React frontend
    KnowledgeEntry {
        technology: Technology::React,
        area: "performance",
        triggers: &["useeffect", "dependency"],
        recommendation: "Optimize useEffect dependencies",
        priority: Priority::Medium,
        implementation: "List specific dependencies or memoize with useCallback",
        impact: "Avoids unnecessary re-renders",
    },
    KnowledgeEntry {
        technology: Technology::React,
        area: "performance",
        triggers: &["map", "key"],
        recommendation: "Add unique keys to rendered lists",
        priority: Priority::Medium,
        implementation: "Pass key={item.id} or another stable identifier",
        impact: "Improves React rendering performance",
    },
    KnowledgeEntry {
        technology: Technology::React,
        area: "accessibility",
        triggers: &["button", "onclick"],
        recommendation: "Improve accessibility",
        priority: Priority::Medium,
        implementation: "Add appropriate aria-label and role attributes",
        impact: "Better experience for assistive-technology users",
    },
    // React Native mobile
    KnowledgeEntry {
        technology: Technology::ReactNative,
        area: "performance",
        triggers: &["flatlist", "performance"],
        recommendation: "Optimize FlatList for large lists",
        priority: Priority::High,
        implementation: "Use getItemLayout, keyExtractor and removeClippedSubviews",
        impact: "Smoother scrolling on long lists",
    },
    KnowledgeEntry {
        technology: Technology::ReactNative,
        area: "performance",
        triggers: &["image", "cache"],
        recommendation: "Optimize image caching",
        priority: Priority::Medium,
        implementation: "Use FastImage or serve right-sized assets",
        impact: "Lower memory use and faster loading",
    },
    KnowledgeEntry {
        technology: Technology::ReactNative,
        area: "security",
        triggers: &["asyncstorage", "sensitive"],
        recommendation: "Use secure storage",
        priority: Priority::High,
        implementation: "Move sensitive values to an encrypted secure store",
        impact: "Protects data at rest on the device",
    },
    // Architecture patterns
    KnowledgeEntry {
        technology: Technology::Architecture,
        area: "separation",
        triggers: &["model", "route", "mixed"],
        recommendation: "Separate responsibilities",
        priority: Priority::High,
        implementation: "Create distinct model, controller and route layers",
        impact: "More maintainable and testable code",
    },
    KnowledgeEntry {
        technology: Technology::Architecture,
        area: "scalability",
        triggers: &["large", "file", "monolith"],
        recommendation: "Split into smaller modules",
        priority: Priority::Medium,
        implementation: "Extract functions and classes into separate files",
        impact: "Improves readability and maintainability",
    },
    // Education-platform domain
    KnowledgeEntry {
        technology: Technology::Domain,
        area: "education",
        triggers: &["student", "progress", "tracking"],
        recommendation: "Implement robust progress tracking",
        priority: Priority::High,
        implementation: "Record timestamped, validated progress events",
        impact: "Reliable data for learning analytics",
    },
    KnowledgeEntry {
        technology: Technology::Domain,
        area: "education",
        triggers: &["payment", "security"],
        recommendation: "Harden payment security",
        priority: Priority::Critical,
        implementation: "Encrypt end to end and validate on the server",
        impact: "Protects financial data",
    },
    KnowledgeEntry {
        technology: Technology::Domain,
        area: "performance",
        triggers: &["lesson", "loading"],
        recommendation: "Optimize lesson loading",
        priority: Priority::High,
        implementation: "Lazy-load content behind an intelligent cache",
        impact: "A smooth learner experience",
    },
];

/// Entries worth checking for this issue: the file's technology tier, plus
/// the domain entries when the path carries a domain marker. Architecture
/// entries describe repository-wide patterns and stay out of per-file search.
#[must_use]
pub fn relevant(issue: &Issue, ctx: &FileContext) -> Vec<&'static KnowledgeEntry> {
    CATALOG
        .iter()
        .filter(|entry| {
            entry.technology == ctx.technology
                || (ctx.domain_specific && entry.technology == Technology::Domain)
        })
        .filter(|entry| entry.matches(issue))
        .collect()
}
