// src/analyzers/mod.rs
//! The analyzer pipeline: independent, stateless detectors over raw text.

pub mod architecture;
pub mod catalog;
pub mod dependency;
pub mod performance;
pub mod quality;
pub mod security;

use std::path::Path;

use crate::types::Issue;

pub use architecture::ArchitectureAnalyzer;
pub use dependency::DependencyAnalyzer;
pub use performance::PerformanceAnalyzer;
pub use quality::QualityAnalyzer;
pub use security::SecurityAnalyzer;

/// One detector. Implementations are pure functions of their inputs: no
/// shared mutable state, no panics, and the same issue set regardless of
/// where they sit in the pipeline.
pub trait Analyzer: Send + Sync {
    fn name(&self) -> &'static str;

    /// Checks a single line. The default reports nothing.
    fn analyze_line(&self, _line: &str, _line_number: usize, _path: &Path) -> Vec<Issue> {
        Vec::new()
    }

    /// Checks the whole file at once. The default reports nothing.
    fn analyze_file(&self, _content: &str, _path: &Path) -> Vec<Issue> {
        Vec::new()
    }
}

/// Builds the full pipeline. New analyzers slot in here without touching
/// the existing ones.
#[must_use]
pub fn pipeline() -> Vec<Box<dyn Analyzer>> {
    vec![
        Box::new(SecurityAnalyzer::new()),
        Box::new(PerformanceAnalyzer::new()),
        Box::new(QualityAnalyzer::new()),
        Box::new(DependencyAnalyzer::new()),
        Box::new(ArchitectureAnalyzer::new()),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_carries_all_five_analyzers() {
        let names: Vec<_> = pipeline().iter().map(|a| a.name()).collect();
        assert_eq!(
            names,
            vec![
                "security",
                "performance",
                "quality",
                "dependency",
                "architecture"
            ]
        );
    }
}
