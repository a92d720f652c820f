// src/recommend/context.rs
//! Per-file context derived from the path and already-detected issues.

use std::path::Path;

use crate::types::AnalysisResult;

/// Technology tier a file (or knowledge entry) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Technology {
    NodeJs,
    React,
    ReactNative,
    Architecture,
    Domain,
    Unknown,
}

impl Technology {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::NodeJs => "nodejs",
            Self::React => "react",
            Self::ReactNative => "react-native",
            Self::Architecture => "architecture",
            Self::Domain => "domain",
            Self::Unknown => "unknown",
        }
    }

    /// The server tier is where production traffic lands; priority scoring
    /// weighs it extra.
    #[must_use]
    pub fn is_production_tier(self) -> bool {
        self == Self::NodeJs
    }
}

/// Which architectural layer the path suggests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Model,
    Route,
    Component,
    Service,
    Utility,
    Unknown,
}

impl Layer {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Route => "route",
            Self::Component => "component",
            Self::Service => "service",
            Self::Utility => "utility",
            Self::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criticality {
    High,
    Medium,
    Low,
}

/// Path fragments marking files that belong to the education-platform
/// domain rather than generic plumbing.
const DOMAIN_MARKERS: &[&str] = &["/student/", "/lesson/", "/progress/", "/family/", "/battle/"];

const CRITICAL_PATHS: &[&str] = &["/auth/", "/payment/", "/security/", "/admin/"];

/// Everything the advisor knows about one file. Derived on demand from the
/// path and the file's analysis; never stored.
#[derive(Debug, Clone)]
pub struct FileContext {
    pub path: std::path::PathBuf,
    pub technology: Technology,
    pub layer: Layer,
    pub criticality: Criticality,
    pub domain_specific: bool,
    pub has_async_ops: bool,
    pub has_loops: bool,
    pub has_user_input: bool,
    pub has_validation: bool,
    pub complexity: usize,
    pub line_count: usize,
}

impl FileContext {
    #[must_use]
    pub fn derive(path: &Path, analysis: &AnalysisResult) -> Self {
        let normalized = path.to_string_lossy().replace('\\', "/");
        Self {
            path: path.to_path_buf(),
            technology: technology_of(&normalized),
            layer: layer_of(&normalized),
            criticality: criticality_of(&normalized),
            domain_specific: DOMAIN_MARKERS.iter().any(|m| normalized.contains(m)),
            has_async_ops: any_snippet(analysis, &["await", "async", "Promise"]),
            has_loops: any_snippet(analysis, &["for", "while", "forEach"]),
            has_user_input: any_snippet(analysis, &["req.body", "req.query", "req.params"]),
            has_validation: any_snippet(analysis, &["validate", "joi", "validator"]),
            complexity: analysis.metrics.complexity,
            line_count: analysis.metrics.line_count,
        }
    }
}

fn technology_of(path: &str) -> Technology {
    if path.contains("backend") {
        Technology::NodeJs
    } else if path.contains("frontend") {
        Technology::React
    } else if path.contains("mobile") {
        Technology::ReactNative
    } else {
        Technology::Unknown
    }
}

fn layer_of(path: &str) -> Layer {
    if path.contains("/models/") {
        Layer::Model
    } else if path.contains("/routes/") {
        Layer::Route
    } else if path.contains("/components/") {
        Layer::Component
    } else if path.contains("/services/") {
        Layer::Service
    } else if path.contains("/utils/") {
        Layer::Utility
    } else {
        Layer::Unknown
    }
}

fn criticality_of(path: &str) -> Criticality {
    if CRITICAL_PATHS.iter().any(|p| path.contains(p)) {
        Criticality::High
    } else if path.contains("/core/") || path.contains("/models/") {
        Criticality::Medium
    } else {
        Criticality::Low
    }
}

/// True when any detected issue's snippet contains one of the needles.
/// Context looks at evidence the analyzers already surfaced, not raw source.
fn any_snippet(analysis: &AnalysisResult, needles: &[&str]) -> bool {
    analysis.issues.iter().any(|issue| {
        issue
            .snippet
            .as_deref()
            .is_some_and(|code| needles.iter().any(|n| code.contains(n)))
    })
}
