use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_ignore_dirs")]
    pub ignore_dirs: Vec<String>,
    /// Regex patterns matched against relative paths; matches are skipped.
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default = "default_batch_width")]
    pub batch_width: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            ignore_dirs: default_ignore_dirs(),
            exclude: Vec::new(),
            batch_width: default_batch_width(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    [".js", ".ts", ".tsx", ".json", ".sql", ".md"]
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn default_ignore_dirs() -> Vec<String> {
    [
        "node_modules",
        ".git",
        ".next",
        "dist",
        "build",
        "coverage",
        ".expo",
        "android",
        "ios",
        ".vscode",
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}

const fn default_batch_width() -> usize { 10 }

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Thresholds {
    /// Above this line count the aggregator suggests splitting the file.
    #[serde(default = "default_split_lines")]
    pub split_file_lines: usize,
    #[serde(default = "default_max_complexity")]
    pub max_complexity: usize,
    #[serde(default = "default_max_duplicates")]
    pub max_duplicate_lines: usize,
    /// Advisor optimization cutoffs, looser than the aggregator's.
    #[serde(default = "default_advisor_complexity")]
    pub advisor_complexity: usize,
    #[serde(default = "default_advisor_lines")]
    pub advisor_lines: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            split_file_lines: default_split_lines(),
            max_complexity: default_max_complexity(),
            max_duplicate_lines: default_max_duplicates(),
            advisor_complexity: default_advisor_complexity(),
            advisor_lines: default_advisor_lines(),
        }
    }
}

const fn default_split_lines() -> usize { 500 }
const fn default_max_complexity() -> usize { 20 }
const fn default_max_duplicates() -> usize { 5 }
const fn default_advisor_complexity() -> usize { 15 }
const fn default_advisor_lines() -> usize { 300 }

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// Accepted for forward compatibility; remediation is never applied.
    #[serde(default)]
    pub auto_fix: bool,
    /// How many recommendations `project_status` surfaces.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            auto_fix: false,
            recent_limit: default_recent_limit(),
        }
    }
}

const fn default_recent_limit() -> usize { 5 }

/// On-disk layout of `vitals.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VitalsToml {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub thresholds: Thresholds,
    #[serde(default)]
    pub advisor: AdvisorConfig,
}

/// Runtime configuration with compiled exclude patterns.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub verbose: bool,
    pub exclude_patterns: Vec<regex::Regex>,
    pub scan: ScanConfig,
    pub thresholds: Thresholds,
    pub advisor: AdvisorConfig,
}
