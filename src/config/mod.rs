// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::types::{AdvisorConfig, Config, ScanConfig, Thresholds, VitalsToml};

use std::path::Path;

use crate::error::Result;

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration for `root`, reading `vitals.toml` when present.
    ///
    /// # Errors
    /// Returns an error when the file exists but is malformed, or when an
    /// exclude pattern fails to compile.
    pub fn load(root: &Path) -> Result<Self> {
        Self::from_toml(io::load_toml(root)?)
    }

    /// Builds a runtime config from parsed TOML, compiling exclude patterns.
    ///
    /// # Errors
    /// Returns `VitalsError::Regex` on an invalid exclude pattern.
    pub fn from_toml(parsed: VitalsToml) -> Result<Self> {
        let exclude_patterns = parsed
            .scan
            .exclude
            .iter()
            .map(|p| regex::Regex::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self {
            verbose: false,
            exclude_patterns,
            scan: parsed.scan,
            thresholds: parsed.thresholds,
            advisor: parsed.advisor,
        })
    }

    /// True when `rel` (a root-relative path) matches an exclude pattern.
    #[must_use]
    pub fn is_excluded(&self, rel: &str) -> bool {
        self.exclude_patterns.iter().any(|re| re.is_match(rel))
    }
}
