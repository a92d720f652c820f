// src/config/io.rs
//! Reads `vitals.toml` from a project root.

use std::path::Path;

use crate::error::{Result, VitalsError};

use super::types::VitalsToml;

pub const CONFIG_FILE: &str = "vitals.toml";

/// Loads `vitals.toml` from `root`. A missing file yields defaults; a file
/// that exists but does not parse is an error.
///
/// # Errors
/// Returns `VitalsError::Config` when the file is present but malformed, or
/// an I/O error when it exists and cannot be read.
pub fn load_toml(root: &Path) -> Result<VitalsToml> {
    let path = root.join(CONFIG_FILE);
    if !path.is_file() {
        return Ok(VitalsToml::default());
    }
    let content = std::fs::read_to_string(&path).map_err(|source| VitalsError::Io {
        source,
        path: path.clone(),
    })?;
    parse_toml(&content)
}

/// Parses the contents of a `vitals.toml`.
///
/// # Errors
/// Returns `VitalsError::Config` on malformed TOML.
pub fn parse_toml(content: &str) -> Result<VitalsToml> {
    toml::from_str(content).map_err(VitalsError::from)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let cfg = parse_toml("").unwrap();
        assert_eq!(cfg.scan.batch_width, 10);
        assert_eq!(cfg.thresholds.split_file_lines, 500);
        assert!(!cfg.advisor.auto_fix);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let cfg = parse_toml("[thresholds]\nmax_complexity = 30\n").unwrap();
        assert_eq!(cfg.thresholds.max_complexity, 30);
        assert_eq!(cfg.thresholds.max_duplicate_lines, 5);
        assert_eq!(cfg.scan.extensions.len(), 6);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(parse_toml("[scan\nbatch_width = ten").is_err());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_toml(dir.path()).unwrap();
        assert_eq!(cfg.scan.batch_width, 10);
    }
}
