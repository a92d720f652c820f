// src/reporting/json.rs
//! Machine-readable output for the `--json` flag.

use anyhow::Result;
use serde::Serialize;

use crate::types::{Issue, Recommendation, ScanSummary};

/// Everything `vitals scan --json` emits.
#[derive(Debug, Serialize)]
pub struct ScanDoc<'a> {
    pub summary: &'a ScanSummary,
    pub top_issues: &'a [Issue],
    pub recommendations: &'a [Recommendation],
}

/// Pretty-prints any serializable report surface to stdout.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
