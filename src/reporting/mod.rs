// src/reporting/mod.rs
//! Report rendering: human console output and `--json` documents.

pub mod console;
pub mod json;

pub use console::{
    print_health, print_recommendations, print_scan_report, print_security, print_status,
};
