// src/cli/handlers.rs
use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::analysis::Engine;
use crate::config::Config;
use crate::events::JsonlSink;
use crate::exit::VitalsExit;
use crate::reporting::{self, json};

/// How many issues and recommendations the scan report shows.
const REPORT_LIMIT: usize = 10;

fn build_engine(root: &Path, verbose: bool) -> Result<Engine> {
    let mut config = Config::load(root)?;
    config.verbose = verbose;
    let mut engine = Engine::new(root, config);
    engine.register_sink(Box::new(JsonlSink::new(root)));
    Ok(engine)
}

/// Handles the scan command.
///
/// # Errors
/// Returns error if config loading or the walk fails.
pub fn handle_scan(root: &Path, json_out: bool, verbose: bool) -> Result<VitalsExit> {
    let mut engine = build_engine(root, verbose)?;
    let summary = engine.scan()?;
    let top_issues = engine.top_issues(REPORT_LIMIT);
    let recommendations = engine.top_recommendations(REPORT_LIMIT);

    if json_out {
        json::print(&json::ScanDoc {
            summary: &summary,
            top_issues: &top_issues,
            recommendations: &recommendations,
        })?;
    } else {
        reporting::print_scan_report(&summary, &top_issues, &recommendations)?;
    }

    if engine.store().critical_count() > 0 {
        Ok(VitalsExit::CriticalIssues)
    } else {
        Ok(VitalsExit::Success)
    }
}

/// Handles the recommend command.
///
/// # Errors
/// Returns error if config loading or the walk fails.
pub fn handle_recommend(root: &Path, json_out: bool, limit: usize) -> Result<VitalsExit> {
    if limit == 0 {
        eprintln!("{} --limit must be at least 1", "invalid input:".red().bold());
        return Ok(VitalsExit::InvalidInput);
    }
    let mut engine = build_engine(root, false)?;
    engine.scan()?;
    let recommendations = engine.top_recommendations(limit);

    if json_out {
        json::print(&recommendations)?;
    } else {
        reporting::print_recommendations(&recommendations);
    }
    Ok(VitalsExit::Success)
}

/// Handles the status command.
///
/// # Errors
/// Returns error if config loading or the walk fails.
pub fn handle_status(root: &Path, json_out: bool) -> Result<VitalsExit> {
    let mut engine = build_engine(root, false)?;
    engine.scan()?;
    let status = engine.project_status();

    if json_out {
        json::print(&status)?;
    } else {
        reporting::print_status(&status);
    }
    Ok(VitalsExit::Success)
}

/// Handles the security command.
///
/// # Errors
/// Returns error if config loading or the walk fails.
pub fn handle_security(root: &Path, json_out: bool) -> Result<VitalsExit> {
    let mut engine = build_engine(root, false)?;
    engine.scan()?;
    let report = engine.security_report();

    if json_out {
        json::print(&report)?;
    } else {
        reporting::print_security(&report);
    }

    if report.critical.is_empty() {
        Ok(VitalsExit::Success)
    } else {
        Ok(VitalsExit::CriticalIssues)
    }
}

/// Handles the health command.
///
/// # Errors
/// Returns error if config loading or the walk fails.
pub fn handle_health(root: &Path, json_out: bool) -> Result<VitalsExit> {
    let mut engine = build_engine(root, false)?;
    engine.scan()?;
    let health = engine.health_check();

    if json_out {
        json::print(&health)?;
    } else {
        reporting::print_health(&health);
    }

    if health.critical_issues > 0 {
        Ok(VitalsExit::CriticalIssues)
    } else {
        Ok(VitalsExit::Success)
    }
}
