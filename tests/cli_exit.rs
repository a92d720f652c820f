// tests/cli_exit.rs
//! Exit-code contract for the command handlers.
//!
//! VERIFICATION STRATEGY:
//! 1. Clean trees exit 0, invalid arguments exit 2, critical findings
//!    exit 3, bad config errors out.
//! 2. Every scan leaves an event journal under .vitals/.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use vitals_core::cli;
use vitals_core::exit::VitalsExit;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn clean_fixture(root: &Path) {
    write(root, "src/lib.js", "module.exports = { ok: true };\n");
}

fn secret_fixture(root: &Path) {
    write(root, "src/auth.js", "const password = \"hunter2\";\n");
}

#[test]
fn scan_exits_zero_on_clean_tree() {
    let dir = TempDir::new().unwrap();
    clean_fixture(dir.path());
    let exit = cli::handle_scan(dir.path(), false, false).unwrap();
    assert_eq!(exit, VitalsExit::Success);
}

#[test]
fn scan_exits_three_on_critical_findings() {
    let dir = TempDir::new().unwrap();
    secret_fixture(dir.path());
    let exit = cli::handle_scan(dir.path(), true, false).unwrap();
    assert_eq!(exit, VitalsExit::CriticalIssues);
}

#[test]
fn scan_journals_events_under_dot_vitals() {
    let dir = TempDir::new().unwrap();
    clean_fixture(dir.path());
    cli::handle_scan(dir.path(), false, false).unwrap();

    let journal = dir.path().join(".vitals/events.jsonl");
    assert!(journal.is_file());
    let body = fs::read_to_string(journal).unwrap();
    let first = body.lines().next().expect("at least one event");
    let event: serde_json::Value = serde_json::from_str(first).unwrap();
    assert!(event.get("timestamp").is_some());
}

#[test]
fn malformed_config_is_a_hard_error() {
    let dir = TempDir::new().unwrap();
    clean_fixture(dir.path());
    write(dir.path(), "vitals.toml", "[scan\nextensions = oops");
    assert!(cli::handle_scan(dir.path(), false, false).is_err());
}

#[test]
fn security_exit_tracks_critical_partition() {
    let clean = TempDir::new().unwrap();
    clean_fixture(clean.path());
    assert_eq!(
        cli::handle_security(clean.path(), true).unwrap(),
        VitalsExit::Success
    );

    let dirty = TempDir::new().unwrap();
    secret_fixture(dirty.path());
    assert_eq!(
        cli::handle_security(dirty.path(), true).unwrap(),
        VitalsExit::CriticalIssues
    );
}

#[test]
fn health_exit_is_zero_without_criticals() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "src/app.js", "// TODO: wire up the cache layer\n");
    let exit = cli::handle_health(dir.path(), false).unwrap();
    assert_eq!(exit, VitalsExit::Success);
}

#[test]
fn recommend_rejects_a_zero_limit() {
    let dir = TempDir::new().unwrap();
    clean_fixture(dir.path());
    assert_eq!(
        cli::handle_recommend(dir.path(), true, 0).unwrap(),
        VitalsExit::InvalidInput
    );
}

#[test]
fn recommend_and_status_always_exit_zero() {
    let dir = TempDir::new().unwrap();
    secret_fixture(dir.path());
    assert_eq!(
        cli::handle_recommend(dir.path(), true, 5).unwrap(),
        VitalsExit::Success
    );
    assert_eq!(
        cli::handle_status(dir.path(), true).unwrap(),
        VitalsExit::Success
    );
}
