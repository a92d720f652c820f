// src/reporting/console.rs
//! Human-readable report output.

use std::time::Duration;

use anyhow::Result;
use colored::{ColoredString, Colorize};

use crate::types::{
    HealthSummary, Issue, Priority, ProjectStatus, Recommendation, ScanSummary, SecurityReport,
};

/// Prints the post-scan report: summary block, most severe issues, then the
/// top-ranked recommendations.
///
/// # Errors
/// Returns error if formatting fails.
pub fn print_scan_report(
    summary: &ScanSummary,
    top_issues: &[Issue],
    recommendations: &[Recommendation],
) -> Result<()> {
    print_summary(summary);
    if !top_issues.is_empty() {
        println!();
        println!("{}", "Top issues".bold());
        for (index, issue) in top_issues.iter().enumerate() {
            print_issue_line(index + 1, issue);
        }
    }
    if !recommendations.is_empty() {
        println!();
        println!("{}", "Recommendations".bold());
        for (index, rec) in recommendations.iter().enumerate() {
            println!(
                "  {}. {} {}",
                index + 1,
                priority_paint(rec.priority),
                rec.title
            );
        }
    }
    Ok(())
}

fn print_summary(summary: &ScanSummary) {
    let duration = duration_of(summary);
    if !summary.has_issues() {
        println!(
            "{} Scanned {} {} in {duration:?}. No issues found.",
            "OK".green().bold(),
            summary.files_scanned,
            pluralize("file", summary.files_scanned)
        );
        return;
    }

    println!("{}", "Scan report".bold());
    println!("  Files analyzed:  {}", summary.files_scanned);
    println!("  Lines analyzed:  {}", summary.lines_analyzed);
    println!(
        "  Issues found:    {}",
        summary.total_issues.to_string().red().bold()
    );
    println!("    security:      {}", count_paint(summary.security_issues));
    println!(
        "    performance:   {}",
        count_paint(summary.performance_issues)
    );
    println!("    quality:       {}", count_paint(summary.quality_issues));
    println!(
        "    dependency:    {}",
        count_paint(summary.dependency_issues)
    );
    println!(
        "    architecture:  {}",
        count_paint(summary.architecture_issues)
    );
    println!("  Completed in {duration:?}.");
}

fn print_issue_line(index: usize, issue: &Issue) {
    let location = match issue.line {
        Some(line) => format!("{}:{line}", issue.file.display()),
        None => issue.file.display().to_string(),
    };
    println!(
        "  {index}. {} {}  {}",
        priority_paint(issue.priority),
        issue.message,
        location.dimmed()
    );
    if let Some(suggestion) = &issue.suggestion {
        println!("     {} {}", "fix:".green(), suggestion);
    }
}

/// Full detail listing for the recommend command.
pub fn print_recommendations(recommendations: &[Recommendation]) {
    if recommendations.is_empty() {
        println!("{} Nothing to recommend.", "OK".green().bold());
        return;
    }
    for (index, rec) in recommendations.iter().enumerate() {
        println!(
            "{}. {} {} {}",
            index + 1,
            priority_paint(rec.priority),
            rec.title.bold(),
            format!(
                "[{} | {} effort | {:.0}% confidence | rank {}]",
                rec.kind.label(),
                rec.effort.label(),
                rec.confidence * 100.0,
                rec.rank
            )
            .dimmed()
        );
        match rec.file_path() {
            Some(path) => println!("   {} {}", "at:".blue(), path.display()),
            None => println!("   {} whole project", "at:".blue()),
        }
        println!("   {} {}", "impact:".cyan(), rec.impact);
        for line in rec.implementation.lines() {
            println!("     {line}");
        }
        println!();
    }
}

pub fn print_status(status: &ProjectStatus) {
    println!("{}", "Project status".bold());
    println!("  Open issues:      {}", count_paint(status.issue_count));
    println!("  Files processed:  {}", status.files_processed);
    if status.recent_recommendations.is_empty() {
        println!("  No local recommendations.");
        return;
    }
    println!("  Recent recommendations:");
    for rec in &status.recent_recommendations {
        println!(
            "    {} {}",
            priority_paint(rec.priority),
            rec.title
        );
    }
}

pub fn print_security(report: &SecurityReport) {
    if report.total == 0 {
        println!("{} No security issues found.", "OK".green().bold());
        return;
    }
    println!(
        "{} {} security {}",
        "Security report:".bold(),
        report.total.to_string().red().bold(),
        pluralize("issue", report.total)
    );
    if !report.critical.is_empty() {
        println!("{}", "Critical".red().bold());
        for (index, issue) in report.critical.iter().enumerate() {
            print_issue_line(index + 1, issue);
        }
    }
    if !report.high.is_empty() {
        println!("{}", "High".red());
        for (index, issue) in report.high.iter().enumerate() {
            print_issue_line(index + 1, issue);
        }
    }
}

pub fn print_health(health: &HealthSummary) {
    let verdict = if health.critical_issues > 0 {
        format!("{} critical issues", health.critical_issues)
            .red()
            .bold()
    } else {
        "no critical issues".green()
    };
    println!("{} {}", "Health:".bold(), verdict);
    println!("  Total issues:     {}", count_paint(health.total_issues));
    println!("  Files processed:  {}", health.counters.files_processed);
    println!("  Lines analyzed:   {}", health.counters.lines_analyzed);
    println!(
        "  Mean file time:   {}us",
        health.counters.mean_file_micros
    );
    match health.counters.last_scan {
        Some(at) => println!("  Last scan:        {at} (epoch ms)"),
        None => println!("  Last scan:        never"),
    }
}

fn priority_paint(priority: Priority) -> ColoredString {
    let tag = format!("[{}]", priority.label().to_uppercase());
    match priority {
        Priority::Critical => tag.red().bold(),
        Priority::High => tag.red(),
        Priority::Medium => tag.yellow(),
        Priority::Low => tag.dimmed(),
    }
}

fn count_paint(count: usize) -> ColoredString {
    if count > 0 {
        count.to_string().yellow()
    } else {
        count.to_string().normal()
    }
}

fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

fn duration_of(summary: &ScanSummary) -> Duration {
    let ms = u64::try_from(summary.duration_ms).unwrap_or(u64::MAX);
    Duration::from_millis(ms)
}
