// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vitals", version, about = "Code health analysis and prioritized recommendations")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a project and print the health report
    Scan {
        #[arg(value_name = "DIR", default_value = ".")]
        root: PathBuf,
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
        /// Log skipped files and analyzer diagnostics
        #[arg(long, short)]
        verbose: bool,
    },
    /// Generate ranked recommendations
    Recommend {
        #[arg(value_name = "DIR", default_value = ".")]
        root: PathBuf,
        #[arg(long)]
        json: bool,
        /// Maximum number of recommendations to show
        #[arg(long, default_value = "10")]
        limit: usize,
    },
    /// Show project status
    Status {
        #[arg(value_name = "DIR", default_value = ".")]
        root: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Security-focused issue digest
    Security {
        #[arg(value_name = "DIR", default_value = ".")]
        root: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Run a health check
    Health {
        #[arg(value_name = "DIR", default_value = ".")]
        root: PathBuf,
        #[arg(long)]
        json: bool,
    },
}
