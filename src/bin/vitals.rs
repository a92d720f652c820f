// src/bin/vitals.rs
use std::path::Path;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use vitals_core::cli::{self, Cli, Commands};
use vitals_core::exit::VitalsExit;

fn main() -> VitalsExit {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            VitalsExit::Error
        }
    }
}

fn run() -> Result<VitalsExit> {
    let cli = Cli::parse();
    dispatch(&cli)
}

fn dispatch(cli: &Cli) -> Result<VitalsExit> {
    match &cli.command {
        Some(Commands::Scan {
            root,
            json,
            verbose,
        }) => cli::handle_scan(root, *json, *verbose),
        Some(Commands::Recommend { root, json, limit }) => {
            cli::handle_recommend(root, *json, *limit)
        }
        Some(Commands::Status { root, json }) => cli::handle_status(root, *json),
        Some(Commands::Security { root, json }) => cli::handle_security(root, *json),
        Some(Commands::Health { root, json }) => cli::handle_health(root, *json),
        None => cli::handle_scan(Path::new("."), false, false),
    }
}
