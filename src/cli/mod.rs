// src/cli/mod.rs
//! CLI argument definitions and command handlers.

pub mod args;
pub mod handlers;

pub use args::{Cli, Commands};
pub use handlers::{handle_health, handle_recommend, handle_scan, handle_security, handle_status};
