// src/lib.rs
pub mod analysis;
pub mod analyzers;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod events;
pub mod exit;
pub mod recommend;
pub mod reporting;
pub mod types;
pub mod utils;
