// src/analysis/mod.rs
//! Analysis layer: per-file worker, metrics, the result store and the
//! orchestrating engine.

pub mod engine;
pub mod metrics;
pub mod store;
pub mod worker;

pub use engine::Engine;
pub use store::AnalysisStore;
pub use worker::FileOutcome;
