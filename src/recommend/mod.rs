// src/recommend/mod.rs
//! Recommendation generation: context, knowledge catalog, ranking and
//! feedback-driven learning.

pub mod context;
pub mod engine;
pub mod knowledge;
pub mod learning;
pub mod priority;

pub use context::{Criticality, FileContext, Layer, Technology};
pub use engine::Advisor;
pub use knowledge::{KnowledgeEntry, CATALOG};
pub use learning::{FeedbackRecord, LearningStore, PatternStats};
