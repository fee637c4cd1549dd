//! Log processing for levelscope
//!
//! This crate provides line parsing, the in-memory record store, per-level
//! aggregation and level filtering.

mod filter;
mod parser;
mod store;
mod summary;

pub use filter::{LevelFilter, by_level};
pub use parser::LineParser;
pub use store::LogStore;
pub use summary::{summarize, summarize_and_filter};

// Re-export types used in our public API
pub use levelscope_types::{LevelSummary, LogRecord};
