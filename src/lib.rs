// src/lib.rs
// Public library surface for integration tests (and the binary).

pub mod config;
pub mod dedup;
pub mod notify;
pub mod pipeline;
pub mod search;
pub mod store;

// ---- Re-exports for stable public API ----
pub use crate::notify::Notifier;
pub use crate::pipeline::{run_once, KeywordOutcome, RunLimits, RunReport};
pub use crate::search::{Article, NewsSource};
pub use crate::store::{History, HistoryStore};
