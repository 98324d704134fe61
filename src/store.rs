//! File-backed delivery history: keyword -> links already sent, newest first.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Per-keyword list of delivered article links, most recent first.
/// Each list is capped by the dedup step, not here.
pub type History = BTreeMap<String, Vec<String>>;

/// Loads and persists the whole history as one JSON object on disk.
/// Single-writer, single-process; no partial writes.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing file means first run and yields an empty map. A file that
    /// exists but cannot be read or parsed is an error: aborting beats
    /// silently re-delivering everything from a blank history.
    pub fn load(&self) -> Result<History> {
        if !self.path.exists() {
            return Ok(History::new());
        }
        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("reading history from {}", self.path.display()))?;
        let history: History = serde_json::from_str(&raw)
            .with_context(|| format!("history file {} is corrupt", self.path.display()))?;
        Ok(history)
    }

    /// Overwrites the whole file in one write, once per run.
    pub fn save(&self, history: &History) -> Result<()> {
        let raw = serde_json::to_string_pretty(history).context("serializing history")?;
        std::fs::write(&self.path, raw)
            .with_context(|| format!("writing history to {}", self.path.display()))?;
        Ok(())
    }
}
