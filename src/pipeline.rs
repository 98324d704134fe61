//! One pipeline run: load history, then fetch → dedup → notify per keyword
//! in configured order, then persist the whole history once.

use anyhow::{Context, Result};

use crate::dedup;
use crate::notify::Notifier;
use crate::search::{Article, NewsSource};
use crate::store::HistoryStore;

#[derive(Clone, Copy, Debug)]
pub struct RunLimits {
    pub max_articles_per_keyword: usize,
    pub max_history_per_keyword: usize,
}

impl Default for RunLimits {
    fn default() -> Self {
        Self {
            max_articles_per_keyword: dedup::DEFAULT_MAX_ARTICLES,
            max_history_per_keyword: dedup::DEFAULT_MAX_HISTORY,
        }
    }
}

/// What happened for one keyword. Diagnostics only, never persisted.
#[derive(Debug, Clone)]
pub struct KeywordOutcome {
    pub keyword: String,
    pub fetch_ok: bool,
    pub candidates: usize,
    pub delivered: Vec<Article>,
    /// True when the notify call succeeded, or when nothing needed sending.
    pub delivery_ok: bool,
}

#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub outcomes: Vec<KeywordOutcome>,
}

impl RunReport {
    pub fn delivered_total(&self) -> usize {
        self.outcomes.iter().map(|o| o.delivered.len()).sum()
    }

    pub fn failed_keywords(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| !o.fetch_ok || !o.delivery_ok)
            .count()
    }
}

/// Drives one run end to end.
///
/// Per-keyword fetch and notify failures are logged and skipped; the run
/// always reaches the final save. A failed notify does NOT roll back that
/// keyword's history update, so its items count as seen and will not be
/// re-sent by a later run (at-most-once on delivery failure). Only a corrupt
/// history at load or a failed save aborts with an error; nothing from the
/// run is persisted in either case.
pub async fn run_once(
    keywords: &[String],
    source: &dyn NewsSource,
    notifier: &dyn Notifier,
    store: &HistoryStore,
    limits: RunLimits,
) -> Result<RunReport> {
    let mut history = store.load().context("loading delivery history")?;
    let mut report = RunReport::default();

    for keyword in keywords {
        let candidates = match source.search(keyword).await {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(
                    error = ?e,
                    keyword = %keyword,
                    source = source.name(),
                    "search failed; skipping keyword this run"
                );
                report.outcomes.push(KeywordOutcome {
                    keyword: keyword.clone(),
                    fetch_ok: false,
                    candidates: 0,
                    delivered: Vec::new(),
                    delivery_ok: true,
                });
                continue;
            }
        };

        let existing = history.get(keyword).map(Vec::as_slice).unwrap_or(&[]);
        let (new_items, updated) = dedup::filter_new(
            &candidates,
            existing,
            limits.max_articles_per_keyword,
            limits.max_history_per_keyword,
        );

        if new_items.is_empty() {
            tracing::debug!(keyword = %keyword, candidates = candidates.len(), "nothing new");
            report.outcomes.push(KeywordOutcome {
                keyword: keyword.clone(),
                fetch_ok: true,
                candidates: candidates.len(),
                delivered: Vec::new(),
                delivery_ok: true,
            });
            continue;
        }

        // Marked as seen before the send: a delivery failure must not cause
        // a re-send storm on the next runs.
        history.insert(keyword.clone(), updated);

        let delivery_ok = match notifier.send(keyword, &new_items).await {
            Ok(()) => {
                tracing::info!(keyword = %keyword, sent = new_items.len(), "delivered");
                true
            }
            Err(e) => {
                tracing::warn!(
                    error = ?e,
                    keyword = %keyword,
                    "delivery failed; items stay marked as sent"
                );
                false
            }
        };

        report.outcomes.push(KeywordOutcome {
            keyword: keyword.clone(),
            fetch_ok: true,
            candidates: candidates.len(),
            delivered: new_items,
            delivery_ok,
        });
    }

    store.save(&history).context("persisting delivery history")?;
    Ok(report)
}
