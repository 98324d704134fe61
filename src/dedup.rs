//! Pure dedup step: split a keyword's candidates into not-yet-delivered
//! articles and the history sequence to persist afterwards. No I/O here.

use crate::search::Article;

/// Default ceiling on articles delivered per keyword per run.
pub const DEFAULT_MAX_ARTICLES: usize = 5;
/// Default ceiling on remembered links per keyword.
pub const DEFAULT_MAX_HISTORY: usize = 100;

/// Filters `candidates` (in source order, newest first) against the links
/// already delivered for this keyword.
///
/// Returns the articles to deliver this run and the full updated id
/// sequence: fresh links first in delivery order, then the prior links,
/// truncated to `max_history`. Scanning stops as soon as `max_new` articles
/// are collected; candidates past that point stay eligible next run because
/// they are not recorded.
///
/// Known quirk kept from the original service: the membership test runs
/// against history only, so a link repeated within a single candidate batch
/// is emitted twice (and counts twice toward `max_new`). The updated id
/// sequence still records it once, keeping history duplicate-free.
pub fn filter_new(
    candidates: &[Article],
    existing: &[String],
    max_new: usize,
    max_history: usize,
) -> (Vec<Article>, Vec<String>) {
    let mut new_items: Vec<Article> = Vec::new();
    let mut new_ids: Vec<String> = Vec::new();

    for article in candidates {
        if new_items.len() >= max_new {
            break;
        }
        if existing.iter().any(|id| id == &article.link) {
            continue;
        }
        if !new_ids.iter().any(|id| id == &article.link) {
            new_ids.push(article.link.clone());
        }
        new_items.push(article.clone());
    }

    if new_ids.is_empty() {
        return (new_items, existing.to_vec());
    }

    let mut updated = new_ids;
    updated.extend(existing.iter().cloned());
    updated.truncate(max_history);
    (new_items, updated)
}
