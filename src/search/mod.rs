// src/search/mod.rs
pub mod naver;

use anyhow::Result;

/// One search result. `link` is the identity used for dedup; everything
/// else is carried along for the outgoing message.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct Article {
    pub link: String,
    pub title: String,
    pub description: Option<String>,
    pub published_at: Option<String>,
}

/// A keyword search backend. Results come back in the source's own recency
/// order (newest first); the pipeline trusts that order and does not re-sort.
#[async_trait::async_trait]
pub trait NewsSource: Send + Sync {
    async fn search(&self, keyword: &str) -> Result<Vec<Article>>;
    fn name(&self) -> &'static str;
}
