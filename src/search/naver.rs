use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use crate::search::{Article, NewsSource};

const SEARCH_URL: &str = "https://openapi.naver.com/v1/search/news.json";
const DEFAULT_DISPLAY: u32 = 10;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    title: Option<String>,
    link: Option<String>,
    description: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
}

/// Naver News Search client. One request per keyword, `sort=date` so the
/// newest articles come first.
#[derive(Clone)]
pub struct NaverNewsSource {
    client_id: String,
    client_secret: String,
    client: reqwest::Client,
    timeout: Duration,
    display: u32,
}

impl NaverNewsSource {
    pub fn new(client_id: String, client_secret: String) -> Self {
        Self {
            client_id,
            client_secret,
            client: reqwest::Client::new(),
            timeout: Duration::from_secs(10),
            display: DEFAULT_DISPLAY,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_display(mut self, display: u32) -> Self {
        self.display = display;
        self
    }

    /// Parse one response body into articles, source order preserved.
    /// Split out from the HTTP call so fixture payloads exercise it directly.
    pub fn parse_items_from_str(body: &str) -> Result<Vec<Article>> {
        let resp: SearchResponse =
            serde_json::from_str(body).context("parsing naver news search response")?;

        let mut out = Vec::with_capacity(resp.items.len());
        for it in resp.items {
            let link = match it.link {
                Some(l) if !l.is_empty() => l,
                _ => continue, // no link, no identity: unusable for dedup
            };
            out.push(Article {
                link,
                title: it.title.unwrap_or_default(),
                description: it.description,
                published_at: it.pub_date,
            });
        }
        Ok(out)
    }
}

#[async_trait]
impl NewsSource for NaverNewsSource {
    async fn search(&self, keyword: &str) -> Result<Vec<Article>> {
        let display = self.display.to_string();
        let resp = self
            .client
            .get(SEARCH_URL)
            .query(&[
                ("query", keyword),
                ("display", display.as_str()),
                ("sort", "date"),
            ])
            .header("X-Naver-Client-Id", &self.client_id)
            .header("X-Naver-Client-Secret", &self.client_secret)
            .timeout(self.timeout)
            .send()
            .await
            .with_context(|| format!("naver search request for {keyword:?}"))?;

        let resp = resp
            .error_for_status()
            .with_context(|| format!("naver search returned an error status for {keyword:?}"))?;
        let body = resp.text().await.context("naver search .text()")?;
        Self::parse_items_from_str(&body)
    }

    fn name(&self) -> &'static str {
        "naver"
    }
}
