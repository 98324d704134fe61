pub mod telegram;

use anyhow::Result;

use crate::search::Article;

/// Delivery channel for one keyword's batch of fresh articles.
/// Never called with an empty batch; the pipeline skips those keywords.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, keyword: &str, articles: &[Article]) -> Result<()>;
}

/// Strip the search source's own markup out of a title before it is
/// re-escaped for the outgoing channel: decode HTML entities, drop tags
/// (Naver wraps query matches in `<b>…</b>`), collapse whitespace.
pub fn sanitize_title(raw: &str) -> String {
    let mut out = html_escape::decode_html_entities(raw).to_string();

    static RE_TAGS: once_cell::sync::OnceCell<regex::Regex> = once_cell::sync::OnceCell::new();
    let re_tags = RE_TAGS.get_or_init(|| regex::Regex::new(r"(?is)</?[^>]+>").unwrap());
    out = re_tags.replace_all(&out, "").to_string();

    static RE_WS: once_cell::sync::OnceCell<regex::Regex> = once_cell::sync::OnceCell::new();
    let re_ws = RE_WS.get_or_init(|| regex::Regex::new(r"\s+").unwrap());
    out = re_ws.replace_all(&out, " ").to_string();

    out.trim().to_string()
}
