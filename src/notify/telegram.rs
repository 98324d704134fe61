use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use super::{sanitize_title, Notifier};
use crate::search::Article;

const API_BASE: &str = "https://api.telegram.org";

/// Sends one HTML-formatted digest message per keyword to a chat or channel.
/// Exactly one attempt per call; a failed send is retried by the next
/// scheduled run, not here.
#[derive(Clone)]
pub struct TelegramNotifier {
    bot_token: String,
    chat_id: String,
    client: Client,
    timeout: Duration,
}

impl TelegramNotifier {
    pub fn new(bot_token: String, chat_id: String) -> Self {
        Self {
            bot_token,
            chat_id,
            client: Client::new(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Digest layout: bold keyword header with a UTC timestamp, then one
/// numbered `title` + `link` block per article. Titles are stripped of the
/// source's markup and re-escaped for Telegram's HTML parse mode.
pub fn compose_message(keyword: &str, articles: &[Article], stamp: &str) -> String {
    let mut text = format!(
        "<b>{}</b> news ({stamp})\n\n",
        html_escape::encode_text(keyword)
    );
    for (i, article) in articles.iter().enumerate() {
        let title = sanitize_title(&article.title);
        text.push_str(&format!(
            "{}. {}\n{}\n\n",
            i + 1,
            html_escape::encode_text(&title),
            html_escape::encode_text(&article.link)
        ));
    }
    text
}

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'static str,
    disable_web_page_preview: bool,
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, keyword: &str, articles: &[Article]) -> Result<()> {
        if articles.is_empty() {
            return Err(anyhow!("telegram notifier called with an empty batch"));
        }

        let stamp = chrono::Utc::now().format("%Y-%m-%d %H:%M").to_string();
        let text = compose_message(keyword, articles, &stamp);
        let payload = SendMessage {
            chat_id: &self.chat_id,
            text: &text,
            parse_mode: "HTML",
            // link previews would turn a five-item digest into a wall of cards
            disable_web_page_preview: true,
        };

        let url = format!("{API_BASE}/bot{}/sendMessage", self.bot_token);
        let resp = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .with_context(|| format!("telegram sendMessage request for {keyword:?}"))?;

        resp.error_for_status()
            .with_context(|| format!("telegram sendMessage failed for {keyword:?}"))?;
        Ok(())
    }
}
