//! newswatch — Binary Entrypoint
//! One pipeline run per invocation; scheduling lives outside (cron, systemd
//! timer, CI schedule). Exit is 0 even when individual keywords failed to
//! fetch or deliver; only corrupt or unwritable history state is fatal.

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use newswatch::config::AppConfig;
use newswatch::notify::telegram::TelegramNotifier;
use newswatch::pipeline;
use newswatch::search::naver::NaverNewsSource;
use newswatch::store::HistoryStore;

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("newswatch=info,warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cfg = AppConfig::from_env()?;
    let store = HistoryStore::new(&cfg.history_path);
    let source = NaverNewsSource::new(cfg.naver_client_id.clone(), cfg.naver_client_secret.clone())
        .with_timeout(cfg.http_timeout);
    let notifier = TelegramNotifier::new(cfg.telegram_bot_token.clone(), cfg.channel_id.clone())
        .with_timeout(cfg.http_timeout);

    tracing::info!(
        keywords = cfg.keywords.len(),
        history = %store.path().display(),
        "starting run"
    );

    let report = pipeline::run_once(&cfg.keywords, &source, &notifier, &store, cfg.limits).await?;

    for o in &report.outcomes {
        tracing::info!(
            keyword = %o.keyword,
            fetch_ok = o.fetch_ok,
            candidates = o.candidates,
            sent = o.delivered.len(),
            delivery_ok = o.delivery_ok,
            "keyword done"
        );
    }
    tracing::info!(
        delivered = report.delivered_total(),
        failed_keywords = report.failed_keywords(),
        "run complete"
    );
    Ok(())
}
