// src/config.rs
//! Process configuration, built once at startup and passed down by value.
//! Credentials come from the environment; the keyword list lives in a small
//! TOML or JSON file so it can change without a rebuild.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};

use crate::pipeline::RunLimits;

const ENV_KEYWORDS_PATH: &str = "KEYWORDS_PATH";
const DEFAULT_HISTORY_PATH: &str = "last_sent_news.json";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Search terms, in the order they are processed and notified.
    pub keywords: Vec<String>,
    pub naver_client_id: String,
    pub naver_client_secret: String,
    pub telegram_bot_token: String,
    pub channel_id: String,
    pub history_path: PathBuf,
    pub limits: RunLimits,
    pub http_timeout: Duration,
}

impl AppConfig {
    /// Reads everything from the environment (plus the keywords file).
    /// Any missing credential or empty keyword list is a startup error.
    pub fn from_env() -> Result<Self> {
        let keywords = load_keywords_default()?;
        if keywords.is_empty() {
            return Err(anyhow!(
                "no keywords configured; set {ENV_KEYWORDS_PATH} or add config/keywords.toml"
            ));
        }

        let defaults = RunLimits::default();
        Ok(Self {
            keywords,
            naver_client_id: required_env("NAVER_CLIENT_ID")?,
            naver_client_secret: required_env("NAVER_CLIENT_SECRET")?,
            telegram_bot_token: required_env("TELEGRAM_BOT_TOKEN")?,
            channel_id: required_env("CHANNEL_ID")?,
            history_path: std::env::var("HISTORY_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_HISTORY_PATH)),
            limits: RunLimits {
                max_articles_per_keyword: optional_env_usize(
                    "MAX_ARTICLES_PER_KEYWORD",
                    defaults.max_articles_per_keyword,
                )?,
                max_history_per_keyword: optional_env_usize(
                    "MAX_HISTORY_PER_KEYWORD",
                    defaults.max_history_per_keyword,
                )?,
            },
            http_timeout: Duration::from_secs(optional_env_u64(
                "HTTP_TIMEOUT_SECS",
                DEFAULT_TIMEOUT_SECS,
            )?),
        })
    }
}

fn required_env(name: &str) -> Result<String> {
    std::env::var(name).with_context(|| format!("missing required env var {name}"))
}

fn optional_env_u64(name: &str, default: u64) -> Result<u64> {
    match std::env::var(name) {
        Ok(v) => v
            .parse::<u64>()
            .with_context(|| format!("{name} must be an integer, got {v:?}")),
        Err(_) => Ok(default),
    }
}

fn optional_env_usize(name: &str, default: usize) -> Result<usize> {
    optional_env_u64(name, default as u64).map(|v| v as usize)
}

/// Load the keyword list from an explicit path. TOML or JSON.
pub fn load_keywords_from(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading keywords from {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    parse_keywords(&content, ext.as_str())
}

/// Load the keyword list using env var + fallbacks:
/// 1) $KEYWORDS_PATH
/// 2) config/keywords.toml
/// 3) config/keywords.json
pub fn load_keywords_default() -> Result<Vec<String>> {
    if let Ok(p) = std::env::var(ENV_KEYWORDS_PATH) {
        let pb = PathBuf::from(p);
        if pb.exists() {
            return load_keywords_from(&pb);
        } else {
            return Err(anyhow!("{ENV_KEYWORDS_PATH} points to non-existent path"));
        }
    }
    let toml_p = PathBuf::from("config/keywords.toml");
    if toml_p.exists() {
        return load_keywords_from(&toml_p);
    }
    let json_p = PathBuf::from("config/keywords.json");
    if json_p.exists() {
        return load_keywords_from(&json_p);
    }
    Ok(Vec::new())
}

fn parse_keywords(s: &str, hint_ext: &str) -> Result<Vec<String>> {
    let try_toml = hint_ext == "toml" || s.contains("keywords");
    if try_toml {
        if let Ok(v) = parse_toml(s) {
            return Ok(v);
        }
    }
    if let Ok(v) = parse_json(s) {
        return Ok(v);
    }
    if !try_toml {
        if let Ok(v) = parse_toml(s) {
            return Ok(v);
        }
    }
    Err(anyhow!("unsupported keywords format"))
}

fn parse_toml(s: &str) -> Result<Vec<String>> {
    #[derive(serde::Deserialize)]
    struct TomlKw {
        keywords: Vec<String>,
    }
    let v: TomlKw = toml::from_str(s)?;
    Ok(clean_list(v.keywords))
}

fn parse_json(s: &str) -> Result<Vec<String>> {
    let v: Vec<String> = serde_json::from_str(s)?;
    Ok(clean_list(v))
}

/// Trim, drop empties, drop repeats. File order is processing order, so
/// first occurrence wins rather than sorting.
fn clean_list(items: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(items.len());
    for it in items {
        let t = it.trim();
        if !t.is_empty() && !out.iter().any(|k| k == t) {
            out.push(t.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{env, fs};

    #[test]
    fn parse_keeps_order_trims_and_dedups() {
        let toml = r#"keywords = [" wind ", "", "turbine", "wind"]"#;
        let json = r#"["Vestas", "  turbine  ", ""]"#;
        assert_eq!(
            parse_toml(toml).unwrap(),
            vec!["wind".to_string(), "turbine".to_string()]
        );
        assert_eq!(
            parse_json(json).unwrap(),
            vec!["Vestas".to_string(), "turbine".to_string()]
        );
    }

    #[test]
    fn parse_dispatches_on_extension_hint() {
        assert_eq!(
            parse_keywords(r#"keywords = ["a"]"#, "toml").unwrap(),
            vec!["a".to_string()]
        );
        assert_eq!(
            parse_keywords(r#"["b"]"#, "json").unwrap(),
            vec!["b".to_string()]
        );
        assert!(parse_keywords("not a list", "txt").is_err());
    }

    #[serial_test::serial]
    #[test]
    fn env_path_wins_and_missing_env_path_errors() {
        let tmp = tempfile::tempdir().unwrap();
        let p = tmp.path().join("kw.json");
        fs::write(&p, r#"["X"]"#).unwrap();

        env::set_var(ENV_KEYWORDS_PATH, p.display().to_string());
        assert_eq!(load_keywords_default().unwrap(), vec!["X".to_string()]);

        env::set_var(ENV_KEYWORDS_PATH, tmp.path().join("nope.toml"));
        assert!(load_keywords_default().is_err());
        env::remove_var(ENV_KEYWORDS_PATH);
    }
}
