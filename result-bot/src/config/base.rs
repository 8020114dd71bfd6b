//! Base config: Telegram Bot connection and logging. Loaded from env.

use anyhow::Result;
use std::env;

/// Blank values (e.g. `BOT_TOKEN=` left in a .env template) count as unset.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Base config: Telegram-related and logging only.
#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// BOT_TOKEN (legacy: BOT_API / bot_api)
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// Log file path
    pub log_file: String,
}

impl BaseConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    /// Fails when no token is available from either source.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = non_empty(token)
            .or_else(|| non_empty(env::var("BOT_TOKEN").ok()))
            .or_else(|| non_empty(env::var("BOT_API").ok()))
            .or_else(|| non_empty(env::var("bot_api").ok()))
            .ok_or_else(|| {
                anyhow::anyhow!("BOT_TOKEN not set (pass --token or set BOT_TOKEN in the environment)")
            })?;
        let log_file =
            env::var("LOG_FILE").unwrap_or_else(|_| "logs/result-bot.log".to_string());
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();

        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
        })
    }

    /// Validate config (e.g. telegram_api_url must be valid URL if set).
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }
}
