//! Bot configuration: BaseConfig (Telegram + log) + ResultsConfig (results server, fetch limits, PDF staging).

mod base;
mod bot_config;
mod results;


pub use base::BaseConfig;
pub use bot_config::BotConfig;
pub use results::ResultsConfig;

/// Reads a boolean env var; accepts 1/true/yes/on (case-insensitive).
pub(crate) fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}
