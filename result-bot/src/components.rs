//! Component factory: builds the teloxide Bot, the results context and the handler chain from config.

use anyhow::Result;
use bot_core::Bot as CoreBot;
use handler_chain::HandlerChain;
use result_handlers::{GradeHandler, HelpHandler, LoggingHandler, ResultHandler, ResultsContext};
use results_client::ResultFetcher;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use super::config::BotConfig;

/// Creates the teloxide Bot, pointing it at TELEGRAM_API_URL when set.
pub fn build_teloxide_bot(config: &BotConfig) -> Bot {
    let bot = Bot::new(config.bot_token().to_string());
    if let Some(url_str) = config.telegram_api_url() {
        match reqwest::Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        }
    } else {
        bot
    }
}

/// Builds the shared results context: endpoints, HTTP fetcher and PDF staging directory.
#[instrument(skip(config))]
pub fn build_results_context(config: &BotConfig) -> Result<Arc<ResultsContext>> {
    let results = config.results();
    let fetcher = ResultFetcher::new(results.fetcher_config()).map_err(|e| {
        error!(error = %e, "Failed to build results HTTP client");
        anyhow::anyhow!("Failed to build results HTTP client: {}", e)
    })?;
    info!(
        base_url = %results.base_url,
        work_dir = %results.work_dir.display(),
        html_timeout_secs = results.html_timeout_secs,
        pdf_timeout_secs = results.pdf_timeout_secs,
        "Results client ready"
    );
    Ok(Arc::new(ResultsContext::new(
        results.endpoints(),
        fetcher,
        results.work_dir.clone(),
    )))
}

/// Chain order: logging, /start + /help, /grade, free-text result query.
pub fn build_handler_chain(bot: Arc<dyn CoreBot>, context: Arc<ResultsContext>) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(HelpHandler::new(bot.clone())))
        .add_handler(Arc::new(GradeHandler::new(bot.clone(), context.clone())))
        .add_handler(Arc::new(ResultHandler::new(bot, context)))
}
