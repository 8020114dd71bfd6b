use anyhow::Result;
use bot_core::{init_tracing, Bot as CoreBot};
use bot_telegram::{run_repl, TelegramBotAdapter};
use std::sync::Arc;
use tracing::{info, instrument};

use super::components::{build_handler_chain, build_results_context, build_teloxide_bot};
use super::config::BotConfig;

/// Main entry: validate config, init logging, build components, then run the REPL until shutdown.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        results_base_url = %config.results().base_url,
        accept_invalid_certs = config.results().accept_invalid_certs,
        "Initializing bot"
    );

    let context = build_results_context(&config)?;
    let teloxide_bot = build_teloxide_bot(&config);
    let adapter: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let handler_chain = build_handler_chain(adapter, context);

    info!(handlers = handler_chain.len(), "Bot started successfully");

    run_repl(teloxide_bot, handler_chain).await?;

    Ok(())
}
