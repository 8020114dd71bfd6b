//! # bot-telegram
//!
//! Telegram layer: teloxide → core message adapters, the [`bot_core::Bot`] implementation used by the
//! handlers, and the REPL runner that feeds every text message through a [`handler_chain::HandlerChain`].

mod adapters;
mod bot_adapter;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{split_for_telegram, TelegramBotAdapter, MAX_MESSAGE_CHARS};
pub use runner::run_repl;
