//! # result-bot
//!
//! Application crate: CLI, environment configuration, and wiring of the results handlers onto the
//! Telegram runner.

pub mod cli;
pub mod components;
pub mod config;
pub mod runner;

pub use cli::{load_config, Cli, Commands};
pub use components::{build_handler_chain, build_results_context, build_teloxide_bot};
pub use config::BotConfig;
pub use runner::run_bot;
