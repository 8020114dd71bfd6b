//! # bot-core
//!
//! Core types and traits for the results bot: [`Bot`], [`Handler`], message and user types,
//! and tracing initialization. Transport-agnostic; used by bot-telegram, handler-chain and result-handlers.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{Bot, LinkButton, OutgoingDocument};
pub use error::{BotError, Result};
pub use logger::init_tracing;
pub use types::{Chat, Handler, HandlerResponse, Message, ToCoreMessage, ToCoreUser, User};
