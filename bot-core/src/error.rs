use thiserror::Error;

/// Failures surfaced by a [`crate::Bot`] implementation or while staging a reply.
#[derive(Error, Debug)]
pub enum BotError {
    /// Transport rejected the request (Telegram API error, bad button URL, ...).
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BotError>;
