//! Bot abstraction for sending replies.
//!
//! [`Bot`] is transport-agnostic; the Telegram implementation lives in bot-telegram.
//! Handlers only talk to this trait so tests can substitute a recording mock.

use crate::error::Result;
use crate::types::{Chat, Message};
use async_trait::async_trait;
use std::path::PathBuf;

/// Inline button that opens a URL when pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkButton {
    pub label: String,
    pub url: String,
}

impl LinkButton {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// A local file to upload as a document. `file_name` is what the recipient sees, independent of `path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingDocument {
    pub path: PathBuf,
    pub file_name: String,
    pub caption: Option<String>,
}

/// Abstraction for sending replies. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }

    /// Sends a plain text message with an inline URL button underneath.
    async fn send_message_with_link(&self, chat: &Chat, text: &str, link: &LinkButton)
        -> Result<()>;

    /// Sends `text` rendered as a preformatted (monospace) block, optionally with an inline URL button.
    /// `text` is raw; the implementation escapes it for the transport.
    async fn send_preformatted(
        &self,
        chat: &Chat,
        text: &str,
        link: Option<&LinkButton>,
    ) -> Result<()>;

    /// Uploads a local file as a document attachment.
    async fn send_document(&self, chat: &Chat, document: &OutgoingDocument) -> Result<()>;
}
