//! Wraps teloxide::Bot and implements [`bot_core::Bot`]. Production code sends via Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use bot_core::{Bot as CoreBot, BotError, Chat, LinkButton, OutgoingDocument, Result};
use teloxide::{
    prelude::*,
    types::{ChatId, InlineKeyboardButton, InlineKeyboardMarkup, InputFile, ParseMode},
    utils::html,
};
use tracing::debug;

/// Telegram rejects messages over 4096 characters; leave room for markup.
pub const MAX_MESSAGE_CHARS: usize = 3900;

/// Splits `text` into chunks of at most `max_chars` characters, preferring line boundaries.
pub fn split_for_telegram(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for line in text.split_inclusive('\n') {
        let line_len = line.chars().count();
        if current_len + line_len > max_chars && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if line_len > max_chars {
            let chars: Vec<char> = line.chars().collect();
            for piece in chars.chunks(max_chars) {
                chunks.push(piece.iter().collect());
            }
            continue;
        }
        current.push_str(line);
        current_len += line_len;
    }
    if !current.is_empty() || chunks.is_empty() {
        chunks.push(current);
    }
    chunks
}

fn keyboard(link: &LinkButton) -> Result<InlineKeyboardMarkup> {
    let url = reqwest::Url::parse(&link.url)
        .map_err(|e| BotError::Bot(format!("Invalid button URL {}: {}", link.url, e)))?;
    Ok(InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::url(
        link.label.clone(),
        url,
    )]]))
}

/// Thin wrapper around teloxide::Bot that implements bot-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_message_with_link(
        &self,
        chat: &Chat,
        text: &str,
        link: &LinkButton,
    ) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .reply_markup(keyboard(link)?)
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_preformatted(
        &self,
        chat: &Chat,
        text: &str,
        link: Option<&LinkButton>,
    ) -> Result<()> {
        let markup = link.map(keyboard).transpose()?;
        let chunks = split_for_telegram(text, MAX_MESSAGE_CHARS);
        let last = chunks.len() - 1;
        debug!(chat_id = chat.id, chunks = chunks.len(), "Sending preformatted text");

        for (i, chunk) in chunks.iter().enumerate() {
            let body = format!("<pre>{}</pre>", html::escape(chunk));
            let request = self
                .bot
                .send_message(ChatId(chat.id), body)
                .parse_mode(ParseMode::Html);
            // Button goes on the last chunk only.
            let result = match (&markup, i == last) {
                (Some(markup), true) => request.reply_markup(markup.clone()).await,
                _ => request.await,
            };
            result.map_err(|e| BotError::Bot(e.to_string()))?;
        }
        Ok(())
    }

    async fn send_document(&self, chat: &Chat, document: &OutgoingDocument) -> Result<()> {
        let file = InputFile::file(&document.path).file_name(document.file_name.clone());
        let mut request = self.bot.send_document(ChatId(chat.id), file);
        if let Some(caption) = &document.caption {
            request = request.caption(caption.clone());
        }
        request.await.map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }
}
