//! Mock implementation of [`bot_core::Bot`] for integration tests.
//!
//! Records every outgoing reply so tests can assert on order and content without hitting Telegram.
//! For documents it also records whether the staged file existed at upload time and its bytes.

use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use bot_core::{Bot, BotError, Chat, LinkButton, OutgoingDocument, Result};

/// One recorded outgoing reply.
#[derive(Debug, Clone, PartialEq)]
pub enum Sent {
    Text {
        chat_id: i64,
        text: String,
    },
    TextWithLink {
        chat_id: i64,
        text: String,
        link: LinkButton,
    },
    Preformatted {
        chat_id: i64,
        text: String,
        link: Option<LinkButton>,
    },
    Document {
        chat_id: i64,
        path: PathBuf,
        file_name: String,
        caption: Option<String>,
        existed_at_upload: bool,
        bytes: Vec<u8>,
    },
}

/// Mock Bot that records replies; `failing_uploads` makes `send_document` return an error after recording.
pub struct MockBot {
    sent: Mutex<Vec<Sent>>,
    fail_uploads: bool,
}

impl MockBot {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_uploads: false,
        }
    }

    pub fn failing_uploads() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_uploads: true,
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    fn record(&self, sent: Sent) {
        self.sent.lock().unwrap().push(sent);
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.record(Sent::Text {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_message_with_link(
        &self,
        chat: &Chat,
        text: &str,
        link: &LinkButton,
    ) -> Result<()> {
        self.record(Sent::TextWithLink {
            chat_id: chat.id,
            text: text.to_string(),
            link: link.clone(),
        });
        Ok(())
    }

    async fn send_preformatted(
        &self,
        chat: &Chat,
        text: &str,
        link: Option<&LinkButton>,
    ) -> Result<()> {
        self.record(Sent::Preformatted {
            chat_id: chat.id,
            text: text.to_string(),
            link: link.cloned(),
        });
        Ok(())
    }

    async fn send_document(&self, chat: &Chat, document: &OutgoingDocument) -> Result<()> {
        let bytes = std::fs::read(&document.path).unwrap_or_default();
        self.record(Sent::Document {
            chat_id: chat.id,
            path: document.path.clone(),
            file_name: document.file_name.clone(),
            caption: document.caption.clone(),
            existed_at_upload: document.path.exists(),
            bytes,
        });
        if self.fail_uploads {
            return Err(BotError::Bot("upload rejected by mock".to_string()));
        }
        Ok(())
    }
}
