use std::sync::Arc;

use async_trait::async_trait;
use bot_core::{Bot, Handler, HandlerResponse, Message, Result};
use tracing::{info, instrument};

use crate::replies::{HELP_TEXT, START_TEXT};
use crate::router::{classify, Route};

/// Answers `/start` with the query format and `/help` with the full usage text.
pub struct HelpHandler {
    bot: Arc<dyn Bot>,
}

impl HelpHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for HelpHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let text = match classify(&message.content) {
            Route::Start => START_TEXT,
            Route::Help => HELP_TEXT,
            _ => return Ok(HandlerResponse::Ignore),
        };
        info!(user_id = message.user.id, chat_id = message.chat.id, "Sending usage text");
        self.bot.reply_to(message, text).await?;
        Ok(HandlerResponse::Reply(text.to_string()))
    }
}
