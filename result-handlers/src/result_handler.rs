//! Free-text `<batch> <sem> <roll>` queries: HTML result table first, then the mark-sheet PDF.

use std::sync::Arc;

use async_trait::async_trait;
use bot_core::{Bot, Chat, Handler, HandlerResponse, LinkButton, Message, Result};
use results_client::{parse_result_query, FetchOutcome};
use tracing::{error, info, instrument, warn};

use crate::context::ResultsContext;
use crate::replies::{
    html_failure_text, DocumentKind, ENCODING_ERROR_TEXT, RESULT_FORMAT_TEXT,
    UNEXPECTED_ERROR_TEXT, VIEW_ONLINE_LABEL,
};
use crate::router::{classify, Route};
use crate::staging::deliver_pdf;

pub struct ResultHandler {
    bot: Arc<dyn Bot>,
    context: Arc<ResultsContext>,
}

impl ResultHandler {
    pub fn new(bot: Arc<dyn Bot>, context: Arc<ResultsContext>) -> Self {
        Self { bot, context }
    }

    /// Sends the HTML step's reply. A send failure is logged so the PDF step still runs.
    async fn reply_html(&self, chat: &Chat, outcome: &FetchOutcome<String>, button: &LinkButton) {
        let sent = match outcome {
            FetchOutcome::Success(table) => {
                self.bot.send_preformatted(chat, table, Some(button)).await
            }
            failure => {
                let text = html_failure_text(failure).unwrap_or(UNEXPECTED_ERROR_TEXT);
                self.bot.send_message_with_link(chat, text, button).await
            }
        };
        if let Err(e) = sent {
            error!(chat_id = chat.id, error = %e, "Failed to send result table reply");
        }
    }

    async fn process(&self, message: &Message) -> Result<HandlerResponse> {
        let chat = &message.chat;

        let query = match parse_result_query(&message.content) {
            Ok(query) => query,
            Err(e) => {
                info!(user_id = message.user.id, error = %e, "Rejected result query");
                self.bot.reply_to(message, RESULT_FORMAT_TEXT).await?;
                return Ok(HandlerResponse::Reply("invalid_format".to_string()));
            }
        };

        let html_url = self.context.endpoints.html_url(&query);
        let pdf_url = match self.context.endpoints.mark_sheet_pdf_url(&query) {
            Ok(url) => url,
            Err(e) => {
                info!(user_id = message.user.id, error = %e, "Rejected result query");
                self.bot.reply_to(message, ENCODING_ERROR_TEXT).await?;
                return Ok(HandlerResponse::Reply("encoding_error".to_string()));
            }
        };

        info!(
            user_id = message.user.id,
            batch = %query.batch,
            semester = %query.semester,
            roll_number = %query.roll_number,
            "Fetching result"
        );

        let button = LinkButton::new(VIEW_ONLINE_LABEL, html_url.clone());
        let html = self.context.fetcher.fetch_html_table(&html_url).await;
        self.reply_html(chat, &html, &button).await;

        let kind = DocumentKind::MarkSheet;
        let pdf = self.context.fetcher.fetch_pdf(&pdf_url, kind.purpose()).await;
        let pdf_sent = deliver_pdf(
            self.bot.as_ref(),
            chat,
            pdf,
            kind,
            &query.roll_number,
            &self.context.work_dir,
        )
        .await?;

        Ok(HandlerResponse::Reply(format!(
            "result html_ok={} pdf_sent={}",
            html.is_success(),
            pdf_sent
        )))
    }
}

#[async_trait]
impl Handler for ResultHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if classify(&message.content) != Route::ResultQuery {
            return Ok(HandlerResponse::Ignore);
        }

        match self.process(message).await {
            Ok(response) => Ok(response),
            Err(e) => {
                error!(user_id = message.user.id, error = %e, "Result query failed");
                if let Err(send_err) = self.bot.reply_to(message, UNEXPECTED_ERROR_TEXT).await {
                    warn!(error = %send_err, "Failed to send error reply");
                }
                Ok(HandlerResponse::Stop)
            }
        }
    }
}
