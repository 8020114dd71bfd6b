//! `/grade <batch> <roll>`: final grade-sheet PDF.

use std::sync::Arc;

use async_trait::async_trait;
use bot_core::{Bot, Handler, HandlerResponse, Message, Result};
use results_client::parse_grade_query;
use tracing::{error, info, instrument, warn};

use crate::context::ResultsContext;
use crate::replies::{DocumentKind, ENCODING_ERROR_TEXT, GRADE_FORMAT_TEXT, UNEXPECTED_ERROR_TEXT};
use crate::router::{classify, Route};
use crate::staging::deliver_pdf;

pub struct GradeHandler {
    bot: Arc<dyn Bot>,
    context: Arc<ResultsContext>,
}

impl GradeHandler {
    pub fn new(bot: Arc<dyn Bot>, context: Arc<ResultsContext>) -> Self {
        Self { bot, context }
    }

    async fn process(&self, message: &Message, args: &[String]) -> Result<HandlerResponse> {
        let query = match parse_grade_query(args) {
            Ok(query) => query,
            Err(e) => {
                info!(user_id = message.user.id, error = %e, "Rejected grade query");
                self.bot.reply_to(message, GRADE_FORMAT_TEXT).await?;
                return Ok(HandlerResponse::Reply("invalid_format".to_string()));
            }
        };

        let url = match self.context.endpoints.grade_sheet_pdf_url(&query) {
            Ok(url) => url,
            Err(e) => {
                info!(user_id = message.user.id, error = %e, "Rejected grade query");
                self.bot.reply_to(message, ENCODING_ERROR_TEXT).await?;
                return Ok(HandlerResponse::Reply("encoding_error".to_string()));
            }
        };

        info!(
            user_id = message.user.id,
            batch = %query.batch,
            roll_number = %query.roll_number,
            "Fetching grade-sheet"
        );

        let kind = DocumentKind::GradeSheet;
        let pdf = self.context.fetcher.fetch_pdf(&url, kind.purpose()).await;
        let sent = deliver_pdf(
            self.bot.as_ref(),
            &message.chat,
            pdf,
            kind,
            &query.roll_number,
            &self.context.work_dir,
        )
        .await?;

        Ok(HandlerResponse::Reply(format!("grade pdf_sent={}", sent)))
    }
}

#[async_trait]
impl Handler for GradeHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Route::Grade(args) = classify(&message.content) else {
            return Ok(HandlerResponse::Ignore);
        };

        match self.process(message, &args).await {
            Ok(response) => Ok(response),
            Err(e) => {
                error!(user_id = message.user.id, error = %e, "Grade query failed");
                if let Err(send_err) = self.bot.reply_to(message, UNEXPECTED_ERROR_TEXT).await {
                    warn!(error = %send_err, "Failed to send error reply");
                }
                Ok(HandlerResponse::Stop)
            }
        }
    }
}
