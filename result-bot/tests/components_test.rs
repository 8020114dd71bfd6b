//! Integration tests: config → components → handler chain, driven with core messages and a recording bot.

use async_trait::async_trait;
use bot_core::{
    Bot, Chat, HandlerResponse, LinkButton, Message, OutgoingDocument, User,
};
use result_bot::config::{BaseConfig, ResultsConfig};
use result_bot::{build_handler_chain, build_results_context, build_teloxide_bot, BotConfig};
use result_handlers::{HELP_TEXT, RESULT_FORMAT_TEXT, START_TEXT};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct RecordingBot {
    texts: Mutex<Vec<String>>,
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_message(&self, _chat: &Chat, text: &str) -> bot_core::Result<()> {
        self.texts.lock().unwrap().push(text.to_string());
        Ok(())
    }

    async fn send_message_with_link(
        &self,
        chat: &Chat,
        text: &str,
        _link: &LinkButton,
    ) -> bot_core::Result<()> {
        self.send_message(chat, text).await
    }

    async fn send_preformatted(
        &self,
        chat: &Chat,
        text: &str,
        _link: Option<&LinkButton>,
    ) -> bot_core::Result<()> {
        self.send_message(chat, text).await
    }

    async fn send_document(
        &self,
        _chat: &Chat,
        document: &OutgoingDocument,
    ) -> bot_core::Result<()> {
        self.texts.lock().unwrap().push(document.file_name.clone());
        Ok(())
    }
}

fn config(work_dir: PathBuf) -> BotConfig {
    BotConfig {
        base: BaseConfig {
            bot_token: "123456:TEST".to_string(),
            telegram_api_url: Some("http://127.0.0.1:8081".to_string()),
            log_file: "logs/test.log".to_string(),
        },
        results: ResultsConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            accept_invalid_certs: false,
            html_timeout_secs: 1,
            pdf_timeout_secs: 1,
            min_pdf_bytes: 100,
            work_dir,
        },
    }
}

fn message(content: &str) -> Message {
    Message {
        id: "1".to_string(),
        user: User {
            id: 7,
            username: Some("student".to_string()),
        },
        chat: Chat { id: 42 },
        content: content.to_string(),
    }
}

/// **Test: the assembled chain has four handlers and answers /start, /help and malformed queries without network access.**
#[tokio::test]
async fn test_built_chain_routes_messages() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path().join("pdf"));
    assert!(config.validate().is_ok());

    let context = build_results_context(&config).unwrap();
    assert_eq!(context.endpoints.base_url(), "http://127.0.0.1:9");
    assert_eq!(context.work_dir, dir.path().join("pdf"));

    let bot = Arc::new(RecordingBot::default());
    let chain = build_handler_chain(bot.clone(), context);
    assert_eq!(chain.len(), 4);

    let start = chain.handle(&message("/start")).await.unwrap();
    assert_eq!(start, HandlerResponse::Reply(START_TEXT.to_string()));
    chain.handle(&message("/HELP@results_bot")).await.unwrap();
    let bad = chain.handle(&message("2020-23")).await.unwrap();
    assert_eq!(bad, HandlerResponse::Reply("invalid_format".to_string()));

    assert_eq!(
        *bot.texts.lock().unwrap(),
        vec![
            START_TEXT.to_string(),
            HELP_TEXT.to_string(),
            RESULT_FORMAT_TEXT.to_string()
        ]
    );
}

/// **Test: teloxide bot is built with the configured token and API URL.**
#[test]
fn test_build_teloxide_bot_uses_api_url() {
    let dir = tempfile::tempdir().unwrap();
    let bot = build_teloxide_bot(&config(dir.path().to_path_buf()));
    assert_eq!(bot.token(), "123456:TEST");
    assert_eq!(bot.api_url().as_str(), "http://127.0.0.1:8081/");
}
