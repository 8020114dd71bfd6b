//! Unit tests for LoggingHandler.

use bot_core::{Chat, Handler, HandlerResponse, Message, User};

use crate::LoggingHandler;

fn sample_message(content: &str) -> Message {
    Message {
        id: "msg-1".to_string(),
        user: User {
            id: 1,
            username: None,
        },
        chat: Chat { id: 123 },
        content: content.to_string(),
    }
}

#[tokio::test]
async fn test_logging_handler_before_continues() {
    let h = LoggingHandler;
    let result = h.before(&sample_message("2020-23 1ST SV2121XXX")).await;
    assert!(result.unwrap());
}

#[tokio::test]
async fn test_logging_handler_after_ok() {
    let h = LoggingHandler;
    let msg = sample_message("/help");
    assert!(h
        .after(&msg, &HandlerResponse::Reply("usage".to_string()))
        .await
        .is_ok());
    assert!(h.after(&msg, &HandlerResponse::Continue).await.is_ok());
}

#[tokio::test]
async fn test_logging_handler_does_not_claim_message() {
    let h = LoggingHandler;
    let response = h.handle(&sample_message("anything")).await.unwrap();
    assert_eq!(response, HandlerResponse::Continue);
}
