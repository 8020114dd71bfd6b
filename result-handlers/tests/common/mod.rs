#![allow(dead_code)] // each test binary uses a different subset

pub mod mock_bot;

use std::path::Path;
use std::sync::Arc;

use bot_core::{Chat, Message, User};
use result_handlers::ResultsContext;
use results_client::{FetcherConfig, ResultEndpoints, ResultFetcher};

pub const TEST_CHAT_ID: i64 = 456;

pub fn message(content: &str) -> Message {
    Message {
        id: "msg-1".to_string(),
        user: User {
            id: 123,
            username: Some("student".to_string()),
        },
        chat: Chat { id: TEST_CHAT_ID },
        content: content.to_string(),
    }
}

/// Context pointing at a mock results server with PDFs staged under `work_dir`.
pub fn context(server_url: String, work_dir: &Path) -> Arc<ResultsContext> {
    Arc::new(ResultsContext::new(
        ResultEndpoints::new(server_url),
        ResultFetcher::new(FetcherConfig::default()).expect("client builds"),
        work_dir,
    ))
}

/// Bytes that clear the minimum PDF size.
pub fn fake_pdf() -> Vec<u8> {
    let mut body = b"%PDF-1.4\n".to_vec();
    body.resize(400, b'x');
    body
}
