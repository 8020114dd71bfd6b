//! Outbound GETs against the results server and interpretation of their responses.

use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::time::Duration;

use tracing::{info, instrument, warn};

use crate::endpoints::{OutboundRequest, RequestPurpose};
use crate::table::{extract_first_table, format_rows};

pub const DEFAULT_HTML_TIMEOUT: Duration = Duration::from_secs(15);
pub const DEFAULT_PDF_TIMEOUT: Duration = Duration::from_secs(45);
/// The PDF generator answers failures with a short 200 body; anything smaller than this is not a document.
pub const DEFAULT_MIN_PDF_BYTES: usize = 100;

/// Transport-level failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    Timeout,
    Tls,
    Other,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportErrorKind::Timeout => write!(f, "timeout"),
            TransportErrorKind::Tls => write!(f, "tls"),
            TransportErrorKind::Other => write!(f, "other"),
        }
    }
}

/// Why a 2xx response carried nothing usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// HTML page has no `<table>`.
    NoTable,
    /// Table present but every row is empty.
    NoRows,
    /// Body below the minimum document size.
    TooSmall,
}

/// Result of one fetch. Every variant except `Success` is recoverable and maps to a user-facing reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome<T> {
    Success(T),
    TransportError(TransportErrorKind),
    ServerError(u16),
    EmptyOrMalformed(EmptyReason),
}

impl<T> FetchOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success(_))
    }

    fn map<U>(self, f: impl FnOnce(T) -> FetchOutcome<U>) -> FetchOutcome<U> {
        match self {
            FetchOutcome::Success(value) => f(value),
            FetchOutcome::TransportError(kind) => FetchOutcome::TransportError(kind),
            FetchOutcome::ServerError(status) => FetchOutcome::ServerError(status),
            FetchOutcome::EmptyOrMalformed(reason) => FetchOutcome::EmptyOrMalformed(reason),
        }
    }
}

/// Timeouts, size threshold and TLS policy for [`ResultFetcher`].
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    pub html_timeout: Duration,
    pub pdf_timeout: Duration,
    pub min_pdf_bytes: usize,
    /// Skip certificate validation. Only for an origin with a broken certificate chain.
    pub accept_invalid_certs: bool,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            html_timeout: DEFAULT_HTML_TIMEOUT,
            pdf_timeout: DEFAULT_PDF_TIMEOUT,
            min_pdf_bytes: DEFAULT_MIN_PDF_BYTES,
            accept_invalid_certs: false,
        }
    }
}

/// Performs the HTML and PDF fetches. Cheap to clone; the underlying client is shared.
#[derive(Debug, Clone)]
pub struct ResultFetcher {
    client: reqwest::Client,
    config: FetcherConfig,
}

/// True if `err` is a rustls error, directly or wrapped in an `io::Error` by the TLS stream.
fn is_rustls_error(err: &(dyn StdError + 'static)) -> bool {
    if err.downcast_ref::<rustls::Error>().is_some() {
        return true;
    }
    err.downcast_ref::<io::Error>()
        .and_then(|io_err| io_err.get_ref())
        .is_some_and(|inner| inner.downcast_ref::<rustls::Error>().is_some())
}

/// Classifies a reqwest error by walking its source chain.
/// Typed rustls errors decide TLS; message text is only a fallback for wrappers that hide the type.
fn classify_error(error: &reqwest::Error) -> TransportErrorKind {
    if error.is_timeout() {
        return TransportErrorKind::Timeout;
    }
    let mut source: Option<&(dyn StdError + 'static)> = error.source();
    while let Some(err) = source {
        if is_rustls_error(err) {
            return TransportErrorKind::Tls;
        }
        let text = err.to_string().to_lowercase();
        if ["certificate", "tls", "ssl", "handshake"]
            .iter()
            .any(|needle| text.contains(needle))
        {
            return TransportErrorKind::Tls;
        }
        source = err.source();
    }
    TransportErrorKind::Other
}

impl ResultFetcher {
    pub fn new(config: FetcherConfig) -> Result<Self, reqwest::Error> {
        if config.accept_invalid_certs {
            warn!("TLS certificate validation is disabled for the results server");
        }
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .user_agent(concat!("result-bot/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, config })
    }

    fn request(&self, url: &str, purpose: RequestPurpose) -> OutboundRequest {
        let timeout = match purpose {
            RequestPurpose::Html => self.config.html_timeout,
            RequestPurpose::MarkSheetPdf | RequestPurpose::GradeSheetPdf => self.config.pdf_timeout,
        };
        OutboundRequest {
            url: url.to_string(),
            purpose,
            timeout,
        }
    }

    /// Single GET; returns the body of a 2xx response.
    async fn get(&self, request: &OutboundRequest) -> FetchOutcome<Vec<u8>> {
        let response = match self
            .client
            .get(&request.url)
            .timeout(request.timeout)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                let kind = classify_error(&e);
                warn!(
                    purpose = request.purpose.as_str(),
                    url = %request.url,
                    kind = %kind,
                    error = %e,
                    "Results server request failed"
                );
                return FetchOutcome::TransportError(kind);
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(
                purpose = request.purpose.as_str(),
                url = %request.url,
                status = status.as_u16(),
                "Results server returned error status"
            );
            return FetchOutcome::ServerError(status.as_u16());
        }

        match response.bytes().await {
            Ok(body) => {
                info!(
                    purpose = request.purpose.as_str(),
                    status = status.as_u16(),
                    body_len = body.len(),
                    "Results server responded"
                );
                FetchOutcome::Success(body.to_vec())
            }
            Err(e) => {
                let kind = classify_error(&e);
                warn!(
                    purpose = request.purpose.as_str(),
                    url = %request.url,
                    kind = %kind,
                    error = %e,
                    "Reading results server body failed"
                );
                FetchOutcome::TransportError(kind)
            }
        }
    }

    /// Fetches the HTML results page and returns its first table as tab-separated text.
    #[instrument(skip(self))]
    pub async fn fetch_html_table(&self, url: &str) -> FetchOutcome<String> {
        let request = self.request(url, RequestPurpose::Html);
        self.get(&request).await.map(|body| {
            let html = String::from_utf8_lossy(&body);
            match extract_first_table(&html) {
                Ok(rows) => {
                    info!(rows = rows.len(), "Extracted results table");
                    FetchOutcome::Success(format_rows(&rows))
                }
                Err(reason) => {
                    info!(reason = ?reason, "Results page has no usable table");
                    FetchOutcome::EmptyOrMalformed(reason)
                }
            }
        })
    }

    /// Fetches a generated PDF (mark-sheet or grade-sheet).
    #[instrument(skip(self))]
    pub async fn fetch_pdf(&self, url: &str, purpose: RequestPurpose) -> FetchOutcome<Vec<u8>> {
        let request = self.request(url, purpose);
        let min_bytes = self.config.min_pdf_bytes;
        self.get(&request).await.map(|body| {
            if body.len() < min_bytes {
                warn!(
                    body_len = body.len(),
                    min_bytes = min_bytes,
                    "PDF body too small, treating as server failure"
                );
                FetchOutcome::EmptyOrMalformed(EmptyReason::TooSmall)
            } else {
                FetchOutcome::Success(body)
            }
        })
    }
}
