//! Results-server section: origin, TLS policy, timeouts, PDF size threshold, staging directory.

use anyhow::Result;
use results_client::{
    FetcherConfig, ResultEndpoints, DEFAULT_HTML_TIMEOUT, DEFAULT_MIN_PDF_BYTES,
    DEFAULT_PDF_TIMEOUT, DEFAULT_RESULTS_BASE_URL,
};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use super::env_flag;

#[derive(Debug, Clone)]
pub struct ResultsConfig {
    /// RESULTS_BASE_URL
    pub base_url: String,
    /// RESULTS_ACCEPT_INVALID_CERTS. Off unless explicitly enabled.
    pub accept_invalid_certs: bool,
    /// RESULTS_HTML_TIMEOUT_SECS
    pub html_timeout_secs: u64,
    /// RESULTS_PDF_TIMEOUT_SECS
    pub pdf_timeout_secs: u64,
    /// RESULTS_MIN_PDF_BYTES
    pub min_pdf_bytes: usize,
    /// PDF_WORK_DIR
    pub work_dir: PathBuf,
}

impl ResultsConfig {
    pub fn from_env() -> Result<Self> {
        let base_url =
            env::var("RESULTS_BASE_URL").unwrap_or_else(|_| DEFAULT_RESULTS_BASE_URL.to_string());
        let accept_invalid_certs = env_flag("RESULTS_ACCEPT_INVALID_CERTS");
        let html_timeout_secs = env::var("RESULTS_HTML_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_HTML_TIMEOUT.as_secs());
        let pdf_timeout_secs = env::var("RESULTS_PDF_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_PDF_TIMEOUT.as_secs());
        let min_pdf_bytes = env::var("RESULTS_MIN_PDF_BYTES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_MIN_PDF_BYTES);
        let work_dir = env::var("PDF_WORK_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("tmp"));

        Ok(Self {
            base_url,
            accept_invalid_certs,
            html_timeout_secs,
            pdf_timeout_secs,
            min_pdf_bytes,
            work_dir,
        })
    }

    pub fn validate(&self) -> Result<()> {
        match reqwest::Url::parse(&self.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => anyhow::bail!(
                "RESULTS_BASE_URL must be an http(s) URL: {}",
                self.base_url
            ),
        }
        if self.html_timeout_secs == 0 || self.pdf_timeout_secs == 0 {
            anyhow::bail!("RESULTS_HTML_TIMEOUT_SECS and RESULTS_PDF_TIMEOUT_SECS must be positive");
        }
        Ok(())
    }

    pub fn fetcher_config(&self) -> FetcherConfig {
        FetcherConfig {
            html_timeout: Duration::from_secs(self.html_timeout_secs),
            pdf_timeout: Duration::from_secs(self.pdf_timeout_secs),
            min_pdf_bytes: self.min_pdf_bytes,
            accept_invalid_certs: self.accept_invalid_certs,
        }
    }

    pub fn endpoints(&self) -> ResultEndpoints {
        ResultEndpoints::new(self.base_url.clone())
    }
}
