//! Shared, read-only request context built once at startup.

use std::path::PathBuf;

use results_client::{ResultEndpoints, ResultFetcher};

/// Results-server endpoints, the fetcher and the PDF staging directory.
#[derive(Debug, Clone)]
pub struct ResultsContext {
    pub endpoints: ResultEndpoints,
    pub fetcher: ResultFetcher,
    pub work_dir: PathBuf,
}

impl ResultsContext {
    pub fn new(endpoints: ResultEndpoints, fetcher: ResultFetcher, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            endpoints,
            fetcher,
            work_dir: work_dir.into(),
        }
    }
}
