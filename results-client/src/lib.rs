//! # results-client
//!
//! Request translation and result fetching for the university results server:
//! parse chat input into [`ResultQuery`] / [`GradeQuery`], build the HTML and PDF URLs
//! ([`ResultEndpoints`]), fetch them ([`ResultFetcher`]) and turn the HTML results table into
//! tab-separated text ([`extract_first_table`]).

mod encoding;
mod endpoints;
mod error;
mod fetch;
mod query;
mod table;

pub use encoding::{decode_field, encode_field};
pub use endpoints::{OutboundRequest, RequestPurpose, ResultEndpoints, DEFAULT_RESULTS_BASE_URL};
pub use error::{QueryError, Result};
pub use fetch::{
    EmptyReason, FetchOutcome, FetcherConfig, ResultFetcher, TransportErrorKind,
    DEFAULT_HTML_TIMEOUT, DEFAULT_MIN_PDF_BYTES, DEFAULT_PDF_TIMEOUT,
};
pub use query::{parse_grade_query, parse_result_query, GradeQuery, ResultQuery};
pub use table::{extract_first_table, format_rows, ResultRow};
