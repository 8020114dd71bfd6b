//! # Result handlers
//!
//! Chat-facing side of the results bot: the command router, the `/start`/`/help`, `/grade` and
//! free-text result handlers, logging, and reply assembly (text/button replies and PDF staging).

mod context;
mod grade_handler;
mod help_handler;
mod logging;
mod replies;
mod result_handler;
mod router;
mod staging;

#[cfg(test)]
mod test;

pub use context::ResultsContext;
pub use grade_handler::GradeHandler;
pub use help_handler::HelpHandler;
pub use logging::LoggingHandler;
pub use result_handler::ResultHandler;
pub use replies::{
    html_failure_text, pdf_failure_text, DocumentKind, ENCODING_ERROR_TEXT, GRADE_FORMAT_TEXT,
    HELP_TEXT, RESULT_FORMAT_TEXT, START_TEXT, UNEXPECTED_ERROR_TEXT, UPLOAD_FAILED_TEXT,
    VIEW_ONLINE_LABEL,
};
pub use router::{classify, Route};
pub use staging::{deliver_pdf, upload_file_name, StagedPdf};
