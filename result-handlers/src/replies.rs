//! User-facing reply texts and the mapping from fetch outcomes to them.

use results_client::{EmptyReason, FetchOutcome, RequestPurpose, TransportErrorKind};

pub const START_TEXT: &str = "Format: <batch> <sem> <roll no.>\nEg: 2020-23 1ST SV2121***";

pub const HELP_TEXT: &str = "Send <batch> <sem> <roll no.> to get your semester result and mark-sheet.\n\
Eg: 2020-23 1ST SV2121***\n\n\
/grade <batch> <roll no.> sends your final grade-sheet.\n\
Eg: /grade 2020-23 SV2121***";

pub const RESULT_FORMAT_TEXT: &str =
    "Invalid format. Use: <batch> <sem> <roll no.>\nEg: 2020-23 1ST SV2121***";

pub const GRADE_FORMAT_TEXT: &str =
    "Invalid format. Use: /grade <batch> <roll no.>\nEg: /grade 2020-23 SV2121***";

pub const ENCODING_ERROR_TEXT: &str =
    "Invalid characters. Batch, semester and roll number may only contain plain ASCII letters, digits and symbols.";

pub const UNEXPECTED_ERROR_TEXT: &str = "Sorry, something went wrong. Please try again later.";

pub const UPLOAD_FAILED_TEXT: &str = "Sorry, the PDF could not be sent. Please try again later.";

pub const VIEW_ONLINE_LABEL: &str = "View result online";

/// The two PDF documents the server generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    MarkSheet,
    GradeSheet,
}

impl DocumentKind {
    /// Prefix of the uploaded file name (`marksheet_<roll>.pdf`).
    pub fn file_prefix(&self) -> &'static str {
        match self {
            DocumentKind::MarkSheet => "marksheet",
            DocumentKind::GradeSheet => "gradesheet",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::MarkSheet => "mark-sheet",
            DocumentKind::GradeSheet => "grade-sheet",
        }
    }

    pub fn purpose(&self) -> RequestPurpose {
        match self {
            DocumentKind::MarkSheet => RequestPurpose::MarkSheetPdf,
            DocumentKind::GradeSheet => RequestPurpose::GradeSheetPdf,
        }
    }
}

/// Reply for a failed HTML fetch; None on success.
pub fn html_failure_text<T>(outcome: &FetchOutcome<T>) -> Option<&'static str> {
    let text = match outcome {
        FetchOutcome::Success(_) => return None,
        FetchOutcome::TransportError(TransportErrorKind::Tls) => {
            "Could not connect securely to the results server (SSL issue). Please try again later."
        }
        FetchOutcome::TransportError(TransportErrorKind::Timeout) => {
            "The results server took too long to respond. Please try again later."
        }
        FetchOutcome::TransportError(TransportErrorKind::Other) | FetchOutcome::ServerError(_) => {
            "Error fetching results from the server. Please try again later."
        }
        FetchOutcome::EmptyOrMalformed(EmptyReason::NoTable) => {
            "No result table found on the results page."
        }
        FetchOutcome::EmptyOrMalformed(EmptyReason::NoRows | EmptyReason::TooSmall) => {
            "No data found for the given details."
        }
    };
    Some(text)
}

/// Reply for a failed PDF fetch; None on success.
pub fn pdf_failure_text<T>(kind: DocumentKind, outcome: &FetchOutcome<T>) -> Option<String> {
    let label = kind.label();
    let text = match outcome {
        FetchOutcome::Success(_) => return None,
        FetchOutcome::EmptyOrMalformed(_) | FetchOutcome::ServerError(_) => format!(
            "The {} server is unavailable right now. Please try again later.",
            label
        ),
        FetchOutcome::TransportError(TransportErrorKind::Timeout) => {
            format!("Timed out while downloading the {} PDF.", label)
        }
        FetchOutcome::TransportError(TransportErrorKind::Tls) => {
            format!("SSL issue while downloading the {} PDF.", label)
        }
        FetchOutcome::TransportError(TransportErrorKind::Other) => {
            format!("Error downloading the {} PDF.", label)
        }
    };
    Some(text)
}
