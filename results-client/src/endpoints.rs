//! Results-server URL templates.

use std::time::Duration;

use crate::encoding::encode_field;
use crate::error::Result;
use crate::query::{GradeQuery, ResultQuery};

/// Origin of the university ERP that serves results.
pub const DEFAULT_RESULTS_BASE_URL: &str = "https://berhampuruniversity.silicontechlab.com";

const MARK_SHEET_HTML_PATH: &str = "/buerp/build/examination/mark_sheet_db.php";
const MARK_SHEET_PDF_PATH: &str = "/buerp/build/examination/mark_sheet_pdf.php";
const GRADE_SHEET_PDF_PATH: &str = "/buerp/build/examination/final_grad_sheet_pdf.php";

/// What an outbound request is for; decides timeout and how the body is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestPurpose {
    Html,
    MarkSheetPdf,
    GradeSheetPdf,
}

impl RequestPurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestPurpose::Html => "html",
            RequestPurpose::MarkSheetPdf => "mark_sheet_pdf",
            RequestPurpose::GradeSheetPdf => "grade_sheet_pdf",
        }
    }
}

/// A single GET against the results server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    pub url: String,
    pub purpose: RequestPurpose,
    pub timeout: Duration,
}

/// Builds results-server URLs for a configured origin.
#[derive(Debug, Clone)]
pub struct ResultEndpoints {
    base_url: String,
}

impl Default for ResultEndpoints {
    fn default() -> Self {
        Self::new(DEFAULT_RESULTS_BASE_URL)
    }
}

impl ResultEndpoints {
    /// `base_url` is scheme + host (+ optional port), with or without a trailing slash.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Interactive HTML results page; fields are sent as plain text.
    pub fn html_url(&self, query: &ResultQuery) -> String {
        format!(
            "{}{}?type=GET_DETAILS&regn_no={}&sem={}&batch={}&cmbType=Regular",
            self.base_url,
            MARK_SHEET_HTML_PATH,
            urlencoding::encode(&query.roll_number),
            urlencoding::encode(&query.semester),
            urlencoding::encode(&query.batch),
        )
    }

    /// Semester mark-sheet PDF; every field is base64-encoded.
    pub fn mark_sheet_pdf_url(&self, query: &ResultQuery) -> Result<String> {
        let roll = encode_field("roll_number", &query.roll_number)?;
        let sem = encode_field("semester", &query.semester)?;
        let batch = encode_field("batch", &query.batch)?;
        Ok(format!(
            "{}{}?regn_no={}&sem={}&batch={}&cmbType=Regular",
            self.base_url, MARK_SHEET_PDF_PATH, roll, sem, batch
        ))
    }

    /// Final grade-sheet PDF; every field is base64-encoded.
    pub fn grade_sheet_pdf_url(&self, query: &GradeQuery) -> Result<String> {
        let roll = encode_field("roll_number", &query.roll_number)?;
        let batch = encode_field("batch", &query.batch)?;
        Ok(format!(
            "{}{}?roll={}&batch={}",
            self.base_url, GRADE_SHEET_PDF_PATH, roll, batch
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QueryError;

    fn sample_query() -> ResultQuery {
        ResultQuery {
            batch: "2020-23".to_string(),
            semester: "1ST".to_string(),
            roll_number: "SV2121XXX".to_string(),
        }
    }

    #[test]
    fn test_html_url_uses_plain_fields() {
        let endpoints = ResultEndpoints::new("https://results.example.edu/");
        assert_eq!(
            endpoints.html_url(&sample_query()),
            "https://results.example.edu/buerp/build/examination/mark_sheet_db.php\
             ?type=GET_DETAILS&regn_no=SV2121XXX&sem=1ST&batch=2020-23&cmbType=Regular"
        );
    }

    #[test]
    fn test_html_url_escapes_reserved_characters() {
        let endpoints = ResultEndpoints::default();
        let query = ResultQuery {
            batch: "2020&23".to_string(),
            semester: "1ST".to_string(),
            roll_number: "A B".to_string(),
        };
        let url = endpoints.html_url(&query);
        assert!(url.contains("batch=2020%2623"));
        assert!(url.contains("regn_no=A%20B"));
    }

    #[test]
    fn test_mark_sheet_pdf_url_encodes_fields() {
        let endpoints = ResultEndpoints::default();
        assert_eq!(
            endpoints.mark_sheet_pdf_url(&sample_query()).unwrap(),
            "https://berhampuruniversity.silicontechlab.com/buerp/build/examination/mark_sheet_pdf.php\
             ?regn_no=U1YyMTIxWFhY&sem=MVNU&batch=MjAyMC0yMw==&cmbType=Regular"
        );
    }

    #[test]
    fn test_grade_sheet_pdf_url_encodes_fields() {
        let endpoints = ResultEndpoints::new("http://127.0.0.1:9000");
        let query = GradeQuery {
            batch: "2020-23".to_string(),
            roll_number: "SV2121XXX".to_string(),
        };
        assert_eq!(
            endpoints.grade_sheet_pdf_url(&query).unwrap(),
            "http://127.0.0.1:9000/buerp/build/examination/final_grad_sheet_pdf.php\
             ?roll=U1YyMTIxWFhY&batch=MjAyMC0yMw=="
        );
    }

    #[test]
    fn test_pdf_url_rejects_non_ascii_field() {
        let endpoints = ResultEndpoints::default();
        let mut query = sample_query();
        query.semester = "1ÈR".to_string();
        assert!(matches!(
            endpoints.mark_sheet_pdf_url(&query),
            Err(QueryError::Encoding { field: "semester", .. })
        ));
    }
}
