use thiserror::Error;

/// Errors raised while turning user input into outbound requests. Both are raised before any network call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Invalid format: expected {expected} fields, got {found}")]
    InvalidFormat { expected: usize, found: usize },

    #[error("Field {field} contains non-ASCII characters: {value:?}")]
    Encoding { field: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, QueryError>;
