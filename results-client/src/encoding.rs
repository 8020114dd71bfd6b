//! Field encoding for the PDF endpoints: the server expects each query value base64-encoded.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::{QueryError, Result};

/// Base64-encodes one ASCII field for use as a query value.
///
/// `+` and `/` are percent-escaped so the server's query parser sees them literally; `=` padding is
/// legal inside a query value and is left as is.
pub fn encode_field(field: &'static str, value: &str) -> Result<String> {
    if !value.is_ascii() {
        return Err(QueryError::Encoding {
            field,
            value: value.to_string(),
        });
    }
    let encoded = STANDARD.encode(value.as_bytes());
    Ok(encoded.replace('+', "%2B").replace('/', "%2F"))
}

/// Inverse of [`encode_field`] for an already percent-decoded query value. Returns None if it is not base64 of ASCII text.
pub fn decode_field(encoded: &str) -> Option<String> {
    let bytes = STANDARD.decode(encoded).ok()?;
    let text = String::from_utf8(bytes).ok()?;
    text.is_ascii().then_some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_field_known_values() {
        assert_eq!(encode_field("batch", "2020-23").unwrap(), "MjAyMC0yMw==");
        assert_eq!(encode_field("sem", "1ST").unwrap(), "MVNU");
        assert_eq!(encode_field("roll", "SV2121XXX").unwrap(), "U1YyMTIxWFhY");
    }

    #[test]
    fn test_encode_field_escapes_plus_and_slash() {
        // "??>" encodes to "Pz8+", "???" to "Pz8/"
        assert_eq!(encode_field("roll", "??>").unwrap(), "Pz8%2B");
        assert_eq!(encode_field("roll", "???").unwrap(), "Pz8%2F");
    }

    #[test]
    fn test_encode_field_rejects_non_ascii() {
        let err = encode_field("roll", "SV21É").unwrap_err();
        assert_eq!(
            err,
            QueryError::Encoding {
                field: "roll",
                value: "SV21É".to_string()
            }
        );
    }

    #[test]
    fn test_decode_field() {
        assert_eq!(decode_field("MjAyMC0yMw=="), Some("2020-23".to_string()));
        assert_eq!(decode_field("not base64!"), None);
    }
}
