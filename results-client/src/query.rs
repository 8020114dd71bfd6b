//! Parsed queries: a semester result lookup and a final grade-sheet lookup.

use crate::error::{QueryError, Result};

/// Batch / semester / roll number for a semester mark-sheet. Fields are uppercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultQuery {
    pub batch: String,
    pub semester: String,
    pub roll_number: String,
}

/// Batch / roll number for a final grade-sheet. Fields are kept as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeQuery {
    pub batch: String,
    pub roll_number: String,
}

/// Parses `<batch> <sem> <roll>` free text. Tokens beyond the third are ignored.
pub fn parse_result_query(text: &str) -> Result<ResultQuery> {
    let tokens: Vec<String> = text
        .split_whitespace()
        .take(3)
        .map(str::to_uppercase)
        .collect();

    match <[String; 3]>::try_from(tokens) {
        Ok([batch, semester, roll_number]) => Ok(ResultQuery {
            batch,
            semester,
            roll_number,
        }),
        Err(tokens) => Err(QueryError::InvalidFormat {
            expected: 3,
            found: tokens.len(),
        }),
    }
}

/// Parses the arguments of `/grade <batch> <roll>`. Exactly two are accepted.
pub fn parse_grade_query<S: AsRef<str>>(args: &[S]) -> Result<GradeQuery> {
    match args {
        [batch, roll_number] => Ok(GradeQuery {
            batch: batch.as_ref().to_string(),
            roll_number: roll_number.as_ref().to_string(),
        }),
        _ => Err(QueryError::InvalidFormat {
            expected: 2,
            found: args.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_result_query_uppercases_fields() {
        let query = parse_result_query("2020-23 1st sv2121xxx").unwrap();
        assert_eq!(query.batch, "2020-23");
        assert_eq!(query.semester, "1ST");
        assert_eq!(query.roll_number, "SV2121XXX");
    }

    #[test]
    fn test_parse_result_query_ignores_extra_tokens_and_spacing() {
        let query = parse_result_query("  2020-23   1ST SV2121XXX trailing words").unwrap();
        assert_eq!(
            query,
            ResultQuery {
                batch: "2020-23".to_string(),
                semester: "1ST".to_string(),
                roll_number: "SV2121XXX".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_result_query_too_few_tokens() {
        assert_eq!(
            parse_result_query("2020-23 1ST"),
            Err(QueryError::InvalidFormat {
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            parse_result_query("   "),
            Err(QueryError::InvalidFormat {
                expected: 3,
                found: 0
            })
        );
    }

    #[test]
    fn test_parse_grade_query_keeps_case() {
        let query = parse_grade_query(&["2020-23", "sv2121xxx"]).unwrap();
        assert_eq!(query.batch, "2020-23");
        assert_eq!(query.roll_number, "sv2121xxx");
    }

    #[test]
    fn test_parse_grade_query_requires_exactly_two() {
        assert_eq!(
            parse_grade_query(&["2020-23"]),
            Err(QueryError::InvalidFormat {
                expected: 2,
                found: 1
            })
        );
        assert!(parse_grade_query(&["a", "b", "c"]).is_err());
        assert!(parse_grade_query::<&str>(&[]).is_err());
    }
}
