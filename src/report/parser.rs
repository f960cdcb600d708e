//! Record field parsing
//!
//! Extracts `(name, result, timeMs)` from a payload by scanning commas from
//! the right, because test names may legitimately contain commas. Only the
//! last two fields are positionally fixed.

use thiserror::Error;

use crate::models::TestRecord;

/// Reasons a single report line cannot become a test record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Neither `": "` nor `,` marks the start of the payload.
    #[error("no `: ` or `,` delimiter found")]
    MissingDelimiter,

    /// The payload has fewer than the three expected fields.
    #[error("expected `name,result,timeMs`, found `{0}`")]
    TooFewFields(String),

    /// The duration field is not an integer millisecond count.
    #[error("duration `{0}` is not a millisecond count")]
    InvalidDuration(String),
}

/// Parse one payload into a test record.
///
/// The duration is the text after the last comma, the result the text after
/// the second-to-last comma, and the name everything before that, verbatim.
/// A `$` in the name marks a nested class and truncates it.
pub fn parse_record(payload: &str) -> Result<TestRecord, RecordError> {
    let last = payload
        .rfind(',')
        .ok_or_else(|| RecordError::TooFewFields(payload.to_string()))?;
    let duration = &payload[last + 1..];

    let head = &payload[..last];
    let second = head
        .rfind(',')
        .ok_or_else(|| RecordError::TooFewFields(payload.to_string()))?;
    let result = &head[second + 1..];

    let mut name = &head[..second];
    if let Some(dollar) = name.find('$') {
        name = &name[..dollar];
    }

    let duration_ms: u64 = duration
        .parse()
        .map_err(|_| RecordError::InvalidDuration(duration.to_string()))?;

    Ok(TestRecord::new(name, result == "OK", duration_ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commas_in_name_preserved() {
        let record = parse_record("a,b,c,OK,1234").unwrap();
        assert_eq!(record.full_name, "a,b,c");
        assert!(record.passed);
        assert_eq!(record.duration_ms, 1234);
    }

    #[test]
    fn test_plain_record() {
        let record = parse_record("org.acme.CartTest.addItem,OK,120").unwrap();
        assert_eq!(record.full_name, "org.acme.CartTest.addItem");
        assert!(record.passed);
        assert_eq!(record.duration_ms, 120);
    }

    #[test]
    fn test_non_ok_result_fails() {
        let record = parse_record("org.acme.CartTest.addItem,Failure,9").unwrap();
        assert!(!record.passed);
    }

    #[test]
    fn test_result_comparison_is_exact() {
        let record = parse_record("org.acme.CartTest.addItem,ok,9").unwrap();
        assert!(!record.passed);
    }

    #[test]
    fn test_dollar_truncates_name() {
        let record = parse_record("com.X.Foo$1.run,OK,5").unwrap();
        assert_eq!(record.full_name, "com.X.Foo");
    }

    #[test]
    fn test_non_numeric_duration_is_fatal() {
        assert_eq!(
            parse_record("org.acme.CartTest.addItem,OK,12a4"),
            Err(RecordError::InvalidDuration("12a4".to_string()))
        );
    }

    #[test]
    fn test_padded_duration_is_fatal() {
        // the duration field is taken verbatim, whitespace included
        assert!(matches!(
            parse_record("org.acme.CartTest.addItem,OK, 120"),
            Err(RecordError::InvalidDuration(_))
        ));
    }

    #[test]
    fn test_too_few_fields() {
        assert_eq!(
            parse_record("just-a-name"),
            Err(RecordError::TooFewFields("just-a-name".to_string()))
        );
        assert_eq!(
            parse_record("name,120"),
            Err(RecordError::TooFewFields("name,120".to_string()))
        );
    }

    #[test]
    fn test_empty_name_allowed() {
        let record = parse_record(",OK,7").unwrap();
        assert_eq!(record.full_name, "");
        assert_eq!(record.duration_ms, 7);
    }
}
