//! Line payload extraction
//!
//! Strips the line-number/log prefix from a raw report line.

use super::RecordError;

/// Extract the record payload from a raw report line.
///
/// The payload is everything after the first `": "` when present, otherwise
/// everything after the first `,` (a leading sequence-number column). A line
/// with neither delimiter is malformed.
pub fn extract_payload(raw: &str) -> Result<&str, RecordError> {
    if let Some(i) = raw.find(": ") {
        return Ok(&raw[i + 2..]);
    }
    match raw.find(',') {
        Some(i) => Ok(&raw[i + 1..]),
        None => Err(RecordError::MissingDelimiter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_prefix_stripped() {
        let payload = extract_payload("INFO: org.acme.CartTest.addItem,OK,120").unwrap();
        assert_eq!(payload, "org.acme.CartTest.addItem,OK,120");
    }

    #[test]
    fn test_sequence_number_stripped() {
        let payload = extract_payload("17,org.acme.CartTest.addItem,OK,120").unwrap();
        assert_eq!(payload, "org.acme.CartTest.addItem,OK,120");
    }

    #[test]
    fn test_colon_space_wins_over_comma() {
        let payload = extract_payload("3,INFO: org.acme.CartTest.addItem,OK,120").unwrap();
        assert_eq!(payload, "org.acme.CartTest.addItem,OK,120");
    }

    #[test]
    fn test_no_delimiter_is_fatal() {
        assert_eq!(
            extract_payload("garbage without delimiters"),
            Err(RecordError::MissingDelimiter)
        );
    }

    #[test]
    fn test_empty_line_is_fatal() {
        assert_eq!(extract_payload(""), Err(RecordError::MissingDelimiter));
    }
}
