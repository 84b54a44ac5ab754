//! Query-string percent-encoding for signed parameter sets.

use std::collections::BTreeMap;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// The characters left unescaped in query components.
///
/// This matches the JavaScript `encodeURIComponent` rules the service was
/// built against: everything is escaped except `A-Z a-z 0-9` and
/// `- _ . ! ~ * ' ( )`.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Encode a parameter set as a `key=value&...` query string.
///
/// After encoding, every `%253A` is re-expanded to `%3A`. A value that
/// already carries a `%3A` (pre-escaped timestamps, notably) would
/// otherwise double-escape, and the service rejects the double-escaped
/// form. This is a documented quirk of the target API, not a general
/// encoding rule.
#[must_use]
pub fn encode_query(params: &BTreeMap<String, String>) -> String {
    let encoded = params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                utf8_percent_encode(key, QUERY_ENCODE_SET),
                utf8_percent_encode(value, QUERY_ENCODE_SET)
            )
        })
        .collect::<Vec<_>>()
        .join("&");
    encoded.replace("%253A", "%3A")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn test_should_encode_reserved_characters() {
        let params = params(&[("Query", "a b&c=d"), ("Timestamp", "2024-01-01T00:00:00Z")]);
        assert_eq!(
            encode_query(&params),
            "Query=a%20b%26c%3Dd&Timestamp=2024-01-01T00%3A00%3A00Z"
        );
    }

    #[test]
    fn test_should_leave_unreserved_characters_alone() {
        let params = params(&[("K", "a-b_c.d!e~f*g'h(i)j")]);
        assert_eq!(encode_query(&params), "K=a-b_c.d!e~f*g'h(i)j");
    }

    #[test]
    fn test_should_reexpand_double_escaped_colons() {
        // A pre-escaped value percent-encodes to %253A; the fix-up
        // restores single escaping.
        let params = params(&[("StartDate", "2024-01-01T00%3A00%3A00Z")]);
        assert_eq!(encode_query(&params), "StartDate=2024-01-01T00%3A00%3A00Z");
    }

    #[test]
    fn test_should_encode_base64_signature_value() {
        let params = params(&[("Signature", "ab+cd/ef=")]);
        assert_eq!(encode_query(&params), "Signature=ab%2Bcd%2Fef%3D");
    }
}
