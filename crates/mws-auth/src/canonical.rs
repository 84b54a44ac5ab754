//! Canonical request construction for MWS SigV2 signing.
//!
//! The canonical form is built in three steps, in this order:
//!
//! 1. parameters are sorted by key (plain byte ordering) and any colon in
//!    the `Timestamp` value, or in the value of any key containing the
//!    substring `Date`, is re-encoded as `%3A`;
//! 2. the pairs are joined as `key=value` with `&` and stacked under the
//!    method, host, and path lines;
//! 3. a second fixed escaping round replaces `'`, `*`, `(`, `)`, and
//!    space across the whole string.
//!
//! The ordering matters for wire compatibility: the colon re-encoding
//! happens after sorting, and the final escaping round covers the entire
//! canonical string, path included.

use std::collections::BTreeMap;

/// Build the sorted `key=value&...` parameter string.
///
/// Keys come out in lexicographic order. Colons in the `Timestamp` value
/// and in values of keys containing `Date` are replaced with `%3A`; no
/// other value is touched here.
#[must_use]
pub fn build_parameter_string(params: &BTreeMap<String, String>) -> String {
    params
        .iter()
        .map(|(key, value)| {
            if key == "Timestamp" || key.contains("Date") {
                format!("{key}={}", value.replace(':', "%3A"))
            } else {
                format!("{key}={value}")
            }
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Build the full canonical request string, final escaping included.
///
/// ```text
/// POST\n<host>\n<path>\n<parameter string>
/// ```
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use mws_auth::build_canonical_request;
///
/// let params = BTreeMap::from([("Action".to_owned(), "GetServiceStatus".to_owned())]);
/// let canonical = build_canonical_request(
///     "mws.amazonservices.jp",
///     "/Products/2011-10-01",
///     &params,
/// );
/// assert!(canonical.starts_with("POST\nmws.amazonservices.jp\n"));
/// ```
#[must_use]
pub fn build_canonical_request(host: &str, path: &str, params: &BTreeMap<String, String>) -> String {
    let parameter_string = build_parameter_string(params);
    escape_canonical(&format!("POST\n{host}\n{path}\n{parameter_string}"))
}

/// Apply the fixed second escaping round to a canonical string.
///
/// Exactly five characters are replaced, in this order: `'` to `%27`,
/// `*` to `%2A`, `(` to `%28`, `)` to `%29`, and space to `%20`. Nothing
/// else is altered.
#[must_use]
pub fn escape_canonical(input: &str) -> String {
    input
        .replace('\'', "%27")
        .replace('*', "%2A")
        .replace('(', "%28")
        .replace(')', "%29")
        .replace(' ', "%20")
}
