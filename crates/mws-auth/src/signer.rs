//! HMAC-SHA256 signature computation.

use std::collections::BTreeMap;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::debug;

use crate::canonical::build_canonical_request;

type HmacSha256 = Hmac<Sha256>;

/// Compute the signature for a canonical request string:
/// `Base64(HMAC-SHA256(secret, canonical))`.
#[must_use]
pub fn compute_signature(secret_key: &str, canonical: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret_key.as_bytes()).expect("HMAC can accept any key length");
    mac.update(canonical.as_bytes());
    BASE64.encode(mac.finalize().into_bytes())
}

/// Sign a parameter set for a request to `host` at `path`.
///
/// Builds the canonical request from the sorted parameters and computes
/// its signature. The signature is deterministic: identical inputs always
/// produce an identical value.
#[must_use]
pub fn sign_request(
    secret_key: &str,
    host: &str,
    path: &str,
    params: &BTreeMap<String, String>,
) -> String {
    let canonical = build_canonical_request(host, path, params);
    debug!(canonical = ?canonical, "Built canonical request string");
    compute_signature(secret_key, &canonical)
}
