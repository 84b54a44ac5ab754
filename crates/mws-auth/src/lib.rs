//! MWS request signing (Signature Version 2, HMAC-SHA256).
//!
//! Every MWS Query-API request carries a `Signature` parameter computed
//! over a canonical request string:
//!
//! ```text
//! POST\n
//! <host>\n
//! <section path + version>\n
//! <sorted key=value parameter string>
//! ```
//!
//! Where `Signature = Base64(HMAC-SHA256(SecretKey, CanonicalRequest))`.
//! The canonicalization rules are quirky but fixed; see [`canonical`] for
//! the exact escaping order the service expects.
//!
//! # Modules
//!
//! - [`canonical`] - Canonical request string construction
//! - [`signer`] - HMAC-SHA256 signature computation

pub mod canonical;
pub mod signer;

pub use canonical::{build_canonical_request, build_parameter_string, escape_canonical};
pub use signer::{compute_signature, sign_request};
