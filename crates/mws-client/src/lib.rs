//! Signed request builder and HTTP transport for the MWS Query API.
//!
//! [`MwsClient`] assembles the fixed signing fields and the operation
//! parameters into one sorted set, signs it with [`mws_auth`], encodes it
//! as the request's query string, and issues a single HTTPS POST. The raw
//! XML response body comes back untouched; interpreting service-level
//! fault XML is the caller's concern.
//!
//! # Modules
//!
//! - [`client`] - The request builder and transport
//! - [`error`] - Client error type
//! - [`query`] - Query-string percent-encoding

pub mod client;
pub mod error;
pub mod query;

pub use client::MwsClient;
pub use error::MwsError;
