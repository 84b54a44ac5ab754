//! The MWS request builder and HTTP transport.

use std::collections::BTreeMap;

use chrono::Utc;
use reqwest::header;
use tracing::debug;

use mws_auth::sign_request;
use mws_core::{ApiSection, MwsConfig};

use crate::error::MwsError;
use crate::query::encode_query;

/// Production MWS endpoint host (Japanese marketplace).
pub const DEFAULT_HOST: &str = "mws.amazonservices.jp";

/// Static identifying user agent sent with every request.
const USER_AGENT: &str = "mws-client-rs/0.1.0 (Language=Rust)";

/// A signed-request client for the MWS Query API.
///
/// The client is cheap to clone; clones share the underlying connection
/// pool and the read-only credential set. Every call is one independent
/// request with no shared mutable state, so concurrent calls are
/// unordered relative to each other.
#[derive(Debug, Clone)]
pub struct MwsClient {
    http: reqwest::Client,
    config: MwsConfig,
    host: String,
}

impl MwsClient {
    /// Create a client against the production endpoint.
    #[must_use]
    pub fn new(config: MwsConfig) -> Self {
        Self::with_host(config, DEFAULT_HOST)
    }

    /// Create a client against a custom endpoint host.
    ///
    /// Signing covers the host, so requests signed for one host are not
    /// valid against another.
    pub fn with_host(config: MwsConfig, host: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            host: host.into(),
        }
    }

    /// The credential set this client signs with.
    #[must_use]
    pub fn config(&self) -> &MwsConfig {
        &self.config
    }

    /// The endpoint host this client targets.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Issue a signed `action` request against `section`.
    ///
    /// Merges the fixed signing fields with `parameters` (caller keys win
    /// on conflict), signs the merged set, and POSTs it as the request's
    /// query string with an empty body. Resolves exactly once with the
    /// raw XML response body.
    ///
    /// # Errors
    ///
    /// [`MwsError::Transport`] if the connection fails or the body cannot
    /// be read; [`MwsError::Status`] if the service answers non-2xx.
    pub async fn call(
        &self,
        section: ApiSection,
        action: &str,
        parameters: BTreeMap<String, String>,
    ) -> Result<String, MwsError> {
        let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
        let path = section.path();
        let params = self.signed_parameters(section, action, parameters, &timestamp);
        let url = format!("https://{}{}?{}", self.host, path, encode_query(&params));

        debug!(section = %section, action, "Dispatching MWS request");

        let response = self
            .http
            .post(&url)
            .header(header::CONTENT_TYPE, "text/xml")
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        debug!(section = %section, action, status = %status, "MWS request completed");

        if status.is_success() {
            Ok(body)
        } else {
            Err(MwsError::Status { status, body })
        }
    }

    /// Merge the fixed signing fields with the caller's parameters and
    /// append the computed `Signature`.
    ///
    /// The timestamp that is signed is the timestamp that is transmitted;
    /// both come from the same map entry.
    fn signed_parameters(
        &self,
        section: ApiSection,
        action: &str,
        parameters: BTreeMap<String, String>,
        timestamp: &str,
    ) -> BTreeMap<String, String> {
        let mut params = BTreeMap::from([
            (
                "AWSAccessKeyId".to_owned(),
                self.config.aws_access_key_id.clone(),
            ),
            ("Action".to_owned(), action.to_owned()),
            ("SellerId".to_owned(), self.config.seller_id.clone()),
            ("SignatureVersion".to_owned(), "2".to_owned()),
            ("SignatureMethod".to_owned(), "HmacSHA256".to_owned()),
            ("Timestamp".to_owned(), timestamp.to_owned()),
            ("Version".to_owned(), section.version().to_owned()),
        ]);
        // Caller-supplied keys take precedence over the fixed fields.
        params.extend(parameters);

        let signature = sign_request(
            &self.config.secret_key,
            &self.host,
            &section.path(),
            &params,
        );
        params.insert("Signature".to_owned(), signature);
        params
    }
}
