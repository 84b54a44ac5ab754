//! Error types for MWS requests.

/// Error returned by [`MwsClient::call`](crate::MwsClient::call) and the
/// operation facades built on top of it.
#[derive(Debug, thiserror::Error)]
pub enum MwsError {
    /// The request was rejected before any network call was made.
    #[error("validation error: {0}")]
    Validation(String),

    /// The connection failed or the response body could not be read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("MWS returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code of the response.
        status: reqwest::StatusCode,
        /// Raw response body, usually service fault XML.
        body: String,
    },
}

impl MwsError {
    /// Shorthand for a validation error with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
