//! Error types for MWS client configuration.

/// Error produced when a credential set fails validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// One or more required credential fields are empty.
    #[error("missing required MWS configuration fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

impl ConfigError {
    /// The names of the missing fields, if any.
    #[must_use]
    pub fn missing_fields(&self) -> &[&'static str] {
        match self {
            Self::MissingFields(fields) => fields,
        }
    }
}
