//! Credential configuration for the MWS client.
//!
//! MWS authenticates every request with a seller-scoped credential set.
//! The set is constructed once, validated, and then shared read-only by
//! the client and the operation facades.

use crate::error::ConfigError;

/// The five credential fields every MWS request or registration needs.
///
/// All fields are required; [`MwsConfig::validate`] reports every missing
/// field at once rather than stopping at the first.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MwsConfig {
    /// AWS access key id issued for the MWS developer account.
    #[serde(rename = "AWSAccessKeyId")]
    pub aws_access_key_id: String,
    /// Secret key paired with the access key; used for request signing.
    pub secret_key: String,
    /// Seller (merchant) account identifier.
    pub seller_id: String,
    /// MWS developer account number.
    pub developer_account_number: String,
    /// Marketplace the requests are scoped to.
    pub marketplace_id: String,
}

impl MwsConfig {
    /// Create a credential set from its five fields.
    pub fn new(
        aws_access_key_id: impl Into<String>,
        secret_key: impl Into<String>,
        seller_id: impl Into<String>,
        developer_account_number: impl Into<String>,
        marketplace_id: impl Into<String>,
    ) -> Self {
        Self {
            aws_access_key_id: aws_access_key_id.into(),
            secret_key: secret_key.into(),
            seller_id: seller_id.into(),
            developer_account_number: developer_account_number.into(),
            marketplace_id: marketplace_id.into(),
        }
    }

    /// Load the credential set from environment variables.
    ///
    /// Reads `MWS_ACCESS_KEY_ID`, `MWS_SECRET_KEY`, `MWS_SELLER_ID`,
    /// `MWS_DEVELOPER_ACCOUNT_NUMBER`, and `MWS_MARKETPLACE_ID`. Unset
    /// variables become empty fields; call [`MwsConfig::validate`] to
    /// find out which ones are missing.
    #[must_use]
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).unwrap_or_default();
        Self {
            aws_access_key_id: var("MWS_ACCESS_KEY_ID"),
            secret_key: var("MWS_SECRET_KEY"),
            seller_id: var("MWS_SELLER_ID"),
            developer_account_number: var("MWS_DEVELOPER_ACCOUNT_NUMBER"),
            marketplace_id: var("MWS_MARKETPLACE_ID"),
        }
    }

    /// Check that all five fields are non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFields`] naming every empty field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut missing = Vec::new();
        if self.seller_id.is_empty() {
            missing.push("SellerId");
        }
        if self.developer_account_number.is_empty() {
            missing.push("DeveloperAccountNumber");
        }
        if self.aws_access_key_id.is_empty() {
            missing.push("AWSAccessKeyId");
        }
        if self.secret_key.is_empty() {
            missing.push("SecretKey");
        }
        if self.marketplace_id.is_empty() {
            missing.push("MarketplaceId");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::MissingFields(missing))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_config() -> MwsConfig {
        MwsConfig::new(
            "AKIAEXAMPLEKEY",
            "secretkey",
            "A1SELLEREXAMPLE",
            "123456789012",
            "A1VC38T7YXB528",
        )
    }

    #[test]
    fn test_should_accept_complete_config() {
        assert!(full_config().validate().is_ok());
    }

    #[test]
    fn test_should_report_every_missing_field() {
        let config = MwsConfig::new("", "", "A1SELLEREXAMPLE", "", "");
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.missing_fields(),
            &[
                "DeveloperAccountNumber",
                "AWSAccessKeyId",
                "SecretKey",
                "MarketplaceId"
            ]
        );
    }

    #[test]
    fn test_should_render_missing_fields_in_message() {
        let config = MwsConfig::new("", "secretkey", "s", "d", "m");
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "missing required MWS configuration fields: AWSAccessKeyId"
        );
    }
}
