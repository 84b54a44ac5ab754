//! Parameter types for the Products API section.

use std::fmt;
use std::str::FromStr;

use mws_client::MwsError;

/// Product identifier type accepted by the cross-reference lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdType {
    /// Amazon Standard Identification Number.
    Asin,
    /// Global Catalog Identifier.
    Gcid,
    /// Seller-assigned SKU.
    SellerSku,
    /// Universal Product Code.
    Upc,
    /// European Article Number.
    Ean,
    /// International Standard Book Number.
    Isbn,
    /// Japanese Article Number.
    Jan,
}

impl IdType {
    /// Returns the wire name of this identifier type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asin => "ASIN",
            Self::Gcid => "GCID",
            Self::SellerSku => "SellerSKU",
            Self::Upc => "UPC",
            Self::Ean => "EAN",
            Self::Isbn => "ISBN",
            Self::Jan => "JAN",
        }
    }
}

impl fmt::Display for IdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdType {
    type Err = MwsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ASIN" => Ok(Self::Asin),
            "GCID" => Ok(Self::Gcid),
            "SellerSKU" => Ok(Self::SellerSku),
            "UPC" => Ok(Self::Upc),
            "EAN" => Ok(Self::Ean),
            "ISBN" => Ok(Self::Isbn),
            "JAN" => Ok(Self::Jan),
            other => Err(MwsError::validation(format!(
                "unknown IdType {other}. Allowed are ASIN, GCID, SellerSKU, UPC, EAN, ISBN, JAN"
            ))),
        }
    }
}

/// Item condition filter for pricing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemCondition {
    /// Any condition.
    Any,
    /// New.
    New,
    /// Used.
    Used,
    /// Collectible.
    Collectible,
    /// Refurbished.
    Refurbished,
    /// Club.
    Club,
}

impl ItemCondition {
    /// Returns the wire name of this condition.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Any => "Any",
            Self::New => "New",
            Self::Used => "Used",
            Self::Collectible => "Collectible",
            Self::Refurbished => "Refurbished",
            Self::Club => "Club",
        }
    }
}

impl fmt::Display for ItemCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input for `GetMyFeesEstimate`.
///
/// Only ASIN and SellerSKU identifiers are accepted by the service for
/// fee estimation; [`ProductsApi::get_my_fees_estimate`] rejects any
/// other [`IdType`] before touching the network.
///
/// [`ProductsApi::get_my_fees_estimate`]: crate::ProductsApi::get_my_fees_estimate
#[derive(Debug, Clone, PartialEq)]
pub struct FeesEstimateInput {
    /// Identifier type; must be [`IdType::Asin`] or [`IdType::SellerSku`].
    pub id_type: IdType,
    /// Identifier value.
    pub id_value: String,
    /// Whether the item would be fulfilled by Amazon.
    pub is_amazon_fulfilled: bool,
    /// Listing price to estimate fees for.
    pub price: f64,
    /// Shipping amount.
    pub shipping: f64,
    /// Currency code for price and shipping.
    pub currency_code: String,
    /// Caller-chosen token echoed back by the service to correlate the
    /// estimate with the request.
    pub identifier: String,
}

impl FeesEstimateInput {
    /// Create an input with the defaults the Japanese marketplace uses:
    /// JPY amounts of zero, fulfilled by merchant.
    pub fn new(id_type: IdType, id_value: impl Into<String>) -> Self {
        Self {
            id_type,
            id_value: id_value.into(),
            is_amazon_fulfilled: false,
            price: 0.0,
            shipping: 0.0,
            currency_code: "JPY".to_owned(),
            identifier: "ABCDE".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_parse_all_id_types() {
        for name in ["ASIN", "GCID", "SellerSKU", "UPC", "EAN", "ISBN", "JAN"] {
            let id_type: IdType = name.parse().unwrap();
            assert_eq!(id_type.as_str(), name);
        }
    }

    #[test]
    fn test_should_reject_unknown_id_type() {
        let err = "EANX".parse::<IdType>().unwrap_err();
        assert!(err.to_string().contains("unknown IdType"));
    }

    #[test]
    fn test_should_display_item_condition_wire_names() {
        assert_eq!(ItemCondition::Collectible.to_string(), "Collectible");
        assert_eq!(ItemCondition::Any.to_string(), "Any");
    }
}
