//! The static MWS API section table.
//!
//! MWS groups its operations into sections, each with its own URL path
//! prefix and API version. The original service documentation keys this
//! table by section name; modelling it as an enum makes an unknown
//! section unrepresentable instead of a lookup failure.

use std::fmt;

/// An MWS API section with its URL path prefix and API version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiSection {
    /// The Products API section.
    Products,
    /// The Sellers API section.
    Sellers,
    /// The Orders API section.
    Orders,
    /// The Feeds API section.
    Feeds,
    /// The Reports API section.
    Reports,
    /// The Fulfillment Inventory API section.
    ///
    /// The published section table lists `/` as this section's prefix, but
    /// every request actually goes to `/FulfillmentInventory/`. The wire
    /// path is what matters for signing, so that is what we carry here.
    FulfillmentInventory,
    /// The Finances API section.
    Finances,
}

impl ApiSection {
    /// URL path prefix for this section, as used on the wire and in the
    /// canonical request string.
    #[must_use]
    pub const fn path_prefix(self) -> &'static str {
        match self {
            Self::Products => "/Products/",
            Self::Sellers => "/Sellers/",
            Self::Orders => "/Orders/",
            Self::Feeds | Self::Reports => "/",
            Self::FulfillmentInventory => "/FulfillmentInventory/",
            Self::Finances => "/Finances/",
        }
    }

    /// API version string for this section.
    #[must_use]
    pub const fn version(self) -> &'static str {
        match self {
            Self::Products => "2011-10-01",
            Self::Sellers => "2011-07-01",
            Self::Orders => "2013-09-01",
            Self::Feeds | Self::Reports => "2009-01-01",
            Self::FulfillmentInventory => "2010-10-01",
            Self::Finances => "2015-05-01",
        }
    }

    /// Full request path: path prefix followed by the API version.
    #[must_use]
    pub fn path(self) -> String {
        format!("{}{}", self.path_prefix(), self.version())
    }
}

impl fmt::Display for ApiSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Products => "Products",
            Self::Sellers => "Sellers",
            Self::Orders => "Orders",
            Self::Feeds => "Feeds",
            Self::Reports => "Reports",
            Self::FulfillmentInventory => "FulfillmentInventory",
            Self::Finances => "Finances",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_build_products_path() {
        assert_eq!(ApiSection::Products.path(), "/Products/2011-10-01");
    }

    #[test]
    fn test_should_use_hardcoded_fulfillment_inventory_path() {
        assert_eq!(
            ApiSection::FulfillmentInventory.path(),
            "/FulfillmentInventory/2010-10-01"
        );
    }

    #[test]
    fn test_should_use_bare_prefix_for_feeds_and_reports() {
        assert_eq!(ApiSection::Feeds.path(), "/2009-01-01");
        assert_eq!(ApiSection::Reports.path(), "/2009-01-01");
    }

    #[test]
    fn test_should_display_section_name() {
        assert_eq!(ApiSection::Finances.to_string(), "Finances");
    }
}
