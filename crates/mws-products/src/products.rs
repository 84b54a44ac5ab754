//! The Products section operation facade.
//!
//! Each operation shapes its arguments into the dotted wire-parameter
//! convention (`SellerSKUList.SellerSKU.1`, 1-based indices) and delegates
//! to the client. List inputs are silently truncated to the maximum the
//! service accepts: 20 entries for the pricing lists, 5 for the matching
//! lookups. Validation failures resolve immediately with
//! [`MwsError::Validation`] and no network call.

use std::collections::BTreeMap;

use mws_client::{MwsClient, MwsError};
use mws_core::ApiSection;

use crate::types::{FeesEstimateInput, IdType, ItemCondition};

/// Maximum list entries for the pricing operations.
const MAX_PRICING_LIST: usize = 20;

/// Maximum list entries for the matching-product lookups.
const MAX_MATCHING_LIST: usize = 5;

/// The Products API section facade.
#[derive(Debug, Clone)]
pub struct ProductsApi {
    client: MwsClient,
}

impl ProductsApi {
    /// Wrap a client in the Products facade.
    #[must_use]
    pub fn new(client: MwsClient) -> Self {
        Self { client }
    }

    /// `GetServiceStatus`: operational status of the Products section.
    pub async fn get_service_status(&self) -> Result<String, MwsError> {
        self.call("GetServiceStatus", BTreeMap::new()).await
    }

    /// `ListMatchingProducts`: products matching a search query, most
    /// relevant first.
    pub async fn list_matching_products(
        &self,
        query: &str,
        query_context_id: Option<&str>,
    ) -> Result<String, MwsError> {
        if query.is_empty() {
            return Err(MwsError::validation(
                "ListMatchingProducts requires a non-empty Query",
            ));
        }
        let mut params = self.base_params();
        params.insert("Query".to_owned(), query.to_owned());
        if let Some(context_id) = query_context_id {
            params.insert("QueryContextId".to_owned(), context_id.to_owned());
        }
        self.call("ListMatchingProducts", params).await
    }

    /// `GetMatchingProduct`: products and attributes for up to 5 ASINs.
    pub async fn get_matching_product(&self, asins: &[String]) -> Result<String, MwsError> {
        if asins.is_empty() {
            return Err(MwsError::validation(
                "GetMatchingProduct requires at least one ASIN",
            ));
        }
        let mut params = self.base_params();
        insert_list(&mut params, "ASINList.ASIN", asins, MAX_MATCHING_LIST);
        self.call("GetMatchingProduct", params).await
    }

    /// `GetMatchingProductForId`: products for up to 5 identifiers of the
    /// given type.
    pub async fn get_matching_product_for_id(
        &self,
        id_type: IdType,
        ids: &[String],
    ) -> Result<String, MwsError> {
        if ids.is_empty() {
            return Err(MwsError::validation(
                "GetMatchingProductForId requires at least one Id",
            ));
        }
        let mut params = self.base_params();
        params.insert("IdType".to_owned(), id_type.as_str().to_owned());
        insert_list(&mut params, "IdList.Id", ids, MAX_MATCHING_LIST);
        self.call("GetMatchingProductForId", params).await
    }

    /// `GetCompetitivePricingForSKU`: competitive pricing for up to 20
    /// seller SKUs.
    pub async fn get_competitive_pricing_for_sku(
        &self,
        skus: &[String],
    ) -> Result<String, MwsError> {
        if skus.is_empty() {
            return Err(MwsError::validation(
                "GetCompetitivePricingForSKU requires at least one SellerSKU",
            ));
        }
        let mut params = self.base_params();
        insert_list(&mut params, "SellerSKUList.SellerSKU", skus, MAX_PRICING_LIST);
        self.call("GetCompetitivePricingForSKU", params).await
    }

    /// `GetCompetitivePricingForASIN`: competitive pricing for up to 20
    /// ASINs.
    pub async fn get_competitive_pricing_for_asin(
        &self,
        asins: &[String],
    ) -> Result<String, MwsError> {
        if asins.is_empty() {
            return Err(MwsError::validation(
                "GetCompetitivePricingForASIN requires at least one ASIN",
            ));
        }
        let mut params = self.base_params();
        insert_list(&mut params, "ASINList.ASIN", asins, MAX_PRICING_LIST);
        self.call("GetCompetitivePricingForASIN", params).await
    }

    /// `GetLowestOfferListingsForSKU`: lowest-priced active listings, by
    /// condition, for up to 20 seller SKUs.
    pub async fn get_lowest_offer_listings_for_sku(
        &self,
        skus: &[String],
        item_condition: Option<ItemCondition>,
        exclude_me: Option<bool>,
    ) -> Result<String, MwsError> {
        if skus.is_empty() {
            return Err(MwsError::validation(
                "GetLowestOfferListingsForSKU requires at least one SellerSKU",
            ));
        }
        let mut params = self.base_params();
        insert_list(&mut params, "SellerSKUList.SellerSKU", skus, MAX_PRICING_LIST);
        insert_listing_filters(&mut params, item_condition, exclude_me);
        self.call("GetLowestOfferListingsForSKU", params).await
    }

    /// `GetLowestOfferListingsForASIN`: lowest-priced active listings, by
    /// condition, for up to 20 ASINs.
    pub async fn get_lowest_offer_listings_for_asin(
        &self,
        asins: &[String],
        item_condition: Option<ItemCondition>,
        exclude_me: Option<bool>,
    ) -> Result<String, MwsError> {
        if asins.is_empty() {
            return Err(MwsError::validation(
                "GetLowestOfferListingsForASIN requires at least one ASIN",
            ));
        }
        let mut params = self.base_params();
        insert_list(&mut params, "ASINList.ASIN", asins, MAX_PRICING_LIST);
        insert_listing_filters(&mut params, item_condition, exclude_me);
        self.call("GetLowestOfferListingsForASIN", params).await
    }

    /// `GetMyPriceForSKU`: the seller's own pricing for up to 20 SKUs.
    pub async fn get_my_price_for_sku(
        &self,
        skus: &[String],
        item_condition: Option<ItemCondition>,
    ) -> Result<String, MwsError> {
        if skus.is_empty() {
            return Err(MwsError::validation(
                "GetMyPriceForSKU requires at least one SellerSKU",
            ));
        }
        let mut params = self.base_params();
        insert_list(&mut params, "SellerSKUList.SellerSKU", skus, MAX_PRICING_LIST);
        insert_listing_filters(&mut params, item_condition, None);
        self.call("GetMyPriceForSKU", params).await
    }

    /// `GetMyPriceForASIN`: the seller's own pricing for up to 20 ASINs.
    pub async fn get_my_price_for_asin(
        &self,
        asins: &[String],
        item_condition: Option<ItemCondition>,
    ) -> Result<String, MwsError> {
        if asins.is_empty() {
            return Err(MwsError::validation(
                "GetMyPriceForASIN requires at least one ASIN",
            ));
        }
        let mut params = self.base_params();
        insert_list(&mut params, "ASINList.ASIN", asins, MAX_PRICING_LIST);
        insert_listing_filters(&mut params, item_condition, None);
        self.call("GetMyPriceForASIN", params).await
    }

    /// `GetProductCategoriesForSKU`: parent categories, back to the root,
    /// for a seller SKU.
    pub async fn get_product_categories_for_sku(
        &self,
        seller_sku: &str,
    ) -> Result<String, MwsError> {
        if seller_sku.is_empty() {
            return Err(MwsError::validation(
                "GetProductCategoriesForSKU requires a SellerSKU",
            ));
        }
        let mut params = self.base_params();
        params.insert("SellerSKU".to_owned(), seller_sku.to_owned());
        self.call("GetProductCategoriesForSKU", params).await
    }

    /// `GetProductCategoriesForASIN`: parent categories, back to the root,
    /// for an ASIN.
    pub async fn get_product_categories_for_asin(&self, asin: &str) -> Result<String, MwsError> {
        if asin.is_empty() {
            return Err(MwsError::validation(
                "GetProductCategoriesForASIN requires an ASIN",
            ));
        }
        let mut params = self.base_params();
        params.insert("ASIN".to_owned(), asin.to_owned());
        self.call("GetProductCategoriesForASIN", params).await
    }

    /// `GetLowestPricedOffersForSKU`: the top offers for a single SKU.
    pub async fn get_lowest_priced_offers_for_sku(
        &self,
        seller_sku: &str,
        item_condition: Option<ItemCondition>,
    ) -> Result<String, MwsError> {
        if seller_sku.is_empty() {
            return Err(MwsError::validation(
                "GetLowestPricedOffersForSKU requires a SellerSKU",
            ));
        }
        let mut params = self.base_params();
        params.insert("SellerSKU".to_owned(), seller_sku.to_owned());
        insert_listing_filters(&mut params, item_condition, None);
        self.call("GetLowestPricedOffersForSKU", params).await
    }

    /// `GetLowestPricedOffersForASIN`: the top offers for a single ASIN.
    pub async fn get_lowest_priced_offers_for_asin(
        &self,
        asin: &str,
        item_condition: Option<ItemCondition>,
    ) -> Result<String, MwsError> {
        if asin.is_empty() {
            return Err(MwsError::validation(
                "GetLowestPricedOffersForASIN requires an ASIN",
            ));
        }
        let mut params = self.base_params();
        params.insert("ASIN".to_owned(), asin.to_owned());
        insert_listing_filters(&mut params, item_condition, None);
        self.call("GetLowestPricedOffersForASIN", params).await
    }

    /// `GetMyFeesEstimate`: estimated selling fees for one item.
    ///
    /// The service only accepts ASIN or SellerSKU identifiers here; any
    /// other [`IdType`] resolves immediately with a validation error and
    /// no network call.
    pub async fn get_my_fees_estimate(
        &self,
        input: &FeesEstimateInput,
    ) -> Result<String, MwsError> {
        if !matches!(input.id_type, IdType::Asin | IdType::SellerSku) {
            return Err(MwsError::validation(format!(
                "unknown IdType {}. Allowed are ASIN, SellerSKU",
                input.id_type
            )));
        }
        let params = fees_estimate_params(&self.client.config().marketplace_id, input);
        self.call("GetMyFeesEstimate", params).await
    }

    /// Parameters every Products operation starts from.
    fn base_params(&self) -> BTreeMap<String, String> {
        BTreeMap::from([(
            "MarketplaceId".to_owned(),
            self.client.config().marketplace_id.clone(),
        )])
    }

    async fn call(
        &self,
        action: &str,
        params: BTreeMap<String, String>,
    ) -> Result<String, MwsError> {
        self.client.call(ApiSection::Products, action, params).await
    }
}

/// Insert `values` under dotted 1-based keys (`<prefix>.1`, `<prefix>.2`,
/// ...), silently truncating past `limit`.
fn insert_list(
    params: &mut BTreeMap<String, String>,
    prefix: &str,
    values: &[String],
    limit: usize,
) {
    for (index, value) in values.iter().take(limit).enumerate() {
        params.insert(format!("{prefix}.{}", index + 1), value.clone());
    }
}

/// Insert the optional listing filters shared by the pricing operations.
fn insert_listing_filters(
    params: &mut BTreeMap<String, String>,
    item_condition: Option<ItemCondition>,
    exclude_me: Option<bool>,
) {
    if let Some(condition) = item_condition {
        params.insert("ItemCondition".to_owned(), condition.as_str().to_owned());
    }
    if let Some(exclude) = exclude_me {
        let value = if exclude { "True" } else { "False" };
        params.insert("ExcludeMe".to_owned(), value.to_owned());
    }
}

/// Build the fixed `FeesEstimateRequestList.FeesEstimateRequest.1.*`
/// parameter block. Points are always zero.
fn fees_estimate_params(
    marketplace_id: &str,
    input: &FeesEstimateInput,
) -> BTreeMap<String, String> {
    const P: &str = "FeesEstimateRequestList.FeesEstimateRequest.1";
    let currency = &input.currency_code;
    BTreeMap::from([
        (format!("{P}.MarketplaceId"), marketplace_id.to_owned()),
        (format!("{P}.IdType"), input.id_type.as_str().to_owned()),
        (format!("{P}.IdValue"), input.id_value.clone()),
        (
            format!("{P}.IsAmazonFulfilled"),
            input.is_amazon_fulfilled.to_string(),
        ),
        (format!("{P}.Identifier"), input.identifier.clone()),
        (
            format!("{P}.PriceToEstimateFees.ListingPrice.Amount"),
            input.price.to_string(),
        ),
        (
            format!("{P}.PriceToEstimateFees.ListingPrice.CurrencyCode"),
            currency.clone(),
        ),
        (
            format!("{P}.PriceToEstimateFees.Shipping.Amount"),
            input.shipping.to_string(),
        ),
        (
            format!("{P}.PriceToEstimateFees.Shipping.CurrencyCode"),
            currency.clone(),
        ),
        (
            format!("{P}.PriceToEstimateFees.Points.PointsNumber"),
            "0".to_owned(),
        ),
        (
            format!("{P}.PriceToEstimateFees.Points.PointsMonetaryValue.Amount"),
            "0".to_owned(),
        ),
        (
            format!("{P}.PriceToEstimateFees.Points.PointsMonetaryValue.CurrencyCode"),
            currency.clone(),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use mws_core::MwsConfig;

    fn test_api() -> ProductsApi {
        // Unroutable host: any test that reaches the network fails with a
        // transport error instead of a validation error.
        let config = MwsConfig::new(
            "AKIAEXAMPLEKEY",
            "secretkey",
            "A1SELLEREXAMPLE",
            "123456789012",
            "A1VC38T7YXB528",
        );
        ProductsApi::new(MwsClient::with_host(config, "mws.invalid"))
    }

    fn numbered(count: usize) -> Vec<String> {
        (1..=count).map(|i| format!("SKU-{i:03}")).collect()
    }

    #[test]
    fn test_should_truncate_list_to_twenty_entries() {
        let mut params = BTreeMap::new();
        insert_list(
            &mut params,
            "SellerSKUList.SellerSKU",
            &numbered(25),
            MAX_PRICING_LIST,
        );
        assert_eq!(params.len(), 20);
        assert_eq!(params["SellerSKUList.SellerSKU.1"], "SKU-001");
        assert_eq!(params["SellerSKUList.SellerSKU.20"], "SKU-020");
        assert!(!params.contains_key("SellerSKUList.SellerSKU.21"));
    }

    #[test]
    fn test_should_truncate_matching_lookup_to_five_entries() {
        let mut params = BTreeMap::new();
        insert_list(&mut params, "IdList.Id", &numbered(8), MAX_MATCHING_LIST);
        assert_eq!(params.len(), 5);
        assert_eq!(params["IdList.Id.5"], "SKU-005");
        assert!(!params.contains_key("IdList.Id.6"));
    }

    #[test]
    fn test_should_keep_all_entries_under_the_limit() {
        let mut params = BTreeMap::new();
        insert_list(&mut params, "ASINList.ASIN", &numbered(3), MAX_PRICING_LIST);
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_should_capitalize_exclude_me_values() {
        let mut params = BTreeMap::new();
        insert_listing_filters(&mut params, Some(ItemCondition::New), Some(true));
        assert_eq!(params["ItemCondition"], "New");
        assert_eq!(params["ExcludeMe"], "True");

        let mut params = BTreeMap::new();
        insert_listing_filters(&mut params, None, Some(false));
        assert_eq!(params["ExcludeMe"], "False");
        assert!(!params.contains_key("ItemCondition"));
    }

    #[test]
    fn test_should_build_fees_estimate_parameter_block() {
        let mut input = FeesEstimateInput::new(IdType::Asin, "B015CPT37I");
        input.is_amazon_fulfilled = true;
        input.price = 3000.0;
        let params = fees_estimate_params("A1VC38T7YXB528", &input);

        let p = "FeesEstimateRequestList.FeesEstimateRequest.1";
        assert_eq!(params[&format!("{p}.MarketplaceId")], "A1VC38T7YXB528");
        assert_eq!(params[&format!("{p}.IdType")], "ASIN");
        assert_eq!(params[&format!("{p}.IdValue")], "B015CPT37I");
        assert_eq!(params[&format!("{p}.IsAmazonFulfilled")], "true");
        assert_eq!(
            params[&format!("{p}.PriceToEstimateFees.ListingPrice.Amount")],
            "3000"
        );
        assert_eq!(
            params[&format!("{p}.PriceToEstimateFees.ListingPrice.CurrencyCode")],
            "JPY"
        );
        assert_eq!(
            params[&format!("{p}.PriceToEstimateFees.Points.PointsNumber")],
            "0"
        );
        assert_eq!(params.len(), 12);
    }

    #[tokio::test]
    async fn test_should_reject_disallowed_fees_id_type_without_network() {
        let api = test_api();
        let input = FeesEstimateInput::new(IdType::Ean, "4902370536485");
        let err = api.get_my_fees_estimate(&input).await.unwrap_err();
        assert!(
            matches!(err, MwsError::Validation(_)),
            "expected validation error, got {err:?}"
        );
        assert!(err.to_string().contains("Allowed are ASIN, SellerSKU"));
    }

    #[tokio::test]
    async fn test_should_reject_empty_query_without_network() {
        let api = test_api();
        let err = api.list_matching_products("", None).await.unwrap_err();
        assert!(matches!(err, MwsError::Validation(_)));
    }

    #[tokio::test]
    async fn test_should_reject_empty_sku_list_without_network() {
        let api = test_api();
        let err = api.get_competitive_pricing_for_sku(&[]).await.unwrap_err();
        assert!(matches!(err, MwsError::Validation(_)));
    }
}
