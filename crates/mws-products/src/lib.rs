//! Products API section operations for the MWS client.
//!
//! [`ProductsApi`] exposes one async function per remote operation of the
//! Products section: product lookup, pricing, and fee estimation. Each
//! function shapes idiomatic Rust arguments into the dotted wire-parameter
//! convention the service expects (1-based list indices such as
//! `SellerSKUList.SellerSKU.1`) and delegates to [`mws_client::MwsClient`].
//! Responses are raw XML strings; nothing is parsed on the way back.
//!
//! # Modules
//!
//! - [`products`] - The operation facade
//! - [`types`] - Identifier-type and item-condition enums, fee inputs

pub mod products;
pub mod types;

pub use mws_client::MwsError;
pub use products::ProductsApi;
pub use types::{FeesEstimateInput, IdType, ItemCondition};
