//! Product list filter.

use super::{DateFilter, blank_string_as_none, literal_enum, parse_extension};
use crate::error::SchemaResult;
use crate::extensions::PRODUCT_FILTER;
use crate::schema::{ExtensionRegistry, ValidationOptions};
use serde::{Deserialize, Serialize};
use serde_json::Value;

literal_enum! {
    /// Publication status of a product.
    pub enum ProductStatus {
        Proposed => "proposed",
        Draft => "draft",
        Published => "published",
        Rejected => "rejected",
    }
}

/// Query parameters accepted by the product list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductFilter {
    pub id: Option<String>,
    /// Search term; null and `""` both mean no search
    #[serde(deserialize_with = "blank_string_as_none")]
    pub q: Option<String>,
    pub status: Vec<ProductStatus>,
    pub collection_id: Vec<String>,
    pub tags: Vec<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub handle: Option<String>,
    pub is_giftcard: Option<String>,
    #[serde(rename = "type")]
    pub product_type: Option<String>,
    pub offset: Option<String>,
    pub limit: Option<String>,
    pub expand: Option<String>,
    pub fields: Option<String>,
    pub order: Option<String>,
    pub created_at: Option<DateFilter>,
    pub updated_at: Option<DateFilter>,
    pub deleted_at: Option<DateFilter>,
}

impl ProductFilter {
    pub fn parse(
        registry: &ExtensionRegistry,
        raw: &Value,
        options: &ValidationOptions,
    ) -> SchemaResult<Self> {
        parse_extension(registry, PRODUCT_FILTER, raw, options)
    }
}
