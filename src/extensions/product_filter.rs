//! `productFilter` extension: query parameters for listing products.
//!
//! `q` also accepts null and the empty string; both mean no search term.

use super::{DATE_FILTER, enum_list, string_list};
use crate::error::SchemaResult;
use crate::filters::ProductStatus;
use crate::schema::primitives::{object, string};
use crate::schema::{ExtensionRegistry, Schema};
use serde_json::{Value, json};

pub const PRODUCT_STATUS_VALUES: &[&str] = ProductStatus::VALUES;

const TEXT_FIELDS: &[&str] = &[
    "title",
    "description",
    "handle",
    "is_giftcard",
    "type",
    "offset",
    "limit",
    "expand",
    "fields",
    "order",
];

const DATE_FIELDS: &[&str] = &["created_at", "updated_at", "deleted_at"];

pub fn build(registry: &ExtensionRegistry) -> SchemaResult<Schema> {
    let mut keys: Vec<(&str, Schema)> = vec![
        ("id", string()),
        ("q", string().allow([Value::Null, json!("")])),
        ("status", enum_list(PRODUCT_STATUS_VALUES)),
        ("collection_id", string_list()),
        ("tags", string_list()),
    ];
    keys.extend(TEXT_FIELDS.iter().map(|&field| (field, string())));
    for &field in DATE_FIELDS {
        keys.push((field, registry.build(DATE_FILTER)?));
    }
    Ok(object().keys(keys))
}
