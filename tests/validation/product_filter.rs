//! Product list query validation tests.

use crate::common::builders::QueryBuilder;
use crate::common::validate_builtin;
use crate::{assert_validation_success, assert_violation};

use commerce_schema::extensions::PRODUCT_STATUS_VALUES;
use commerce_schema::filters::{ProductFilter, ProductStatus};
use commerce_schema::query::{ALLOWED_ADMIN_PRODUCT_FIELDS, SortDirection};
use commerce_schema::{
    ExtensionRegistry, ListConfig, SchemaError, ValidationError, ValidationOptions,
};
use serde_json::{Value, json};

#[test]
fn test_status_values() {
    for status in PRODUCT_STATUS_VALUES {
        let query = QueryBuilder::new().param("status", *status).build();
        let normalized = assert_validation_success!(validate_builtin("productFilter", &query));
        assert_eq!(normalized["status"], json!([status]));
    }

    let query = QueryBuilder::new().param("status", "archived").build();
    assert_violation!(
        validate_builtin("productFilter", &query),
        ValidationError::InvalidEnumValue { path, .. } if path == "status[0]"
    );
}

#[test]
fn test_search_term_may_be_blank() {
    for q in [json!(""), Value::Null, json!("linen")] {
        let query = QueryBuilder::new().param("q", q).build();
        let normalized = assert_validation_success!(validate_builtin("productFilter", &query));
        assert_eq!(normalized, query);
    }
}

#[test]
fn test_search_term_type_still_checked() {
    let query = QueryBuilder::new().param("q", 12).build();
    assert_violation!(
        validate_builtin("productFilter", &query),
        ValidationError::TypeMismatch { path, .. } if path == "q"
    );
}

#[test]
fn test_other_text_fields_not_blankable() {
    let query = QueryBuilder::new().param("handle", "").build();
    assert_violation!(
        validate_builtin("productFilter", &query),
        ValidationError::RequiredFieldMissing { path, .. } if path == "handle"
    );
}

#[test]
fn test_collection_and_tags_single_or_many() {
    let query = QueryBuilder::new()
        .param("collection_id", "pcol_summer")
        .param("tags", json!(["ptag_1", "ptag_2"]))
        .build();
    let normalized = assert_validation_success!(validate_builtin("productFilter", &query));
    assert_eq!(normalized["collection_id"], json!(["pcol_summer"]));
    assert_eq!(normalized["tags"], json!(["ptag_1", "ptag_2"]));

    let bad = QueryBuilder::new().param("tags", json!([1])).build();
    assert_violation!(
        validate_builtin("productFilter", &bad),
        ValidationError::TypeMismatch { path, .. } if path == "tags[0]"
    );
}

#[test]
fn test_deleted_at_is_a_date_filter() {
    let query = QueryBuilder::new()
        .range("deleted_at", "lt", "2024-06-01T00:00:00Z")
        .build();
    let normalized = assert_validation_success!(validate_builtin("productFilter", &query));
    assert_eq!(
        normalized["deleted_at"],
        json!({ "lt": "2024-06-01T00:00:00.000Z" })
    );
}

#[test]
fn test_order_filter_fields_are_unknown_here() {
    let query = QueryBuilder::new().param("payment_status", "captured").build();
    assert_violation!(
        validate_builtin("productFilter", &query),
        ValidationError::UnknownField { path } if path == "payment_status"
    );
}

#[test]
fn test_typed_filter() {
    let registry = ExtensionRegistry::global();
    let query = QueryBuilder::new()
        .param("q", "")
        .param("status", json!(["draft", "proposed"]))
        .param("type", "apparel")
        .param("is_giftcard", "false")
        .range("created_at", "gte", 1_700_000_000)
        .build();
    let filter = ProductFilter::parse(registry, &query, &ValidationOptions::default()).unwrap();
    assert_eq!(filter.q, None);
    assert_eq!(filter.status, vec![ProductStatus::Draft, ProductStatus::Proposed]);
    assert_eq!(filter.product_type.as_deref(), Some("apparel"));
    assert_eq!(filter.is_giftcard.as_deref(), Some("false"));
    assert!(filter.created_at.is_some_and(|d| d.gte.is_some()));
}

#[test]
fn test_list_config_from_query() {
    let registry = ExtensionRegistry::global();
    let query = QueryBuilder::new()
        .param("fields", "title,handle,thumbnail")
        .param("expand", "variants,variants.prices")
        .param("order", "-updated_at")
        .param("limit", "15")
        .build();
    let filter = ProductFilter::parse(registry, &query, &ValidationOptions::default()).unwrap();
    let config = ListConfig::for_products(&filter).unwrap();

    assert_eq!(config.select, vec!["id", "title", "handle", "thumbnail"]);
    assert_eq!(config.relations, vec!["variants", "variants.prices"]);
    assert_eq!(config.order.field, "updated_at");
    assert_eq!(config.order.direction, SortDirection::Desc);
    assert_eq!((config.skip, config.take), (0, 15));
}

#[test]
fn test_list_config_rejects_unlisted_field() {
    let filter = ProductFilter {
        fields: Some("title,cost_price".to_string()),
        ..Default::default()
    };
    match ListConfig::for_products(&filter) {
        Err(SchemaError::InvalidListParameter {
            parameter,
            value,
            allowed,
        }) => {
            assert_eq!(parameter, "fields");
            assert_eq!(value, "cost_price");
            assert_eq!(allowed.len(), ALLOWED_ADMIN_PRODUCT_FIELDS.len());
        }
        other => panic!("Expected InvalidListParameter, got {:?}", other),
    }
}
