//! Date range filter validation tests.

use crate::common::fixtures::{EPOCH_NORMALIZED, EPOCH_SECONDS};
use crate::common::validate_builtin;
use crate::{assert_validation_success, assert_violation};

use commerce_schema::filters::DateFilter;
use commerce_schema::{ExtensionRegistry, ValidationError, ValidationOptions};
use serde_json::json;

#[test]
fn test_epoch_number_normalized() {
    let normalized =
        assert_validation_success!(validate_builtin("dateFilter", &json!({ "lt": EPOCH_SECONDS })));
    assert_eq!(normalized, json!({ "lt": EPOCH_NORMALIZED }));
}

#[test]
fn test_epoch_string_normalized() {
    let normalized = assert_validation_success!(validate_builtin(
        "dateFilter",
        &json!({ "gte": EPOCH_SECONDS.to_string() })
    ));
    assert_eq!(normalized, json!({ "gte": EPOCH_NORMALIZED }));
}

#[test]
fn test_calendar_string_normalized_to_same_representation() {
    let epoch = assert_validation_success!(validate_builtin("dateFilter", &json!({ "lt": EPOCH_SECONDS })));
    let calendar = assert_validation_success!(validate_builtin(
        "dateFilter",
        &json!({ "lt": "2023-11-14T00:00:00Z" })
    ));
    assert!(epoch["lt"].is_string());
    assert!(calendar["lt"].is_string());
    assert_eq!(calendar, json!({ "lt": "2023-11-14T00:00:00.000Z" }));

    let parsed_epoch: DateFilter = serde_json::from_value(epoch).unwrap();
    let parsed_calendar: DateFilter = serde_json::from_value(calendar).unwrap();
    assert!(parsed_calendar.lt < parsed_epoch.lt);
}

#[test]
fn test_all_operators_together() {
    let input = json!({
        "lt": "2024-01-01",
        "lte": 1_704_067_200,
        "gt": "2023-01-01T12:30:00+02:00",
        "gte": 0
    });
    let normalized = assert_validation_success!(validate_builtin("dateFilter", &input));
    assert_eq!(
        normalized,
        json!({
            "lt": "2024-01-01T00:00:00.000Z",
            "lte": "2024-01-01T00:00:00.000Z",
            "gt": "2023-01-01T10:30:00.000Z",
            "gte": "1970-01-01T00:00:00.000Z"
        })
    );
}

#[test]
fn test_no_cross_field_ordering_check() {
    let input = json!({ "gt": EPOCH_SECONDS, "lt": EPOCH_SECONDS - 86_400 });
    assert_validation_success!(validate_builtin("dateFilter", &input));

    let equal = json!({ "gte": EPOCH_SECONDS, "lt": EPOCH_SECONDS });
    assert_validation_success!(validate_builtin("dateFilter", &equal));
}

#[test]
fn test_empty_filter_is_valid() {
    let normalized = assert_validation_success!(validate_builtin("dateFilter", &json!({})));
    assert_eq!(normalized, json!({}));
}

#[test]
fn test_invalid_bounds() {
    assert_violation!(
        validate_builtin("dateFilter", &json!({ "lt": "next tuesday" })),
        ValidationError::ShapeMismatch { path, .. } if path == "lt"
    );
    assert_violation!(
        validate_builtin("dateFilter", &json!({ "gt": true })),
        ValidationError::ShapeMismatch { path, .. } if path == "gt"
    );
    assert_violation!(
        validate_builtin("dateFilter", &json!({ "between": [1, 2] })),
        ValidationError::UnknownField { path } if path == "between"
    );
    assert_violation!(
        validate_builtin("dateFilter", &json!("2023-11-14")),
        ValidationError::TypeMismatch { .. }
    );
}

#[test]
fn test_without_conversion_values_are_kept() {
    let registry = ExtensionRegistry::global();
    let input = json!({ "lt": EPOCH_SECONDS, "gt": "2023-11-14" });
    let normalized = registry
        .validate("dateFilter", &input, &ValidationOptions::new().convert(false))
        .unwrap();
    assert_eq!(normalized, input);
}

#[test]
fn test_out_of_range_epoch_rejected() {
    for seconds in [300_000_000_000i64, -100_000_000_000] {
        assert_violation!(
            validate_builtin("dateFilter", &json!({ "lt": seconds })),
            ValidationError::ShapeMismatch { path, .. } if path == "lt"
        );
    }
}

#[test]
fn test_typed_parse_without_conversion() {
    let registry = ExtensionRegistry::global();
    let input = json!({ "lt": EPOCH_SECONDS, "gt": "2023-11-14" });
    let filter =
        DateFilter::parse(registry, &input, &ValidationOptions::new().convert(false)).unwrap();
    assert_eq!(filter.lt.map(|d| d.timestamp()), Some(EPOCH_SECONDS));
    assert!(filter.gt.is_some_and(|gt| gt.timestamp() < EPOCH_SECONDS));
}
