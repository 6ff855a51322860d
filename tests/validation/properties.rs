//! Property-based tests for the built-in extensions.

use crate::common::validate_builtin;
use crate::common::fixtures::full_address;

use commerce_schema::extensions::{ORDER_STATUS_VALUES, PRODUCT_STATUS_VALUES};
use commerce_schema::{SchemaError, ValidationError};
use proptest::prelude::*;
use serde_json::{Value, json};

fn order_status() -> impl Strategy<Value = &'static str> {
    prop::sample::select(ORDER_STATUS_VALUES)
}

fn product_status() -> impl Strategy<Value = &'static str> {
    prop::sample::select(PRODUCT_STATUS_VALUES)
}

/// Epoch seconds between 1970 and 2100.
fn epoch_seconds() -> impl Strategy<Value = i64> {
    0i64..4_102_444_800
}

proptest! {
    #[test]
    fn any_string_is_an_address_identifier(id in ".*") {
        let normalized = validate_builtin("address", &json!(id)).unwrap();
        prop_assert_eq!(normalized, json!(id));
    }

    #[test]
    fn address_validation_is_idempotent(phone in "[0-9 +]{1,16}", province in prop::option::of("[A-Z]{2}")) {
        let mut address = full_address();
        address["phone"] = json!(phone);
        address["province"] = province.map(Value::from).unwrap_or(Value::Null);

        let once = validate_builtin("address", &address).unwrap();
        let twice = validate_builtin("address", &once).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn unknown_order_status_rejected(status in "[a-z_]{1,20}") {
        prop_assume!(!ORDER_STATUS_VALUES.contains(&status.as_str()));
        let result = validate_builtin("orderFilter", &json!({ "status": status }));
        match result {
            Err(SchemaError::Validation(errors)) => {
                prop_assert_eq!(errors.len(), 1);
                let is_enum_error = matches!(
                    errors.first(),
                    ValidationError::InvalidEnumValue { path, .. } if path == "status[0]"
                );
                prop_assert!(is_enum_error);
            }
            other => prop_assert!(false, "expected InvalidEnumValue, got {:?}", other),
        }
    }

    #[test]
    fn order_status_lists_survive_normalization(statuses in prop::collection::vec(order_status(), 1..5)) {
        let query = json!({ "status": statuses });
        let once = validate_builtin("orderFilter", &query).unwrap();
        prop_assert_eq!(&once, &query);
        let twice = validate_builtin("orderFilter", &once).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn product_query_validation_is_idempotent(
        status in product_status(),
        created in epoch_seconds(),
        q in prop::option::of("[a-z ]{0,12}"),
    ) {
        let mut query = json!({
            "status": status,
            "created_at": { "gte": created },
        });
        if let Some(q) = q {
            query["q"] = json!(q);
        }

        let once = validate_builtin("productFilter", &query).unwrap();
        let twice = validate_builtin("productFilter", &once).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn epoch_seconds_and_calendar_dates_agree(seconds in epoch_seconds()) {
        let from_epoch = validate_builtin("dateFilter", &json!({ "lt": seconds })).unwrap();
        let rendered = from_epoch["lt"].as_str().unwrap().to_string();
        prop_assert!(rendered.ends_with(".000Z"));

        let from_calendar = validate_builtin("dateFilter", &json!({ "lt": rendered })).unwrap();
        prop_assert_eq!(from_epoch, from_calendar);
    }

    #[test]
    fn accepted_bounds_revalidate(seconds in -400_000_000_000i64..400_000_000_000) {
        if let Ok(once) = validate_builtin("dateFilter", &json!({ "lt": seconds })) {
            let twice = validate_builtin("dateFilter", &once).unwrap();
            prop_assert_eq!(once, twice);
        }
    }

    #[test]
    fn epoch_strings_match_epoch_numbers(seconds in epoch_seconds()) {
        let from_number = validate_builtin("dateFilter", &json!({ "gte": seconds })).unwrap();
        let from_string = validate_builtin("dateFilter", &json!({ "gte": seconds.to_string() })).unwrap();
        prop_assert_eq!(from_number, from_string);
    }
}
