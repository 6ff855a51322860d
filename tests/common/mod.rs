//! Common test utilities.
//!
//! Provides assertion macros, builders and fixtures shared by the
//! validation test modules.

use commerce_schema::{ExtensionRegistry, SchemaResult, ValidationOptions};
use serde_json::Value;

pub mod fixtures;

/// Assert that a result failed validation with a violation matching `$pattern`.
#[macro_export]
macro_rules! assert_violation {
    ($result:expr, $pattern:pat $(if $guard:expr)?) => {
        match $result {
            Err(commerce_schema::SchemaError::Validation(errors)) => assert!(
                errors.iter().any(|e| matches!(e, $pattern $(if $guard)?)),
                "No violation matched {}: {}",
                stringify!($pattern),
                errors
            ),
            Ok(value) => panic!(
                "Expected violation {}, but validation passed with {}",
                stringify!($pattern),
                value
            ),
            Err(other) => panic!("Expected validation failure, got {:?}", other),
        }
    };
}

/// Assert that an error message contains a substring.
#[macro_export]
macro_rules! assert_error_message_contains {
    ($result:expr, $substring:expr) => {
        match $result {
            Err(err) => assert!(
                err.to_string().contains($substring),
                "Error message '{}' does not contain '{}'",
                err,
                $substring
            ),
            Ok(_) => panic!(
                "Expected error containing '{}', but validation passed",
                $substring
            ),
        }
    };
}

/// Assert that validation succeeded, printing the violations otherwise.
#[macro_export]
macro_rules! assert_validation_success {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(err) => panic!("Expected validation to succeed, but got error: {}", err),
        }
    };
}

/// Validate against a built-in extension with default options.
pub fn validate_builtin(name: &str, value: &Value) -> SchemaResult<Value> {
    ExtensionRegistry::global().validate(name, value, &ValidationOptions::default())
}
