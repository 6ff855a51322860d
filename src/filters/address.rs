//! Address payload: stored-address identifier or full address.

use super::{blank_object_as_none, blank_string_as_none};
use crate::error::{SchemaResult, ValidationError, ValidationErrors};
use crate::extensions::ADDRESS;
use crate::schema::{ExtensionRegistry, ValidationOptions};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An address as it appears in order and customer payloads.
///
/// The variant is chosen by the JSON type of the normalized value: a string
/// is an identifier, an object is a full address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressPayload {
    /// Identifier of an address that already exists
    Identifier(String),
    /// Complete structured address
    Full(Address),
}

/// A structured address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub first_name: String,
    pub last_name: String,
    pub address_1: String,
    #[serde(default, deserialize_with = "blank_string_as_none", skip_serializing_if = "Option::is_none")]
    pub address_2: Option<String>,
    pub city: String,
    pub country_code: String,
    #[serde(default, deserialize_with = "blank_string_as_none", skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    pub postal_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "blank_object_as_none", skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

impl AddressPayload {
    /// Validate raw input against the registered `address` extension.
    pub fn parse(
        registry: &ExtensionRegistry,
        raw: &Value,
        options: &ValidationOptions,
    ) -> SchemaResult<Self> {
        let normalized = registry.validate(ADDRESS, raw, options)?;
        Self::from_value(normalized)
    }

    /// Discriminate an already validated value.
    pub fn from_value(value: Value) -> SchemaResult<Self> {
        match value {
            Value::String(id) => Ok(Self::Identifier(id)),
            Value::Object(_) => Ok(Self::Full(serde_json::from_value(value)?)),
            _ => Err(ValidationErrors::from(ValidationError::ShapeMismatch {
                path: "value".to_string(),
                expected: vec!["string".to_string(), "object".to_string()],
            })
            .into()),
        }
    }

    pub fn identifier(&self) -> Option<&str> {
        match self {
            Self::Identifier(id) => Some(id),
            Self::Full(_) => None,
        }
    }

    pub fn full(&self) -> Option<&Address> {
        match self {
            Self::Identifier(_) => None,
            Self::Full(address) => Some(address),
        }
    }

    /// JSON form accepted by the `address` extension.
    pub fn to_value(&self) -> SchemaResult<Value> {
        match self {
            Self::Identifier(id) => Ok(Value::String(id.clone())),
            Self::Full(address) => Ok(serde_json::to_value(address)?),
        }
    }
}
