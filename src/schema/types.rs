//! Core schema type definitions.
//!
//! This module contains the immutable data structures that describe an
//! acceptable value: its kind, child schemas for composite kinds, and the
//! constraints layered on top (presence, allowed literals, closed value sets,
//! defaults). Schemas are plain values and can be shared freely across
//! threads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A declarative description of an acceptable value.
///
/// Built with the constructors in [`super::primitives`] and refined with the
/// chaining methods below. Every method consumes and returns the schema, so
/// definitions read top to bottom:
///
/// ```rust
/// use commerce_schema::schema::primitives::{object, string};
/// use serde_json::{Value, json};
///
/// let schema = object().keys([
///     ("first_name", string().required()),
///     ("province", string().allow([Value::Null, json!("")])),
/// ]);
/// assert!(schema.validate(&json!({ "first_name": "Ada" })).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// Base kind and child schemas
    pub kind: SchemaKind,
    /// Whether the value must be present when used as an object key
    #[serde(default)]
    pub presence: Presence,
    /// Literals accepted as-is, bypassing every other rule
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed: Vec<Value>,
    /// Closed literal set; when non-empty, only these values are accepted
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub valid: Vec<Value>,
    /// Value substituted when the key is absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

/// Base kind of a schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SchemaKind {
    /// Any JSON value
    #[default]
    Any,
    /// Non-empty string
    String,
    /// Number; numeric strings are coerced when conversion is enabled
    Number,
    /// Boolean; `"true"`/`"false"` are coerced when conversion is enabled
    Boolean,
    /// Date value in the given input representation
    Date(DateFormat),
    /// JSON object, optionally with a declared key set
    Object(ObjectSchema),
    /// JSON array
    Array(ArraySchema),
    /// Valid if any branch matches; branches are tried in order
    Alternatives(Vec<Schema>),
}

/// Input representation accepted by a date schema.
///
/// Both representations normalize to the same RFC 3339 UTC string with
/// millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DateFormat {
    /// Calendar date or date-time string, or milliseconds since the epoch
    Calendar,
    /// Seconds since the Unix epoch, as a number or numeric string
    UnixSeconds,
}

/// Object shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectSchema {
    /// Declared keys in declaration order. `None` accepts any keys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keys: Option<Vec<(String, Schema)>>,
}

/// Array shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArraySchema {
    /// Schema every item must satisfy. `None` accepts any items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    /// Accept a bare scalar and wrap it into a one-element array
    #[serde(default)]
    pub single: bool,
}

/// Presence requirement for an object key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Presence {
    /// Key may be absent
    #[default]
    Optional,
    /// Key must be present
    Required,
}

impl Schema {
    /// Create a schema of the given kind with no constraints.
    pub fn new(kind: SchemaKind) -> Self {
        Self {
            kind,
            presence: Presence::Optional,
            allowed: Vec::new(),
            valid: Vec::new(),
            default: None,
        }
    }

    /// Require the key to be present.
    pub fn required(mut self) -> Self {
        self.presence = Presence::Required;
        self
    }

    /// Allow the key to be absent.
    pub fn optional(mut self) -> Self {
        self.presence = Presence::Optional;
        self
    }

    /// Accept the given literals as-is, in addition to whatever the kind accepts.
    pub fn allow(mut self, values: impl IntoIterator<Item = Value>) -> Self {
        self.allowed.extend(values);
        self
    }

    /// Restrict the value to a closed set of literals.
    pub fn valid<V: Into<Value>>(mut self, values: impl IntoIterator<Item = V>) -> Self {
        self.valid.extend(values.into_iter().map(Into::into));
        self
    }

    /// Value to use when the key is absent.
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Declare the object's keys. Turns the schema into an object schema.
    pub fn keys<K: Into<String>>(mut self, keys: impl IntoIterator<Item = (K, Schema)>) -> Self {
        let keys = keys.into_iter().map(|(k, s)| (k.into(), s)).collect();
        self.kind = SchemaKind::Object(ObjectSchema { keys: Some(keys) });
        self
    }

    /// Constrain array items. Turns the schema into an array schema.
    pub fn items(mut self, item: Schema) -> Self {
        let single = self.is_single();
        self.kind = SchemaKind::Array(ArraySchema {
            items: Some(Box::new(item)),
            single,
        });
        self
    }

    /// Accept a bare value in place of an array. Turns the schema into an array schema.
    pub fn single(mut self) -> Self {
        match &mut self.kind {
            SchemaKind::Array(array) => array.single = true,
            _ => {
                self.kind = SchemaKind::Array(ArraySchema {
                    items: None,
                    single: true,
                })
            }
        }
        self
    }

    pub fn is_required(&self) -> bool {
        self.presence == Presence::Required
    }

    fn is_single(&self) -> bool {
        matches!(&self.kind, SchemaKind::Array(array) if array.single)
    }

    /// Look up a declared key of an object schema.
    pub fn key(&self, name: &str) -> Option<&Schema> {
        match &self.kind {
            SchemaKind::Object(ObjectSchema { keys: Some(keys) }) => {
                keys.iter().find(|(k, _)| k == name).map(|(_, s)| s)
            }
            _ => None,
        }
    }

    /// Names of the declared keys of an object schema, in declaration order.
    pub fn key_names(&self) -> Vec<&str> {
        match &self.kind {
            SchemaKind::Object(ObjectSchema { keys: Some(keys) }) => {
                keys.iter().map(|(k, _)| k.as_str()).collect()
            }
            _ => Vec::new(),
        }
    }
}

impl SchemaKind {
    /// Short human-readable name used in error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Date(DateFormat::Calendar) => "date",
            Self::Date(DateFormat::UnixSeconds) => "unix timestamp",
            Self::Object(_) => "object",
            Self::Array(_) => "array",
            Self::Alternatives(_) => "alternatives",
        }
    }
}
