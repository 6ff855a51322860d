//! Typed views over normalized payloads.
//!
//! The extension schemas produce normalized JSON. The types here turn that
//! JSON into Rust values for handlers: enumerated fields become enums,
//! single-or-many fields become `Vec`s, timestamps become
//! [`chrono::DateTime<Utc>`](chrono::DateTime) and blank optional values
//! become `None`.
//!
//! Every type offers `parse`, which validates raw input against the
//! corresponding registered extension and then deserializes the result.

/// Declares an enum over a closed set of string literals, with a `VALUES` table.
macro_rules! literal_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($variant:ident => $literal:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(#[serde(rename = $literal)] $variant),+
        }

        impl $name {
            /// Every accepted literal, in declaration order.
            pub const VALUES: &'static [&'static str] = &[$($literal),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $literal),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use literal_enum;

pub mod address;
pub mod date;
pub mod order;
pub mod product;

pub use address::{Address, AddressPayload};
pub use date::DateFilter;
pub use order::{FulfillmentStatus, OrderFilter, OrderStatus, PaymentStatus};
pub use product::{ProductFilter, ProductStatus};

use crate::error::SchemaResult;
use crate::schema::{ExtensionRegistry, ValidationOptions};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Validate `raw` against the extension `name`, then deserialize.
pub(crate) fn parse_extension<T: DeserializeOwned>(
    registry: &ExtensionRegistry,
    name: &str,
    raw: &Value,
    options: &ValidationOptions,
) -> SchemaResult<T> {
    let normalized = registry.validate(name, raw, options)?;
    Ok(serde_json::from_value(normalized)?)
}

/// Deserialize an optional string, treating `""` like an absent value.
pub(crate) fn blank_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// Deserialize an optional object, treating `{}` like an absent value.
pub(crate) fn blank_object_as_none<'de, D>(
    deserializer: D,
) -> Result<Option<Map<String, Value>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Map<String, Value>>::deserialize(deserializer)?;
    Ok(value.filter(|m| !m.is_empty()))
}
