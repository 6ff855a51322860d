//! Timestamp range filter.

use super::parse_extension;
use crate::error::SchemaResult;
use crate::extensions::DATE_FILTER;
use crate::schema::validation::{from_unix_seconds, parse_calendar};
use crate::schema::{ExtensionRegistry, ValidationOptions};
use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Open or closed range over a timestamp field.
///
/// Bounds are independent: nothing checks that `gt` lies before `lt`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFilter {
    #[serde(default, deserialize_with = "bound", skip_serializing_if = "Option::is_none")]
    pub lt: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "bound", skip_serializing_if = "Option::is_none")]
    pub gt: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "bound", skip_serializing_if = "Option::is_none")]
    pub gte: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "bound", skip_serializing_if = "Option::is_none")]
    pub lte: Option<DateTime<Utc>>,
}

impl DateFilter {
    pub fn parse(
        registry: &ExtensionRegistry,
        raw: &Value,
        options: &ValidationOptions,
    ) -> SchemaResult<Self> {
        parse_extension(registry, DATE_FILTER, raw, options)
    }

    pub fn is_empty(&self) -> bool {
        self.lt.is_none() && self.gt.is_none() && self.gte.is_none() && self.lte.is_none()
    }

    /// Whether `instant` satisfies every bound that is set.
    pub fn contains(&self, instant: &DateTime<Utc>) -> bool {
        self.lt.is_none_or(|bound| *instant < bound)
            && self.lte.is_none_or(|bound| *instant <= bound)
            && self.gt.is_none_or(|bound| *instant > bound)
            && self.gte.is_none_or(|bound| *instant >= bound)
    }
}

/// Read a bound in any form the `dateFilter` schema accepts.
///
/// Normalized bounds are RFC 3339 strings; without conversion they stay as
/// epoch seconds (numbers) or calendar strings.
fn bound<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let parsed = match &value {
        Value::Number(n) => n.as_f64().and_then(from_unix_seconds),
        Value::String(s) => parse_calendar(s),
        _ => None,
    };
    parsed
        .map(Some)
        .ok_or_else(|| D::Error::custom(format!("invalid date bound: {}", value)))
}
