//! Options controlling a single validation call.

use serde::{Deserialize, Serialize};

/// Options for [`validate`](super::validation::validate).
///
/// Can be loaded from JSON using camelCase keys:
///
/// ```rust
/// use commerce_schema::schema::ValidationOptions;
///
/// let options: ValidationOptions =
///     serde_json::from_str(r#"{ "allowUnknown": true }"#).unwrap();
/// assert!(options.allow_unknown);
/// assert!(options.convert);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationOptions {
    /// Keep object keys that the schema does not declare instead of rejecting them.
    pub allow_unknown: bool,
    /// Drop undeclared object keys silently. Takes precedence over `allow_unknown`.
    pub strip_unknown: bool,
    /// Coerce values into their schema type (numeric strings, timestamps, dates).
    pub convert: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            allow_unknown: false,
            strip_unknown: false,
            convert: true,
        }
    }
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow_unknown(mut self, allow: bool) -> Self {
        self.allow_unknown = allow;
        self
    }

    pub fn strip_unknown(mut self, strip: bool) -> Self {
        self.strip_unknown = strip;
        self
    }

    pub fn convert(mut self, convert: bool) -> Self {
        self.convert = convert;
        self
    }
}
