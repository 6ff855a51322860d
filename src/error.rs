//! Error types for schema validation and extension lookup.
//!
//! Request-level problems are reported as [`ValidationError`] values collected
//! into a [`ValidationErrors`] list, one list per validation call. Programmer
//! and configuration problems, such as asking the registry for an extension
//! that was never registered, surface as [`SchemaError`].

use std::fmt;

/// Main error type for schema operations.
///
/// Wraps request validation failures together with the configuration errors
/// that can occur while resolving and building schemas.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The input did not satisfy the schema
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// A schema factory name was not found in the registry
    #[error("Unknown schema extension: {name}")]
    UnknownExtension { name: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A list parameter (`fields`, `expand`, `offset`, ...) was well-typed but not usable
    #[error("Invalid list parameter '{parameter}': '{value}'{}", allowed_suffix(.allowed))]
    InvalidListParameter {
        parameter: String,
        value: String,
        allowed: Vec<String>,
    },
}

fn allowed_suffix(allowed: &[String]) -> String {
    if allowed.is_empty() {
        String::new()
    } else {
        format!(", allowed values: {:?}", allowed)
    }
}

/// A single rule violation found while validating a value.
///
/// Every variant carries the rendered path of the offending field. Object keys
/// are joined with `.`, array positions are written as `[i]`, and the root
/// value is called `value`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required key is absent, or a value is null/empty where that is not allowed
    #[error("Field '{path}' {detail}")]
    RequiredFieldMissing { path: String, detail: String },

    /// Value is present but not coercible to the expected type
    #[error("Field '{path}' must be {expected}, got {actual}")]
    TypeMismatch {
        path: String,
        expected: String,
        actual: String,
    },

    /// Value is outside the closed literal set of an enumerated field
    #[error("Field '{path}' has invalid value '{value}', allowed values: {allowed:?}")]
    InvalidEnumValue {
        path: String,
        value: String,
        allowed: Vec<String>,
    },

    /// Input matched none of the alternative shapes
    #[error("Field '{path}' does not match any of the allowed shapes: {}", .expected.join(", "))]
    ShapeMismatch { path: String, expected: Vec<String> },

    /// Key not declared by the object schema
    #[error("Field '{path}' is not allowed")]
    UnknownField { path: String },
}

impl ValidationError {
    /// Create a missing required field error
    pub fn required(path: impl Into<String>) -> Self {
        Self::RequiredFieldMissing {
            path: path.into(),
            detail: "is required".to_string(),
        }
    }

    /// Create an error for a null or empty value where none is allowed
    pub fn empty(path: impl Into<String>, found: &str) -> Self {
        Self::RequiredFieldMissing {
            path: path.into(),
            detail: format!("cannot be {}", found),
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(
        path: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            path: path.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create an invalid enumerated value error
    pub fn invalid_enum(
        path: impl Into<String>,
        value: impl Into<String>,
        allowed: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::InvalidEnumValue {
            path: path.into(),
            value: value.into(),
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    /// Path of the offending field.
    pub fn path(&self) -> &str {
        match self {
            Self::RequiredFieldMissing { path, .. }
            | Self::TypeMismatch { path, .. }
            | Self::InvalidEnumValue { path, .. }
            | Self::ShapeMismatch { path, .. }
            | Self::UnknownField { path } => path,
        }
    }

    /// Stable identifier of the violated rule.
    pub fn rule(&self) -> &'static str {
        match self {
            Self::RequiredFieldMissing { .. } => "any.required",
            Self::TypeMismatch { .. } => "any.base",
            Self::InvalidEnumValue { .. } => "any.only",
            Self::ShapeMismatch { .. } => "alternatives.match",
            Self::UnknownField { .. } => "object.unknown",
        }
    }
}

/// Ordered, non-empty list of violations from one validation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Wrap a list of violations. Returns `None` when the list is empty.
    pub fn from_vec(errors: Vec<ValidationError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    /// First violation in document order.
    pub fn first(&self) -> &ValidationError {
        &self.errors[0]
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Paths of all violations, in order.
    pub fn paths(&self) -> Vec<&str> {
        self.errors.iter().map(ValidationError::path).collect()
    }

    pub fn into_vec(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, error) in self.errors.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

// Convenience methods for creating common errors
impl SchemaError {
    /// Create an unknown extension error
    pub fn unknown_extension(name: impl Into<String>) -> Self {
        Self::UnknownExtension { name: name.into() }
    }

    /// Create an invalid list parameter error
    pub fn invalid_list_parameter(
        parameter: impl Into<String>,
        value: impl Into<String>,
        allowed: &[&str],
    ) -> Self {
        Self::InvalidListParameter {
            parameter: parameter.into(),
            value: value.into(),
            allowed: allowed.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Violations carried by a validation failure, if any.
    pub fn violations(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

// Result type aliases for convenience
pub type SchemaResult<T> = Result<T, SchemaError>;
pub type ValidationResult<T> = Result<T, ValidationErrors>;
