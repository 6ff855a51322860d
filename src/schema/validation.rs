//! Validation engine.
//!
//! Walks a [`Schema`] and a raw JSON value together, producing either the
//! normalized value or every rule violation found along the way. Validation
//! is a pure computation: it performs no I/O, holds no shared state and can
//! run concurrently against the same schema from any number of threads.
//!
//! Rules are applied to each value in this order:
//!
//! 1. absent key: default value, else `required` check
//! 2. explicitly allowed literals pass through unchanged
//! 3. `null` is rejected
//! 4. closed literal sets (`valid`)
//! 5. kind-specific checks and coercions

use super::options::ValidationOptions;
use super::types::{ArraySchema, DateFormat, ObjectSchema, Schema, SchemaKind};
use crate::error::{ValidationError, ValidationErrors, ValidationResult};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use log::debug;
use serde_json::{Map, Number, Value};
use std::fmt;

/// Validate `value` against `schema`.
///
/// Returns the normalized value on success. On failure every violation is
/// returned in document order; validation never stops at the first error.
pub fn validate(
    schema: &Schema,
    value: &Value,
    options: &ValidationOptions,
) -> ValidationResult<Value> {
    let validator = Validator { options };
    let mut path = FieldPath::default();
    let mut errors = Vec::new();

    let normalized = validator.check(schema, Some(value), &mut path, &mut errors);

    match ValidationErrors::from_vec(errors) {
        None => Ok(normalized.unwrap_or(Value::Null)),
        Some(errors) => {
            debug!("Validation failed with {} violation(s)", errors.len());
            Err(errors)
        }
    }
}

impl Schema {
    /// Validate with default options.
    pub fn validate(&self, value: &Value) -> ValidationResult<Value> {
        validate(self, value, &ValidationOptions::default())
    }

    /// Validate with explicit options.
    pub fn validate_with(
        &self,
        value: &Value,
        options: &ValidationOptions,
    ) -> ValidationResult<Value> {
        validate(self, value, options)
    }
}

#[derive(Debug, Clone)]
enum Segment {
    Key(String),
    Index(usize),
}

/// Location of the value currently being checked.
#[derive(Debug, Clone, Default)]
struct FieldPath {
    segments: Vec<Segment>,
}

impl FieldPath {
    fn push_key(&mut self, key: &str) {
        self.segments.push(Segment::Key(key.to_string()));
    }

    fn push_index(&mut self, index: usize) {
        self.segments.push(Segment::Index(index));
    }

    fn pop(&mut self) {
        self.segments.pop();
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("value");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Key(key) if i == 0 => f.write_str(key)?,
                Segment::Key(key) => write!(f, ".{}", key)?,
                Segment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

struct Validator<'a> {
    options: &'a ValidationOptions,
}

impl Validator<'_> {
    /// Check one value. `None` means the key is absent; a `None` result means
    /// the key stays absent in the output.
    fn check(
        &self,
        schema: &Schema,
        value: Option<&Value>,
        path: &mut FieldPath,
        errors: &mut Vec<ValidationError>,
    ) -> Option<Value> {
        let Some(value) = value else {
            if let Some(default) = &schema.default {
                return Some(default.clone());
            }
            if schema.is_required() {
                errors.push(ValidationError::required(path.to_string()));
            }
            return None;
        };

        if schema.allowed.contains(value) {
            return Some(value.clone());
        }

        if value.is_null() {
            errors.push(ValidationError::empty(path.to_string(), "null"));
            return None;
        }

        if !schema.valid.is_empty() {
            if schema.valid.contains(value) {
                return Some(value.clone());
            }
            errors.push(ValidationError::invalid_enum(
                path.to_string(),
                literal(value),
                schema.valid.iter().map(literal),
            ));
            return None;
        }

        match &schema.kind {
            SchemaKind::Any => Some(value.clone()),
            SchemaKind::String => self.check_string(value, path, errors),
            SchemaKind::Number => self.check_number(value, path, errors),
            SchemaKind::Boolean => self.check_boolean(value, path, errors),
            SchemaKind::Date(format) => self.check_date(*format, value, path, errors),
            SchemaKind::Object(object) => self.check_object(object, value, path, errors),
            SchemaKind::Array(array) => self.check_array(array, value, path, errors),
            SchemaKind::Alternatives(branches) => {
                self.check_alternatives(branches, value, path, errors)
            }
        }
    }

    fn check_string(
        &self,
        value: &Value,
        path: &FieldPath,
        errors: &mut Vec<ValidationError>,
    ) -> Option<Value> {
        match value {
            Value::String(s) if s.is_empty() => {
                errors.push(ValidationError::empty(path.to_string(), "empty"));
                None
            }
            Value::String(_) => Some(value.clone()),
            other => {
                errors.push(mismatch(path, "a string", other));
                None
            }
        }
    }

    fn check_number(
        &self,
        value: &Value,
        path: &FieldPath,
        errors: &mut Vec<ValidationError>,
    ) -> Option<Value> {
        match value {
            Value::Number(_) => Some(value.clone()),
            Value::String(s) if self.options.convert => match parse_number(s) {
                Some(number) => Some(Value::Number(number)),
                None => {
                    errors.push(mismatch(path, "a number", value));
                    None
                }
            },
            other => {
                errors.push(mismatch(path, "a number", other));
                None
            }
        }
    }

    fn check_boolean(
        &self,
        value: &Value,
        path: &FieldPath,
        errors: &mut Vec<ValidationError>,
    ) -> Option<Value> {
        match value {
            Value::Bool(_) => Some(value.clone()),
            Value::String(s) if self.options.convert && s.eq_ignore_ascii_case("true") => {
                Some(Value::Bool(true))
            }
            Value::String(s) if self.options.convert && s.eq_ignore_ascii_case("false") => {
                Some(Value::Bool(false))
            }
            other => {
                errors.push(mismatch(path, "a boolean", other));
                None
            }
        }
    }

    fn check_date(
        &self,
        format: DateFormat,
        value: &Value,
        path: &FieldPath,
        errors: &mut Vec<ValidationError>,
    ) -> Option<Value> {
        let parsed = match (format, value) {
            (DateFormat::Calendar, Value::String(s)) => parse_calendar(s),
            (DateFormat::Calendar, Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f.round() as i64))
                .and_then(DateTime::from_timestamp_millis),
            (DateFormat::UnixSeconds, Value::Number(n)) => n.as_f64().and_then(from_unix_seconds),
            (DateFormat::UnixSeconds, Value::String(s)) if self.options.convert => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .and_then(from_unix_seconds),
            _ => None,
        };

        let Some(date) = parsed.filter(is_four_digit_year) else {
            let expected = match format {
                DateFormat::Calendar => "a valid date",
                DateFormat::UnixSeconds => "a unix timestamp",
            };
            errors.push(mismatch(path, expected, value));
            return None;
        };

        if self.options.convert {
            Some(Value::String(
                date.to_rfc3339_opts(SecondsFormat::Millis, true),
            ))
        } else {
            Some(value.clone())
        }
    }

    fn check_object(
        &self,
        object: &ObjectSchema,
        value: &Value,
        path: &mut FieldPath,
        errors: &mut Vec<ValidationError>,
    ) -> Option<Value> {
        let Value::Object(input) = value else {
            errors.push(mismatch(path, "an object", value));
            return None;
        };

        let Some(keys) = &object.keys else {
            return Some(value.clone());
        };

        let mut output = Map::new();

        for (key, child) in keys {
            path.push_key(key);
            if let Some(normalized) = self.check(child, input.get(key), path, errors) {
                output.insert(key.clone(), normalized);
            }
            path.pop();
        }

        for (key, child_value) in input {
            if keys.iter().any(|(declared, _)| declared == key) {
                continue;
            }
            if self.options.strip_unknown {
                continue;
            }
            if self.options.allow_unknown {
                output.insert(key.clone(), child_value.clone());
                continue;
            }
            path.push_key(key);
            errors.push(ValidationError::UnknownField {
                path: path.to_string(),
            });
            path.pop();
        }

        Some(Value::Object(output))
    }

    fn check_array(
        &self,
        array: &ArraySchema,
        value: &Value,
        path: &mut FieldPath,
        errors: &mut Vec<ValidationError>,
    ) -> Option<Value> {
        let wrapped;
        let items: &[Value] = match value {
            Value::Array(items) => items,
            other if array.single => {
                wrapped = [other.clone()];
                &wrapped
            }
            other => {
                errors.push(mismatch(path, "an array", other));
                return None;
            }
        };

        let Some(item_schema) = &array.items else {
            return Some(Value::Array(items.to_vec()));
        };

        let mut output = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            path.push_index(index);
            if let Some(normalized) = self.check(item_schema, Some(item), path, errors) {
                output.push(normalized);
            }
            path.pop();
        }

        Some(Value::Array(output))
    }

    /// The first branch that matches fully wins. When none does, the errors of
    /// the first branch whose base type fit the input are reported; if no
    /// branch even fit the input's type, a single shape mismatch is reported.
    fn check_alternatives(
        &self,
        branches: &[Schema],
        value: &Value,
        path: &mut FieldPath,
        errors: &mut Vec<ValidationError>,
    ) -> Option<Value> {
        let here = path.to_string();
        let mut most_specific: Option<Vec<ValidationError>> = None;

        for branch in branches {
            let mut branch_errors = Vec::new();
            let normalized = self.check(branch, Some(value), path, &mut branch_errors);
            if branch_errors.is_empty() {
                return normalized;
            }
            if most_specific.is_none() && !is_base_type_mismatch(&branch_errors, &here) {
                most_specific = Some(branch_errors);
            }
        }

        match most_specific {
            Some(branch_errors) => errors.extend(branch_errors),
            None => errors.push(ValidationError::ShapeMismatch {
                path: here,
                expected: branches
                    .iter()
                    .map(|b| b.kind.describe().to_string())
                    .collect(),
            }),
        }
        None
    }
}

fn is_base_type_mismatch(errors: &[ValidationError], here: &str) -> bool {
    matches!(
        errors,
        [ValidationError::TypeMismatch { path, .. } | ValidationError::ShapeMismatch { path, .. }]
            if path == here
    )
}

fn mismatch(path: &FieldPath, expected: &str, actual: &Value) -> ValidationError {
    ValidationError::type_mismatch(path.to_string(), expected, value_type(actual))
}

/// Get the type name of a JSON value for error messages.
fn value_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(s) if s.is_empty() => "empty string",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn literal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn parse_number(raw: &str) -> Option<Number> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(int) = trimmed.parse::<i64>() {
        return Some(Number::from(int));
    }
    trimmed
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
}

/// RFC 3339 output only round-trips for years 0000 through 9999.
fn is_four_digit_year(date: &DateTime<Utc>) -> bool {
    (0..=9999).contains(&date.year())
}

pub(crate) fn from_unix_seconds(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    let whole = seconds.floor();
    let nanos = ((seconds - whole) * 1e9).round().min(999_999_999.0) as u32;
    DateTime::from_timestamp(whole as i64, nanos)
}

/// Parse a calendar date string.
///
/// Accepts RFC 3339 date-times, zone-less date-times (taken as UTC), plain
/// dates (midnight UTC) and integer millisecond timestamps.
pub(crate) fn parse_calendar(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(date) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(date.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(day) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return day.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }
    trimmed
        .parse::<i64>()
        .ok()
        .and_then(DateTime::from_timestamp_millis)
}
