//! Primitive schema constructors.
//!
//! These are the building blocks every extension is composed from. Each
//! function returns an unconstrained [`Schema`] of one kind; constraints are
//! added with the chaining methods on [`Schema`].

use super::types::{ArraySchema, DateFormat, ObjectSchema, Schema, SchemaKind};

/// Any value.
pub fn any() -> Schema {
    Schema::new(SchemaKind::Any)
}

/// A non-empty string.
pub fn string() -> Schema {
    Schema::new(SchemaKind::String)
}

pub fn number() -> Schema {
    Schema::new(SchemaKind::Number)
}

pub fn boolean() -> Schema {
    Schema::new(SchemaKind::Boolean)
}

/// A calendar date: an ISO 8601 / RFC 3339 string or milliseconds since the epoch.
pub fn date() -> Schema {
    Schema::new(SchemaKind::Date(DateFormat::Calendar))
}

/// A date given as seconds since the Unix epoch.
pub fn unix_timestamp() -> Schema {
    Schema::new(SchemaKind::Date(DateFormat::UnixSeconds))
}

/// An object accepting any keys until [`Schema::keys`] declares them.
pub fn object() -> Schema {
    Schema::new(SchemaKind::Object(ObjectSchema::default()))
}

/// An array accepting any items until [`Schema::items`] constrains them.
pub fn array() -> Schema {
    Schema::new(SchemaKind::Array(ArraySchema::default()))
}

/// Valid if any of the branches matches. Branches are tried in order and
/// the first full match wins.
pub fn alternatives(branches: impl IntoIterator<Item = Schema>) -> Schema {
    Schema::new(SchemaKind::Alternatives(branches.into_iter().collect()))
}
