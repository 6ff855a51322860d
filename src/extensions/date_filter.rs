//! `dateFilter` extension: open or closed range over a timestamp field.
//!
//! Each bound accepts Unix-epoch seconds or a calendar date and normalizes to
//! the same RFC 3339 UTC string. Bounds are not checked against each other;
//! `{ "gt": b, "lt": a }` with `a < b` is accepted as given.

use crate::error::SchemaResult;
use crate::schema::primitives::{alternatives, date, object, unix_timestamp};
use crate::schema::{ExtensionRegistry, Schema};

/// Range operators accepted by the filter.
pub const OPERATORS: [&str; 4] = ["lt", "gt", "gte", "lte"];

pub fn build(_registry: &ExtensionRegistry) -> SchemaResult<Schema> {
    Ok(object().keys(OPERATORS.map(|op| (op, bound()))))
}

fn bound() -> Schema {
    alternatives([unix_timestamp(), date()])
}
