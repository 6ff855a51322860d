//! `address` extension: shipping/billing address payloads.
//!
//! An address arrives either as the identifier of a stored address or as a
//! complete structured address. The identifier branch is tried first and
//! accepts any string; anything else must be a full address object.

use crate::error::SchemaResult;
use crate::schema::primitives::{alternatives, object, string};
use crate::schema::{ExtensionRegistry, Schema};
use serde_json::{Value, json};

pub fn build(_registry: &ExtensionRegistry) -> SchemaResult<Schema> {
    Ok(alternatives([identifier(), structured()]))
}

fn identifier() -> Schema {
    string().allow([json!("")])
}

fn structured() -> Schema {
    let blank = || [Value::Null, json!("")];

    object().keys([
        ("first_name", string().required()),
        ("last_name", string().required()),
        ("address_1", string().required()),
        ("address_2", string().allow(blank()).optional()),
        ("city", string().required()),
        ("country_code", string().required()),
        ("province", string().allow(blank()).optional()),
        ("postal_code", string().required()),
        ("phone", string().optional()),
        ("metadata", object().allow([Value::Null, json!({})]).optional()),
    ])
}
