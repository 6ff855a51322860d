//! Shared payload fixtures.

use serde_json::{Value, json};

/// A structured address with every required field and no optional ones.
pub fn full_address() -> Value {
    json!({
        "first_name": "Ada",
        "last_name": "Lovelace",
        "address_1": "12 St James's Square",
        "city": "London",
        "country_code": "gb",
        "postal_code": "SW1Y 4JH"
    })
}

/// Required address fields in declaration order.
pub const REQUIRED_ADDRESS_FIELDS: [&str; 6] = [
    "first_name",
    "last_name",
    "address_1",
    "city",
    "country_code",
    "postal_code",
];

/// 2023-11-14T22:13:20Z
pub const EPOCH_SECONDS: i64 = 1_700_000_000;
pub const EPOCH_NORMALIZED: &str = "2023-11-14T22:13:20.000Z";
