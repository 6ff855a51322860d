//! `orderFilter` extension: query parameters for listing orders.

use super::{DATE_FILTER, enum_list};
use crate::error::SchemaResult;
use crate::filters::{FulfillmentStatus, OrderStatus, PaymentStatus};
use crate::schema::primitives::{object, string};
use crate::schema::{ExtensionRegistry, Schema};

pub const ORDER_STATUS_VALUES: &[&str] = OrderStatus::VALUES;
pub const FULFILLMENT_STATUS_VALUES: &[&str] = FulfillmentStatus::VALUES;
pub const PAYMENT_STATUS_VALUES: &[&str] = PaymentStatus::VALUES;

const TEXT_FIELDS: &[&str] = &[
    "id",
    "q",
    "display_id",
    "cart_id",
    "offset",
    "limit",
    "expand",
    "fields",
    "customer_id",
    "email",
    "region_id",
    "currency_code",
    "tax_rate",
];

const DATE_FIELDS: &[&str] = &["canceled_at", "created_at", "updated_at"];

pub fn build(registry: &ExtensionRegistry) -> SchemaResult<Schema> {
    let mut keys: Vec<(&str, Schema)> = vec![
        ("status", enum_list(ORDER_STATUS_VALUES)),
        ("fulfillment_status", enum_list(FULFILLMENT_STATUS_VALUES)),
        ("payment_status", enum_list(PAYMENT_STATUS_VALUES)),
    ];
    keys.extend(TEXT_FIELDS.iter().map(|&field| (field, string())));
    for &field in DATE_FIELDS {
        keys.push((field, registry.build(DATE_FILTER)?));
    }
    Ok(object().keys(keys))
}
