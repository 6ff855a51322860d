//! Order list filter.

use super::{DateFilter, literal_enum, parse_extension};
use crate::error::SchemaResult;
use crate::extensions::ORDER_FILTER;
use crate::schema::{ExtensionRegistry, ValidationOptions};
use serde::{Deserialize, Serialize};
use serde_json::Value;

literal_enum! {
    /// Lifecycle status of an order.
    pub enum OrderStatus {
        Pending => "pending",
        Completed => "completed",
        Archived => "archived",
        Canceled => "canceled",
        RequiresAction => "requires_action",
    }
}

literal_enum! {
    /// Fulfillment progress of an order.
    pub enum FulfillmentStatus {
        NotFulfilled => "not_fulfilled",
        Fulfilled => "fulfilled",
        PartiallyFulfilled => "partially_fulfilled",
        Shipped => "shipped",
        PartiallyShipped => "partially_shipped",
        Canceled => "canceled",
        Returned => "returned",
        PartiallyReturned => "partially_returned",
        RequiresAction => "requires_action",
    }
}

literal_enum! {
    /// Payment progress of an order.
    pub enum PaymentStatus {
        Captured => "captured",
        Awaiting => "awaiting",
        NotPaid => "not_paid",
        Refunded => "refunded",
        PartiallyRefunded => "partially_refunded",
        Canceled => "canceled",
        RequiresAction => "requires_action",
    }
}

/// Query parameters accepted by the order list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderFilter {
    pub id: Option<String>,
    pub q: Option<String>,
    pub status: Vec<OrderStatus>,
    pub fulfillment_status: Vec<FulfillmentStatus>,
    pub payment_status: Vec<PaymentStatus>,
    pub display_id: Option<String>,
    pub cart_id: Option<String>,
    pub customer_id: Option<String>,
    pub email: Option<String>,
    pub region_id: Option<String>,
    pub currency_code: Option<String>,
    pub tax_rate: Option<String>,
    pub offset: Option<String>,
    pub limit: Option<String>,
    pub expand: Option<String>,
    pub fields: Option<String>,
    pub created_at: Option<DateFilter>,
    pub updated_at: Option<DateFilter>,
    pub canceled_at: Option<DateFilter>,
}

impl OrderFilter {
    pub fn parse(
        registry: &ExtensionRegistry,
        raw: &Value,
        options: &ValidationOptions,
    ) -> SchemaResult<Self> {
        parse_extension(registry, ORDER_FILTER, raw, options)
    }
}
