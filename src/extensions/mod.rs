//! Built-in domain schema extensions.
//!
//! Each submodule provides one build function that can be installed into an
//! [`ExtensionRegistry`] under the name given by the constants below.
//! Filter extensions embed `dateFilter` by name, so a registry that replaces
//! `dateFilter` changes the temporal fields of every filter built afterwards.

pub mod address;
pub mod date_filter;
pub mod order_filter;
pub mod product_filter;

use crate::schema::ExtensionRegistry;
use crate::schema::Schema;
use crate::schema::primitives::{array, string};

pub use order_filter::{FULFILLMENT_STATUS_VALUES, ORDER_STATUS_VALUES, PAYMENT_STATUS_VALUES};
pub use product_filter::PRODUCT_STATUS_VALUES;

pub const ADDRESS: &str = "address";
pub const DATE_FILTER: &str = "dateFilter";
pub const ORDER_FILTER: &str = "orderFilter";
pub const PRODUCT_FILTER: &str = "productFilter";

/// Install the built-in extensions into `registry`.
pub fn register_builtin(registry: &mut ExtensionRegistry) {
    registry.register(ADDRESS, address::build);
    registry.register(DATE_FILTER, date_filter::build);
    registry.register(ORDER_FILTER, order_filter::build);
    registry.register(PRODUCT_FILTER, product_filter::build);
}

/// One string or an array of strings, normalized to an array.
pub(crate) fn string_list() -> Schema {
    array().items(string()).single()
}

/// One literal or an array of literals from a closed set, normalized to an array.
pub(crate) fn enum_list(values: &[&str]) -> Schema {
    array().items(string().valid(values.iter().copied())).single()
}
