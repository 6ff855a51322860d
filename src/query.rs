//! List configuration derived from validated filter parameters.
//!
//! List endpoints accept `fields`, `expand`, `offset`, `limit` and `order` as
//! plain strings. [`ListConfig`] turns them into a selection, a relation
//! list, paging and an ordering, applying the admin product defaults and
//! allow-lists.

use crate::error::{SchemaError, SchemaResult};
use crate::filters::{OrderFilter, ProductFilter};
use log::debug;
use serde::{Deserialize, Serialize};

/// Page size used when `limit` is not given.
pub const DEFAULT_LIMIT: usize = 50;

pub const DEFAULT_ADMIN_PRODUCT_RELATIONS: &[&str] = &[
    "variants",
    "variants.prices",
    "variants.options",
    "images",
    "options",
    "tags",
    "type",
    "collection",
];

pub const DEFAULT_ADMIN_PRODUCT_FIELDS: &[&str] = &[
    "id",
    "title",
    "subtitle",
    "description",
    "handle",
    "is_giftcard",
    "discountable",
    "thumbnail",
    "profile_id",
    "collection_id",
    "type_id",
    "weight",
    "length",
    "height",
    "width",
    "hs_code",
    "origin_country",
    "mid_code",
    "material",
    "created_at",
    "updated_at",
    "metadata",
];

pub const ALLOWED_ADMIN_PRODUCT_FIELDS: &[&str] = DEFAULT_ADMIN_PRODUCT_FIELDS;

pub const ALLOWED_ADMIN_PRODUCT_RELATIONS: &[&str] = &[
    "variants",
    "variants.prices",
    "images",
    "options",
    "tags",
    "type",
    "collection",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
    pub field: String,
    pub direction: SortDirection,
}

impl OrderBy {
    /// Parse `field` (ascending) or `-field` (descending).
    pub fn parse(raw: &str) -> SchemaResult<Self> {
        let raw = raw.trim();
        let (field, direction) = match raw.strip_prefix('-') {
            Some(field) => (field, SortDirection::Desc),
            None => (raw, SortDirection::Asc),
        };
        if field.is_empty() {
            return Err(SchemaError::invalid_list_parameter("order", raw, &[]));
        }
        Ok(Self {
            field: field.to_string(),
            direction,
        })
    }

    fn newest_first() -> Self {
        Self {
            field: "created_at".to_string(),
            direction: SortDirection::Desc,
        }
    }
}

/// How a list endpoint should page, project and order its results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListConfig {
    /// Columns to load; empty means all
    pub select: Vec<String>,
    /// Relations to join
    pub relations: Vec<String>,
    pub skip: usize,
    pub take: usize,
    pub order: OrderBy,
}

impl ListConfig {
    /// Build the list configuration for the admin product list endpoint.
    ///
    /// Requested fields and relations must appear in the allow-lists; when
    /// none are requested the defaults apply. `id` is always selected.
    pub fn for_products(filter: &ProductFilter) -> SchemaResult<Self> {
        let mut select = match filter.fields.as_deref() {
            Some(fields) => checked_list("fields", fields, ALLOWED_ADMIN_PRODUCT_FIELDS)?,
            None => Vec::new(),
        };
        if select.is_empty() {
            select = to_owned(DEFAULT_ADMIN_PRODUCT_FIELDS);
        } else if !select.iter().any(|f| f == "id") {
            select.insert(0, "id".to_string());
        }

        let mut relations = match filter.expand.as_deref() {
            Some(expand) => checked_list("expand", expand, ALLOWED_ADMIN_PRODUCT_RELATIONS)?,
            None => Vec::new(),
        };
        if relations.is_empty() {
            relations = to_owned(DEFAULT_ADMIN_PRODUCT_RELATIONS);
        }

        let order = match filter.order.as_deref() {
            Some(raw) => {
                let order = OrderBy::parse(raw)?;
                if !ALLOWED_ADMIN_PRODUCT_FIELDS.contains(&order.field.as_str()) {
                    return Err(SchemaError::invalid_list_parameter(
                        "order",
                        order.field,
                        ALLOWED_ADMIN_PRODUCT_FIELDS,
                    ));
                }
                order
            }
            None => OrderBy::newest_first(),
        };

        let config = Self {
            select,
            relations,
            skip: paging("offset", filter.offset.as_deref(), 0)?,
            take: paging("limit", filter.limit.as_deref(), DEFAULT_LIMIT)?,
            order,
        };
        debug!(
            "Product list config: skip={} take={} relations={}",
            config.skip,
            config.take,
            config.relations.len()
        );
        Ok(config)
    }

    /// Build the list configuration for the order list endpoint.
    ///
    /// Orders have no field allow-list; unrequested fields and relations
    /// stay empty and the caller applies its own defaults.
    pub fn for_orders(filter: &OrderFilter) -> SchemaResult<Self> {
        Ok(Self {
            select: filter.fields.as_deref().map(split_list).unwrap_or_default(),
            relations: filter.expand.as_deref().map(split_list).unwrap_or_default(),
            skip: paging("offset", filter.offset.as_deref(), 0)?,
            take: paging("limit", filter.limit.as_deref(), DEFAULT_LIMIT)?,
            order: OrderBy::newest_first(),
        })
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn checked_list(parameter: &str, raw: &str, allowed: &[&str]) -> SchemaResult<Vec<String>> {
    let entries = split_list(raw);
    if let Some(bad) = entries.iter().find(|e| !allowed.contains(&e.as_str())) {
        return Err(SchemaError::invalid_list_parameter(parameter, bad.clone(), allowed));
    }
    Ok(entries)
}

fn paging(parameter: &str, raw: Option<&str>, default: usize) -> SchemaResult<usize> {
    match raw {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<usize>()
            .map_err(|_| SchemaError::invalid_list_parameter(parameter, raw, &[])),
    }
}

fn to_owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
