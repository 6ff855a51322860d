//! Request validation schemas for commerce APIs.
//!
//! Provides composable schema primitives, a registry of named reusable
//! schema factories, and a validation engine that normalizes raw API
//! payloads and query parameters before they reach business logic.
//!
//! # Core Components
//!
//! - [`Schema`] - Declarative description of an acceptable value
//! - [`ExtensionRegistry`] - Named schema factories (`address`, `dateFilter`,
//!   `orderFilter`, `productFilter`)
//! - [`validate`] - Validation engine returning the normalized value or every violation
//! - [`filters`] - Typed views over normalized payloads
//!
//! # Quick Start
//!
//! ```rust
//! use commerce_schema::{ExtensionRegistry, ValidationOptions};
//! use commerce_schema::filters::{ProductFilter, ProductStatus};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = ExtensionRegistry::with_builtin_extensions();
//! let query = json!({ "status": "published", "created_at": { "gte": 1700000000 } });
//!
//! let filter = ProductFilter::parse(&registry, &query, &ValidationOptions::default())?;
//! assert_eq!(filter.status, vec![ProductStatus::Published]);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod extensions;
pub mod filters;
pub mod query;
pub mod schema;

// Re-export commonly used types for convenience
pub use error::{SchemaError, SchemaResult, ValidationError, ValidationErrors, ValidationResult};
pub use query::ListConfig;
pub use schema::{ExtensionRegistry, Schema, ValidationOptions, validate};
