//! Schema definitions, the extension registry and the validation engine.
//!
//! # Key Types
//!
//! - [`Schema`] - Immutable description of an acceptable value
//! - [`ExtensionRegistry`] - Named schema factories (`address`, `orderFilter`, ...)
//! - [`ValidationOptions`] - Unknown-key handling and type coercion switches
//!
//! # Examples
//!
//! ```rust
//! use commerce_schema::schema::{ExtensionRegistry, ValidationOptions};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = ExtensionRegistry::with_builtin_extensions();
//! let filter = registry.order_filter()?;
//! let normalized = filter.validate_with(&json!({ "status": "pending" }), &ValidationOptions::default())?;
//! assert_eq!(normalized["status"], json!(["pending"]));
//! # Ok(())
//! # }
//! ```

pub mod options;
pub mod primitives;
pub mod registry;
pub mod types;
pub mod validation;


// Re-export the main types for convenience
pub use options::ValidationOptions;
pub use registry::{BuildFn, ExtensionRegistry};
pub use types::{ArraySchema, DateFormat, ObjectSchema, Presence, Schema, SchemaKind};
pub use validation::validate;
