//! Registry of named, reusable schema factories.
//!
//! An [`ExtensionRegistry`] maps a name such as `"address"` or `"orderFilter"`
//! to a build function that produces a fresh [`Schema`]. Build functions
//! receive the registry itself, so one extension can embed another by name.
//! References are resolved when a factory is invoked, not when it is
//! registered, so registration order between dependent extensions does not
//! matter.
//!
//! Registries are populated once at startup and shared read-only afterwards.
//! Pass one explicitly to the components that validate input, or use
//! [`ExtensionRegistry::global`] for the process-wide instance holding the
//! built-in extensions.

use super::options::ValidationOptions;
use super::types::Schema;
use super::validation::validate;
use crate::error::{SchemaError, SchemaResult};
use crate::extensions;

use log::{debug, info, warn};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Schema factory stored in the registry.
pub type BuildFn = Arc<dyn Fn(&ExtensionRegistry) -> SchemaResult<Schema> + Send + Sync>;

/// Registry of named schema factories.
#[derive(Clone, Default)]
pub struct ExtensionRegistry {
    extensions: HashMap<String, BuildFn>,
}

static GLOBAL: OnceLock<ExtensionRegistry> = OnceLock::new();

impl ExtensionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in extensions:
    /// `address`, `dateFilter`, `orderFilter` and `productFilter`.
    pub fn with_builtin_extensions() -> Self {
        let mut registry = Self::new();
        extensions::register_builtin(&mut registry);
        registry
    }

    /// Process-wide registry with the built-in extensions.
    ///
    /// Initialized on first access; later calls return the same instance.
    pub fn global() -> &'static ExtensionRegistry {
        GLOBAL.get_or_init(|| {
            info!("Initializing global schema extension registry");
            Self::with_builtin_extensions()
        })
    }

    /// Install `build` under `name`.
    ///
    /// An existing entry with the same name is replaced: the last
    /// registration wins.
    pub fn register<F>(&mut self, name: impl Into<String>, build: F)
    where
        F: Fn(&ExtensionRegistry) -> SchemaResult<Schema> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.extensions.contains_key(&name) {
            info!("Replacing schema extension '{}'", name);
        } else {
            debug!("Registering schema extension '{}'", name);
        }
        self.extensions.insert(name, Arc::new(build));
    }

    /// Look up the build function registered under `name`.
    pub fn resolve(&self, name: &str) -> SchemaResult<BuildFn> {
        self.extensions.get(name).cloned().ok_or_else(|| {
            warn!("Schema extension '{}' is not registered", name);
            SchemaError::unknown_extension(name)
        })
    }

    /// Build a fresh schema instance from the extension registered under `name`.
    pub fn build(&self, name: &str) -> SchemaResult<Schema> {
        let build = self.resolve(name)?;
        build(self)
    }

    /// Build the named schema and validate `value` against it.
    pub fn validate(
        &self,
        name: &str,
        value: &Value,
        options: &ValidationOptions,
    ) -> SchemaResult<Value> {
        let schema = self.build(name)?;
        Ok(validate(&schema, value, options)?)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.extensions.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.extensions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    /// Schema for a shipping/billing address: identifier string or full address.
    pub fn address(&self) -> SchemaResult<Schema> {
        self.build(extensions::ADDRESS)
    }

    /// Schema for a `lt`/`gt`/`gte`/`lte` timestamp range.
    pub fn date_filter(&self) -> SchemaResult<Schema> {
        self.build(extensions::DATE_FILTER)
    }

    /// Schema for order list query parameters.
    pub fn order_filter(&self) -> SchemaResult<Schema> {
        self.build(extensions::ORDER_FILTER)
    }

    /// Schema for product list query parameters.
    pub fn product_filter(&self) -> SchemaResult<Schema> {
        self.build(extensions::PRODUCT_FILTER)
    }
}

impl fmt::Debug for ExtensionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtensionRegistry")
            .field("extensions", &self.names())
            .finish()
    }
}
