//! Service Registry
//!
//! Stores raw service definitions and lazily constructs singleton instances
//! on first access. Construction consults the contract table for class
//! substitution and overrides, resolves arguments through the argument
//! resolver (which may recurse back in here for `@` references), runs the
//! capability-checked post-construction calls, then caches the handle.
//!
//! The instance cache is the one registry mutated after its load phase; all
//! of that mutation happens on the single bootstrap thread, so a `RefCell`
//! carries the cache-and-return contract.

use std::cell::RefCell;
use std::collections::HashMap;

use indexmap::IndexMap;
use tracing::debug;

use ign_domain::{Error, Result};

use crate::documents::ServiceConfig;
use crate::handle::ServiceHandle;
use crate::registry::{SERVICE_CLASSES, lookup_service_class};
use crate::resolver::ArgumentResolver;

/// Lazily constructing singleton store for configured services
#[derive(Debug, Default)]
pub struct ServiceRegistry {
    definitions: IndexMap<String, ServiceConfig>,
    instances: RefCell<HashMap<String, ServiceHandle>>,
}

impl ServiceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a definition without constructing anything
    pub fn define(&mut self, id: impl Into<String>, definition: ServiceConfig) -> Result<()> {
        let id = id.into();
        if self.definitions.contains_key(&id) {
            return Err(Error::configuration(format!("duplicate service id '{id}'")));
        }
        self.definitions.insert(id, definition);
        Ok(())
    }

    /// The raw definition for `id`, if one was loaded
    pub fn definition(&self, id: &str) -> Option<&ServiceConfig> {
        self.definitions.get(id)
    }

    /// Whether `id` has already been constructed
    pub fn is_constructed(&self, id: &str) -> bool {
        self.instances.borrow().contains_key(id)
    }

    /// Get the singleton instance for `id`, constructing it on first access
    ///
    /// Construction order: contract substitution, argument resolution
    /// (depth-first through `@` references), positional factory call, then
    /// each configured call in declaration order after a method-table
    /// capability check. A service that fails construction is not cached;
    /// a later `get` retries and fails identically.
    pub fn get(&self, id: &str, resolver: &ArgumentResolver<'_>) -> Result<ServiceHandle> {
        if let Some(handle) = self.instances.borrow().get(id).cloned() {
            return Ok(handle);
        }

        let definition = self
            .definitions
            .get(id)
            .ok_or_else(|| Error::not_found(format!("service '{id}'")))?;

        let effective = resolver.contracts().resolve(
            &definition.class,
            &definition.arguments,
            &definition.calls,
        );

        let entry = lookup_service_class(effective.class).ok_or_else(|| {
            let available: Vec<&str> = SERVICE_CLASSES.iter().map(|e| e.name).collect();
            Error::configuration(format!(
                "unknown service class '{}' for service '{id}'. Available classes: {available:?}",
                effective.class
            ))
        })?;

        let arguments = resolver.resolve(effective.arguments)?;
        debug!(service = id, class = entry.name, "constructing service");
        let instance = (entry.factory)(&arguments).map_err(|e| Error::construction(id, e))?;
        let handle = ServiceHandle::new(instance, entry);

        for call in effective.calls {
            if !handle.supports(&call.method) {
                return Err(Error::configuration(format!(
                    "can not call method '{}' for service '{id}': class '{}' has no such method",
                    call.method, entry.name
                )));
            }
            let call_args = resolver.resolve(&call.arguments)?;
            handle
                .invoke(&call.method, &call_args)
                .map_err(|e| Error::construction(id, e))?;
        }

        self.instances
            .borrow_mut()
            .insert(id.to_string(), handle.clone());
        Ok(handle)
    }

    /// Number of loaded definitions
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether no definitions have been loaded
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
