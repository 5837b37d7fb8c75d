//! Service class registry
//!
//! Each constructible service class contributes one [`ServiceClassEntry`]
//! via `#[linkme::distributed_slice(SERVICE_CLASSES)]`: a factory taking the
//! resolved constructor arguments, plus a static method table used to
//! capability-check configured calls and event listener methods before
//! invocation.

use std::sync::Arc;

use ign_domain::Service;

use crate::resolver::ResolvedArg;

/// One invocable method a service class exposes
///
/// The invoker receives the live service (as `&dyn Service`, to be downcast
/// by the class's own code) and the resolved call arguments. Return values
/// are discarded by the engine.
pub struct ServiceMethod {
    /// Method name as it appears in `calls` and listener definitions
    pub name: &'static str,
    /// Invoker function - downcasts and delegates to the concrete type
    pub invoke: fn(&dyn Service, &[ResolvedArg]) -> Result<(), String>,
}

/// Registry entry for a constructible service class
pub struct ServiceClassEntry {
    /// Unique class name as referenced from service definitions
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory producing an instance from positional resolved arguments
    pub factory: fn(&[ResolvedArg]) -> Result<Arc<dyn Service>, String>,
    /// Methods this class exposes to `calls` and event listeners
    pub methods: &'static [ServiceMethod],
}

impl ServiceClassEntry {
    /// Find a method by name in this class's method table
    pub fn method(&self, name: &str) -> Option<&'static ServiceMethod> {
        self.methods.iter().find(|m| m.name == name)
    }
}

// Auto-collection via linkme distributed slices - classes submit entries at compile time
#[linkme::distributed_slice]
pub static SERVICE_CLASSES: [ServiceClassEntry] = [..];

/// Look up a service class entry by name
pub fn lookup_service_class(name: &str) -> Option<&'static ServiceClassEntry> {
    SERVICE_CLASSES.iter().find(|entry| entry.name == name)
}

/// List all registered service classes as (name, description) pairs
pub fn list_service_classes() -> Vec<(&'static str, &'static str)> {
    SERVICE_CLASSES
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect()
}
