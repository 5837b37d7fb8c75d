//! Service handles
//!
//! A [`ServiceHandle`] pairs a constructed service instance with its class
//! entry so callers can capability-check and invoke configured methods
//! without knowing the concrete type. Handles are cheap to clone; the
//! instance itself is shared.

use std::sync::Arc;

use ign_domain::Service;

use crate::registry::{ServiceClassEntry, ServiceMethod};
use crate::resolver::ResolvedArg;

/// A constructed service instance plus its class metadata
#[derive(Clone)]
pub struct ServiceHandle {
    instance: Arc<dyn Service>,
    entry: &'static ServiceClassEntry,
}

impl ServiceHandle {
    /// Pair an instance with the class entry that produced it
    pub fn new(instance: Arc<dyn Service>, entry: &'static ServiceClassEntry) -> Self {
        Self { instance, entry }
    }

    /// The shared service instance
    pub fn instance(&self) -> &Arc<dyn Service> {
        &self.instance
    }

    /// Effective class name of the instance
    pub fn class_name(&self) -> &'static str {
        self.entry.name
    }

    /// Whether the class exposes `method` in its method table
    pub fn supports(&self, method: &str) -> bool {
        self.entry.method(method).is_some()
    }

    /// Invoke a method from the class's method table
    ///
    /// Fails with the method name when the class does not expose it;
    /// otherwise delegates to the registered invoker.
    pub fn invoke(&self, method: &str, args: &[ResolvedArg]) -> Result<(), String> {
        let ServiceMethod { invoke, .. } = self
            .entry
            .method(method)
            .ok_or_else(|| format!("class '{}' has no method '{}'", self.entry.name, method))?;
        invoke(self.instance.as_ref(), args)
    }

    /// Two handles are the same service iff they share the instance
    pub fn same_instance(&self, other: &ServiceHandle) -> bool {
        Arc::ptr_eq(&self.instance, &other.instance)
    }
}

impl std::fmt::Debug for ServiceHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceHandle")
            .field("class", &self.entry.name)
            .finish_non_exhaustive()
    }
}
