//! Built-in classes
//!
//! The engine ships one class of its own: `null`, a do-nothing service that
//! accepts any constructor arguments and exposes a no-op `handle_event`.
//! Useful as a placeholder listener target and for wiring smoke tests.

use std::any::Any;
use std::sync::Arc;

use ign_domain::Service;

use crate::registry::{SERVICE_CLASSES, ServiceClassEntry, ServiceMethod};
use crate::resolver::ResolvedArg;

/// Service that does nothing
pub struct NullService;

impl Service for NullService {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn null_factory(_args: &[ResolvedArg]) -> Result<Arc<dyn Service>, String> {
    Ok(Arc::new(NullService))
}

fn null_handle_event(_service: &dyn Service, _args: &[ResolvedArg]) -> Result<(), String> {
    Ok(())
}

static NULL_METHODS: [ServiceMethod; 1] = [ServiceMethod {
    name: "handle_event",
    invoke: null_handle_event,
}];

#[linkme::distributed_slice(SERVICE_CLASSES)]
static NULL_SERVICE: ServiceClassEntry = ServiceClassEntry {
    name: "null",
    description: "Service that does nothing",
    factory: null_factory,
    methods: &NULL_METHODS,
};
