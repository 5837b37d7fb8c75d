//! Event Registry
//!
//! Priority-ordered listener table per event name. Listener resolution is
//! deferred to dispatch time by design: an entry that is never triggered is
//! never validated, so a listener referencing an unknown service only fails
//! when its event actually fires.

use std::collections::HashMap;

use tracing::warn;

use ign_domain::constants::{DEFAULT_LISTENER_METHOD, SERVICE_REF_PREFIX};
use ign_domain::{Error, Result};

use crate::resolver::{ArgumentResolver, ResolvedArg};

/// One registered listener binding
#[derive(Debug, Clone)]
pub struct ListenerEntry {
    /// Service reference as configured, `@` prefix included when given
    pub service: String,
    /// Method to invoke on the resolved service
    pub method: String,
    /// Higher priorities fire first
    pub priority: i32,
}

/// What to do when a listener invocation fails mid-dispatch
///
/// Bootstrap events are bootstrap-critical, so the default is fail-fast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DispatchPolicy {
    /// Abort remaining dispatch for the event on the first failure
    #[default]
    FailFast,
    /// Log the failure and keep invoking sibling listeners
    ContinueOnError,
}

/// Listener groups keyed by event name, sorted by descending priority
#[derive(Debug, Default)]
pub struct EventRegistry {
    listeners: HashMap<String, Vec<ListenerEntry>>,
    policy: DispatchPolicy,
}

impl EventRegistry {
    /// Create a registry with the fail-fast dispatch policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with an explicit dispatch policy
    pub fn with_policy(policy: DispatchPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Append a listener to the event's group and re-sort it
    ///
    /// The sort is stable: entries of equal priority keep their registration
    /// order. `method` defaults to `handle_event` when absent. No validation
    /// happens here.
    pub fn register(
        &mut self,
        event: impl Into<String>,
        service_ref: impl Into<String>,
        method: Option<&str>,
        priority: i32,
    ) {
        let group = self.listeners.entry(event.into()).or_default();
        group.push(ListenerEntry {
            service: service_ref.into(),
            method: method.unwrap_or(DEFAULT_LISTENER_METHOD).to_string(),
            priority,
        });
        group.sort_by(|a, b| b.priority.cmp(&a.priority));
    }

    /// The sorted listener group for `event` (empty when none registered)
    pub fn listeners(&self, event: &str) -> &[ListenerEntry] {
        self.listeners.get(event).map_or(&[], Vec::as_slice)
    }

    /// Fire `event`, invoking each listener in sorted order
    ///
    /// Each listener's service is resolved through the service registry and
    /// capability-checked against its class's method table before invocation.
    /// Returns the number of listeners invoked successfully.
    pub fn dispatch(
        &self,
        event: &str,
        args: &[ResolvedArg],
        resolver: &ArgumentResolver<'_>,
    ) -> Result<usize> {
        let Some(group) = self.listeners.get(event) else {
            return Ok(0);
        };

        let mut invoked = 0;
        for entry in group {
            match Self::invoke_listener(event, entry, args, resolver) {
                Ok(()) => invoked += 1,
                Err(err) => match self.policy {
                    DispatchPolicy::FailFast => return Err(err),
                    DispatchPolicy::ContinueOnError => {
                        warn!(
                            event,
                            listener = %entry.service,
                            error = %err,
                            "listener invocation failed, continuing"
                        );
                    }
                },
            }
        }
        Ok(invoked)
    }

    fn invoke_listener(
        event: &str,
        entry: &ListenerEntry,
        args: &[ResolvedArg],
        resolver: &ArgumentResolver<'_>,
    ) -> Result<()> {
        let id = entry
            .service
            .strip_prefix(SERVICE_REF_PREFIX)
            .unwrap_or(&entry.service);

        let handle = resolver.service(id).map_err(|e| {
            Error::dispatch(
                event,
                format!("can not invoke listener service '{id}': {e}"),
            )
        })?;

        if !handle.supports(&entry.method) {
            return Err(Error::dispatch(
                event,
                format!(
                    "listener service '{id}' (class '{}') has no method '{}'",
                    handle.class_name(),
                    entry.method
                ),
            ));
        }

        handle
            .invoke(&entry.method, args)
            .map_err(|e| Error::dispatch(event, e))
    }
}
