//! Service and command ports
//!
//! The two capabilities a configured class can expose. `Service` instances
//! are process-lifetime singletons built lazily by the service registry;
//! `Command` instances are built eagerly at bootstrap and handed to the
//! console runner.

use std::any::Any;

use crate::error::Result;

/// A named, lazily constructed, process-lifetime singleton object
///
/// Concrete services downcast through [`Service::as_any`] when a collaborator
/// needs the concrete type back out of an `Arc<dyn Service>`.
pub trait Service: Any + Send + Sync {
    /// Upcast to [`Any`] for downcasting to the concrete type
    fn as_any(&self) -> &dyn Any;
}

/// The execute capability required of every registered command
///
/// The console runner dispatches CLI invocations to these objects; the
/// returned integer becomes the process exit code.
pub trait Command: Send + Sync {
    /// Name the runner dispatches on (first CLI argument)
    fn name(&self) -> &str;

    /// One-line description shown in the command list
    fn description(&self) -> &str {
        ""
    }

    /// Run the command with the remaining CLI arguments
    fn execute(&self, args: &[String]) -> Result<i32>;
}
