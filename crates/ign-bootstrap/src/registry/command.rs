//! Command class registry
//!
//! Commands are built eagerly at bootstrap and handed to the console runner,
//! so their registry is simpler than the service one: name plus factory.
//! A class present in [`COMMAND_CLASSES`] satisfies the execute capability;
//! one that is absent is rejected at registration with a configuration error.

use ign_domain::Command;

use crate::resolver::ResolvedArg;

/// Registry entry for a constructible command class
pub struct CommandClassEntry {
    /// Unique class name as referenced from the commands document
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory producing the command from positional resolved arguments
    pub factory: fn(&[ResolvedArg]) -> Result<Box<dyn Command>, String>,
}

// Auto-collection via linkme distributed slices - classes submit entries at compile time
#[linkme::distributed_slice]
pub static COMMAND_CLASSES: [CommandClassEntry] = [..];

/// Look up a command class entry by name
pub fn lookup_command_class(name: &str) -> Option<&'static CommandClassEntry> {
    COMMAND_CLASSES.iter().find(|entry| entry.name == name)
}

/// List all registered command classes as (name, description) pairs
pub fn list_command_classes() -> Vec<(&'static str, &'static str)> {
    COMMAND_CLASSES
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect()
}
