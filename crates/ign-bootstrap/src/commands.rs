//! Command Registry
//!
//! Commands are registered last, after all services exist, so their raw
//! arguments resolve against the final state of the parameter and service
//! registries. Registration is eager: arguments are resolved, the class is
//! capability-checked against [`COMMAND_CLASSES`], the instance is
//! constructed, and the result is handed to the console runner immediately.

use tracing::debug;

use ign_domain::{ConfigValue, Error, Result};

use crate::documents::CommandsDoc;
use crate::registry::{COMMAND_CLASSES, lookup_command_class};
use crate::resolver::ArgumentResolver;
use crate::runner::ConsoleApplication;

/// Resolve, capability-check, construct, and register one command
pub fn register_command(
    application: &mut ConsoleApplication,
    class_name: &str,
    raw_args: &[ConfigValue],
    resolver: &ArgumentResolver<'_>,
) -> Result<()> {
    let entry = lookup_command_class(class_name).ok_or_else(|| {
        let available: Vec<&str> = COMMAND_CLASSES.iter().map(|e| e.name).collect();
        Error::configuration(format!(
            "can not register invalid command '{class_name}': not a registered command class. \
             Available classes: {available:?}"
        ))
    })?;

    let arguments = resolver.resolve(raw_args)?;
    let command = (entry.factory)(&arguments).map_err(|e| Error::construction(class_name, e))?;

    debug!(command = command.name(), class = class_name, "command registered");
    application.add(command)
}

/// Register every command in the document, in declaration order
pub fn register_commands(
    application: &mut ConsoleApplication,
    documents: &CommandsDoc,
    resolver: &ArgumentResolver<'_>,
) -> Result<()> {
    for (class_name, raw_args) in &documents.commands {
        register_command(application, class_name, raw_args, resolver)?;
    }
    Ok(())
}
