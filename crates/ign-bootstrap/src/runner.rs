//! Console runner
//!
//! The execution runtime boundary: holds the fully-constructed command
//! objects produced by the command phase and dispatches CLI invocations to
//! them by name. Invoked bare, it prints the command list; the exit code of
//! a dispatched command becomes the process exit code.

use indexmap::IndexMap;
use tracing::info;

use ign_domain::{Command, Error, Result};

/// Named command store and dispatcher
pub struct ConsoleApplication {
    name: String,
    version: String,
    commands: IndexMap<String, Box<dyn Command>>,
}

impl ConsoleApplication {
    /// Create an application shell with no commands yet
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            commands: IndexMap::new(),
        }
    }

    /// Application name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Application version
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Register a constructed command under its own name
    pub fn add(&mut self, command: Box<dyn Command>) -> Result<()> {
        let name = command.name().to_string();
        if self.commands.contains_key(&name) {
            return Err(Error::configuration(format!(
                "duplicate command name '{name}'"
            )));
        }
        self.commands.insert(name, command);
        Ok(())
    }

    /// Registered command names, in registration order
    pub fn command_names(&self) -> Vec<&str> {
        self.commands.keys().map(String::as_str).collect()
    }

    /// Number of registered commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether no commands are registered
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Dispatch `argv` (program name already stripped) to a command
    ///
    /// No arguments prints the command list and returns 0. An unknown
    /// command name is an error; otherwise the command's exit code is
    /// returned.
    pub fn run(&self, argv: &[String]) -> Result<i32> {
        let Some(name) = argv.first() else {
            self.print_command_list();
            return Ok(0);
        };

        let command = self
            .commands
            .get(name)
            .ok_or_else(|| Error::not_found(format!("command '{name}'")))?;

        info!(command = %name, "running command");
        command.execute(&argv[1..])
    }

    fn print_command_list(&self) {
        println!("{} {}", self.name, self.version);
        println!();
        println!("Available commands:");
        for (name, command) in &self.commands {
            println!("  {:<24} {}", name, command.description());
        }
    }
}

impl std::fmt::Debug for ConsoleApplication {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleApplication")
            .field("name", &self.name)
            .field("version", &self.version)
            .field("commands", &self.command_names())
            .finish()
    }
}
