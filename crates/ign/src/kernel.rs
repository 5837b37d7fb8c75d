//! Console kernel
//!
//! The outermost shell and sole error catch point: loads the declarative
//! documents, runs the bootstrap, hands argv to the runner, and converts any
//! unrecovered failure into exit code 1 with a single diagnostic line on
//! stderr. Success exits with whatever code the dispatched command returned.

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use ign_bootstrap::{BootstrapDocuments, BootstrapProcessor, ConsoleApplication};
use ign_domain::{ConfigValue, Error, Result};

use crate::config::{AppConfig, find_settings_file};
use crate::constants::{
    COMMANDS_DOCUMENT, CONTRACTS_DOCUMENT, EVENTS_DOCUMENT, SERVICES_DOCUMENT,
};

/// Owns the application configuration and drives one process run
#[derive(Debug)]
pub struct ConsoleKernel {
    config: AppConfig,
}

impl ConsoleKernel {
    /// Create a kernel from loaded configuration
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// The kernel's configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Bootstrap and run, converting any failure into exit code 1
    ///
    /// `argv` is the command name plus its arguments, program name already
    /// stripped. This is the single catch point of the whole bootstrap.
    pub fn handle(&self, argv: &[String]) -> i32 {
        match self.boot_and_run(argv) {
            Ok(exit_code) => exit_code,
            Err(err) => {
                eprintln!("Bootstrap error: {}", render_chain(&err));
                1
            }
        }
    }

    fn boot_and_run(&self, argv: &[String]) -> Result<i32> {
        let documents = self.load_documents()?;

        let mut application =
            ConsoleApplication::new(&self.config.app.name, &self.config.app.version);
        let mut processor =
            BootstrapProcessor::with_dispatch_policy(self.config.events.on_listener_error.into());
        processor.execute(&documents, &mut application)?;

        application.run(argv)
    }

    fn load_documents(&self) -> Result<BootstrapDocuments> {
        let dir = &self.config.paths.config_dir;
        Ok(BootstrapDocuments {
            settings: self.load_settings()?,
            contracts: load_document(&dir.join(CONTRACTS_DOCUMENT))?,
            services: load_document(&dir.join(SERVICES_DOCUMENT))?,
            events: load_document(&dir.join(EVENTS_DOCUMENT))?,
            commands: load_document(&dir.join(COMMANDS_DOCUMENT))?,
        })
    }

    fn load_settings(&self) -> Result<Option<ConfigValue>> {
        let Some(path) = find_settings_file(self.config.paths.settings_file.as_deref()) else {
            debug!("no settings file found, skipping parameters phase");
            return Ok(None);
        };

        let text = std::fs::read_to_string(&path).map_err(|e| {
            Error::configuration_with_source(
                format!("can not read settings file '{}'", path.display()),
                e,
            )
        })?;
        if text.trim().is_empty() {
            return Ok(None);
        }

        let value: ConfigValue = serde_yaml::from_str(&text)?;
        if value.is_null() {
            return Ok(None);
        }
        debug!(path = %path.display(), "settings document loaded");
        Ok(Some(value))
    }
}

/// Load one declarative document, defaulting to empty when the file is absent
fn load_document<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        debug!(path = %path.display(), "document not found, using empty defaults");
        return Ok(T::default());
    }
    let text = std::fs::read_to_string(path)?;
    if text.trim().is_empty() {
        return Ok(T::default());
    }
    Ok(serde_yaml::from_str(&text)?)
}

/// Render an error with its source chain on a single line
fn render_chain(err: &Error) -> String {
    let mut rendered = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        rendered.push_str(&format!(" ({cause})"));
        source = cause.source();
    }
    rendered
}
