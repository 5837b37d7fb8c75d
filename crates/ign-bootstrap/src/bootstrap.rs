//! Bootstrap Orchestrator
//!
//! Sequences the phases that turn the five declarative documents into a
//! runnable application:
//!
//! ```text
//! events → parameters → contracts → service definitions → commands
//!                                                            ↓
//!                                              bootstrap.successful fires
//! ```
//!
//! The processor owns all four registries and threads an explicit
//! [`ArgumentResolver`] into every operation that resolves references; there
//! is no ambient container. No phase recovers from a lower phase's failure -
//! any error unwinds to the caller (the console kernel) untouched.

use tracing::info;

use ign_domain::constants::{BOOTSTRAP_SUCCESSFUL_EVENT, SETTINGS_PREFIX};
use ign_domain::{ConfigValue, Error, Result};

use crate::commands::register_commands;
use crate::contracts::ContractTable;
use crate::documents::{CommandsDoc, ContractsDoc, EventsDoc, ServicesDoc};
use crate::events::{DispatchPolicy, EventRegistry};
use crate::params::ParameterRegistry;
use crate::resolver::ArgumentResolver;
use crate::runner::ConsoleApplication;
use crate::services::ServiceRegistry;

/// The five parsed input documents, however they were loaded
#[derive(Debug, Default)]
pub struct BootstrapDocuments {
    /// Nested settings mapping, flattened under the `settings.` prefix
    pub settings: Option<ConfigValue>,
    /// Interface → implementation substitutions
    pub contracts: ContractsDoc,
    /// Service definitions
    pub services: ServicesDoc,
    /// Event listener definitions
    pub events: EventsDoc,
    /// Command definitions
    pub commands: CommandsDoc,
}

/// Owns the registries and runs the bootstrap phases in order
#[derive(Debug, Default)]
pub struct BootstrapProcessor {
    params: ParameterRegistry,
    contracts: ContractTable,
    services: ServiceRegistry,
    events: EventRegistry,
}

impl BootstrapProcessor {
    /// Create a processor with the default fail-fast dispatch policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with an explicit listener dispatch policy
    pub fn with_dispatch_policy(policy: DispatchPolicy) -> Self {
        Self {
            events: EventRegistry::with_policy(policy),
            ..Self::default()
        }
    }

    /// Run every phase, registering commands into `application`
    ///
    /// On success the `bootstrap.successful` event has fired and the
    /// application holds every configured command. All-or-nothing: the first
    /// failing phase aborts the whole bootstrap.
    pub fn execute(
        &mut self,
        documents: &BootstrapDocuments,
        application: &mut ConsoleApplication,
    ) -> Result<()> {
        self.prepare_events(&documents.events);
        self.prepare_settings(documents.settings.as_ref())?;
        self.prepare_contracts(&documents.contracts);
        self.prepare_services(&documents.services)?;

        // Commands resolve against the final registry state, and the
        // completion event may lazily construct listener services.
        let resolver = ArgumentResolver::new(&self.params, &self.contracts, &self.services);
        register_commands(application, &documents.commands, &resolver)?;

        info!(
            parameters = self.params.len(),
            contracts = self.contracts.len(),
            services = self.services.len(),
            commands = application.len(),
            "bootstrap complete"
        );
        self.events
            .dispatch(BOOTSTRAP_SUCCESSFUL_EVENT, &[], &resolver)?;
        Ok(())
    }

    fn prepare_events(&mut self, documents: &EventsDoc) {
        for (event, listeners) in &documents.events {
            for config in listeners {
                self.events.register(
                    event.clone(),
                    config.listener.clone(),
                    config.method.as_deref(),
                    config.priority,
                );
            }
        }
    }

    fn prepare_settings(&mut self, settings: Option<&ConfigValue>) -> Result<()> {
        let Some(settings) = settings else {
            return Ok(());
        };
        let mapping = settings
            .as_mapping()
            .ok_or_else(|| Error::configuration("settings document must be a mapping"))?;
        self.params.load(SETTINGS_PREFIX, mapping)
    }

    fn prepare_contracts(&mut self, documents: &ContractsDoc) {
        for (interface, contract) in &documents.contracts {
            self.contracts.register(interface.clone(), contract.clone());
        }
    }

    fn prepare_services(&mut self, documents: &ServicesDoc) -> Result<()> {
        for (id, config) in &documents.services {
            self.services.define(id.clone(), config.clone())?;
        }
        Ok(())
    }

    /// The flattened parameter registry
    pub fn params(&self) -> &ParameterRegistry {
        &self.params
    }

    /// The contract table
    pub fn contracts(&self) -> &ContractTable {
        &self.contracts
    }

    /// The service registry
    pub fn services(&self) -> &ServiceRegistry {
        &self.services
    }

    /// The event registry
    pub fn events(&self) -> &EventRegistry {
        &self.events
    }

    /// A resolver over the current registry state
    ///
    /// Lets the embedding application resolve services or dispatch its own
    /// events after bootstrap.
    pub fn resolver(&self) -> ArgumentResolver<'_> {
        ArgumentResolver::new(&self.params, &self.contracts, &self.services)
    }
}
