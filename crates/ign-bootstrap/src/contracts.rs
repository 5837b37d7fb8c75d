//! Contract Table
//!
//! Records interface → implementation substitutions. When a service
//! definition's declared class matches a registered interface name, the
//! implementation class is substituted and any override argument/call lists
//! replace the definition's own lists wholesale (never merged). Substitution
//! happens at construction time, not at definition-load time, since the same
//! class name can appear across several service ids.

use std::collections::HashMap;

use ign_domain::ConfigValue;

use crate::documents::{CallConfig, ContractConfig};

/// The effective class and argument/call lists after contract resolution
#[derive(Debug)]
pub struct EffectiveDefinition<'a> {
    /// Class to actually construct
    pub class: &'a str,
    /// Constructor arguments to resolve
    pub arguments: &'a [ConfigValue],
    /// Post-construction calls to run
    pub calls: &'a [CallConfig],
}

/// Interface-to-implementation substitution rules, keyed by interface name
#[derive(Debug, Default)]
pub struct ContractTable {
    entries: HashMap<String, ContractConfig>,
}

impl ContractTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a substitution rule under `interface`
    pub fn register(&mut self, interface: impl Into<String>, contract: ContractConfig) {
        self.entries.insert(interface.into(), contract);
    }

    /// Resolve a declared class against the table
    ///
    /// On a match, returns the implementation class with the override lists
    /// where present; otherwise returns the caller's own class, arguments,
    /// and calls unchanged.
    pub fn resolve<'a>(
        &'a self,
        declared_class: &'a str,
        arguments: &'a [ConfigValue],
        calls: &'a [CallConfig],
    ) -> EffectiveDefinition<'a> {
        match self.entries.get(declared_class) {
            Some(contract) => EffectiveDefinition {
                class: &contract.class,
                arguments: contract.arguments.as_deref().unwrap_or(arguments),
                calls: contract.calls.as_deref().unwrap_or(calls),
            },
            None => EffectiveDefinition {
                class: declared_class,
                arguments,
                calls,
            },
        }
    }

    /// Number of registered contracts
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no contracts are registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
