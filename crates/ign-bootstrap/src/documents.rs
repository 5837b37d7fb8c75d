//! Declarative document types
//!
//! Serde-facing shapes of the five input documents. Parsing text into these
//! is the embedding application's concern (the `ign` crate does YAML); the
//! engine only sees the deserialized structures. Mapping order is preserved
//! because entries are processed in configuration-declared order.

use indexmap::IndexMap;
use serde::Deserialize;

use ign_domain::ConfigValue;

/// `services.yml`: `services:` keyed by service id
#[derive(Debug, Default, Deserialize)]
pub struct ServicesDoc {
    /// Service definitions in declaration order
    #[serde(default)]
    pub services: IndexMap<String, ServiceConfig>,
}

/// One service definition - configuration text, not live values
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Declared class name (may be redirected by a contract)
    pub class: String,
    /// Raw constructor arguments
    #[serde(default)]
    pub arguments: Vec<ConfigValue>,
    /// Post-construction calls, run in declaration order
    #[serde(default)]
    pub calls: Vec<CallConfig>,
}

/// One post-construction method call
#[derive(Debug, Clone, Deserialize)]
pub struct CallConfig {
    /// Method name, validated against the class's method table
    pub method: String,
    /// Raw call arguments
    #[serde(default)]
    pub arguments: Vec<ConfigValue>,
}

/// `contracts.yml`: `contracts:` keyed by interface name
#[derive(Debug, Default, Deserialize)]
pub struct ContractsDoc {
    /// Interface → implementation substitutions
    #[serde(default)]
    pub contracts: IndexMap<String, ContractConfig>,
}

/// One interface-to-implementation substitution rule
#[derive(Debug, Clone, Deserialize)]
pub struct ContractConfig {
    /// Implementation class substituted for the interface name
    pub class: String,
    /// When present, wholesale-replaces the service's own arguments
    #[serde(default)]
    pub arguments: Option<Vec<ConfigValue>>,
    /// When present, wholesale-replaces the service's own calls
    #[serde(default)]
    pub calls: Option<Vec<CallConfig>>,
}

/// `events.yml`: `events:` keyed by event name
#[derive(Debug, Default, Deserialize)]
pub struct EventsDoc {
    /// Listener definitions grouped by event name
    #[serde(default)]
    pub events: IndexMap<String, Vec<ListenerConfig>>,
}

/// One event listener binding
#[derive(Debug, Clone, Deserialize)]
pub struct ListenerConfig {
    /// Service reference, with or without the `@` prefix
    pub listener: String,
    /// Method to invoke; `handle_event` when absent
    #[serde(default)]
    pub method: Option<String>,
    /// Higher priorities fire first; defaults to 0
    #[serde(default)]
    pub priority: i32,
}

/// `commands.yml`: `commands:` keyed by command class name
#[derive(Debug, Default, Deserialize)]
pub struct CommandsDoc {
    /// Raw constructor arguments per command class
    #[serde(default)]
    pub commands: IndexMap<String, Vec<ConfigValue>>,
}
