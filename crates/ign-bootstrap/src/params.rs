//! Parameter Registry
//!
//! Flattens the nested settings document into a flat mapping of dotted keys.
//! Every leaf gets an entry; non-list mapping nodes are *also* registered
//! under their own key holding the full subtree, so both fine-grained and
//! bulk lookup work. Lists are leaves and are never expanded.
//!
//! Populated once during the settings phase and read-only afterward.

use std::collections::HashMap;

use ign_domain::{ConfigValue, Error, Mapping, Result};

/// Flat dotted-key view of the nested settings configuration
#[derive(Debug, Default)]
pub struct ParameterRegistry {
    values: HashMap<String, ConfigValue>,
}

impl ParameterRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten `config` under `prefix`, registering every node
    ///
    /// For each key, the entry `prefix.key` is registered with the node's
    /// value; non-list mappings are then recursed into. A key that is
    /// already present is a configuration error: two sources may not define
    /// overlapping prefixes in the same run.
    pub fn load(&mut self, prefix: &str, config: &Mapping) -> Result<()> {
        for (key, value) in config {
            let child_key = format!("{prefix}.{key}");
            if self.values.contains_key(&child_key) {
                return Err(Error::configuration(format!(
                    "duplicate parameter key '{child_key}'"
                )));
            }
            self.values.insert(child_key.clone(), value.clone());
            if let ConfigValue::Mapping(nested) = value {
                self.load(&child_key, nested)?;
            }
        }
        Ok(())
    }

    /// Exact dotted-key lookup; no wildcard or partial matching
    pub fn lookup(&self, key: &str) -> Option<&ConfigValue> {
        self.values.get(key)
    }

    /// Number of registered keys
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no keys have been registered
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
