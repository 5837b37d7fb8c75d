//! Argument Resolver
//!
//! Turns raw argument lists into live values. Each entry is one of:
//!
//! - a service reference (`@id`) - looked up in the service registry,
//!   triggering lazy depth-first construction if not yet built
//! - a parameter reference (`%dotted.key%`) - looked up in the parameter
//!   registry
//! - anything else (non-string scalars, empty strings, lists, mappings) -
//!   passed through as a literal, unchanged
//!
//! The resolver is the explicit context struct carried through every
//! construction and dispatch path; it borrows the three registries it needs
//! and never owns state of its own.

use ign_domain::constants::{PARAMETER_REF_DELIMITER, SERVICE_REF_PREFIX};
use ign_domain::{ConfigValue, Error, Result};

use crate::contracts::ContractTable;
use crate::handle::ServiceHandle;
use crate::params::ParameterRegistry;
use crate::services::ServiceRegistry;

/// A constructor/call argument after reference substitution
#[derive(Debug, Clone)]
pub enum ResolvedArg {
    /// Literal or parameter value
    Value(ConfigValue),
    /// Live service instance
    Service(ServiceHandle),
}

impl ResolvedArg {
    /// Borrow as a configuration value, if this is not a service
    pub fn as_value(&self) -> Option<&ConfigValue> {
        match self {
            Self::Value(value) => Some(value),
            Self::Service(_) => None,
        }
    }

    /// Borrow as a service handle, if this is one
    pub fn as_service(&self) -> Option<&ServiceHandle> {
        match self {
            Self::Service(handle) => Some(handle),
            Self::Value(_) => None,
        }
    }

    /// Convenience: the argument as a string value
    pub fn as_str(&self) -> Option<&str> {
        self.as_value().and_then(ConfigValue::as_str)
    }

    /// Convenience: the argument as an integer value
    pub fn as_integer(&self) -> Option<i64> {
        self.as_value().and_then(ConfigValue::as_integer)
    }
}

/// Resolution context borrowing the registries reference lookup needs
pub struct ArgumentResolver<'a> {
    params: &'a ParameterRegistry,
    contracts: &'a ContractTable,
    services: &'a ServiceRegistry,
}

impl<'a> ArgumentResolver<'a> {
    /// Build a resolver over the given registries
    pub fn new(
        params: &'a ParameterRegistry,
        contracts: &'a ContractTable,
        services: &'a ServiceRegistry,
    ) -> Self {
        Self {
            params,
            contracts,
            services,
        }
    }

    /// The contract table, consulted by the service registry at construction
    pub fn contracts(&self) -> &ContractTable {
        self.contracts
    }

    /// Resolve a service id, constructing the instance on first access
    pub fn service(&self, id: &str) -> Result<ServiceHandle> {
        self.services.get(id, self)
    }

    /// Resolve a raw argument list in declaration order
    pub fn resolve(&self, raw: &[ConfigValue]) -> Result<Vec<ResolvedArg>> {
        raw.iter().map(|arg| self.resolve_one(arg)).collect()
    }

    /// Resolve a single raw argument
    pub fn resolve_one(&self, raw: &ConfigValue) -> Result<ResolvedArg> {
        // Only non-empty strings can be references; everything else is a
        // literal passed through verbatim.
        let ConfigValue::String(text) = raw else {
            return Ok(ResolvedArg::Value(raw.clone()));
        };
        if text.is_empty() {
            return Ok(ResolvedArg::Value(raw.clone()));
        }

        if let Some(id) = text.strip_prefix(SERVICE_REF_PREFIX) {
            return Ok(ResolvedArg::Service(self.service(id)?));
        }

        if text.starts_with(PARAMETER_REF_DELIMITER) {
            let key = text
                .strip_prefix(PARAMETER_REF_DELIMITER)
                .and_then(|t| t.strip_suffix(PARAMETER_REF_DELIMITER))
                .filter(|key| !key.is_empty())
                .ok_or_else(|| {
                    Error::resolution(format!("malformed parameter reference '{text}'"))
                })?;
            let value = self
                .params
                .lookup(key)
                .ok_or_else(|| Error::resolution(format!("unknown parameter '{key}'")))?;
            return Ok(ResolvedArg::Value(value.clone()));
        }

        Ok(ResolvedArg::Value(raw.clone()))
    }
}
