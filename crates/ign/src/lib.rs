//! # ign
//!
//! A configuration-driven bootstrap layer for command-line applications:
//! declarative YAML documents (parameters, contracts, services, event
//! listeners, commands) are resolved at process start into a working object
//! graph, then control is handed to the console runner.
//!
//! ## Example
//!
//! ```ignore
//! use ign::config::ConfigLoader;
//! use ign::kernel::ConsoleKernel;
//!
//! let config = ConfigLoader::new().load()?;
//! let exit_code = ConsoleKernel::new(config).handle(&argv);
//! ```
//!
//! ## Architecture
//!
//! - `domain` - errors, configuration values, service/command ports
//! - `bootstrap` - the resolution engine and phase orchestrator
//! - `config` - application configuration via figment
//! - `kernel` - document loading, bootstrap, exit-code boundary
//! - `logging` - tracing initialization

pub mod config;
pub mod constants;
pub mod kernel;
pub mod logging;

/// Domain layer - errors, values, and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use ign_domain::*;
}

/// Resolution engine - registries, resolver, orchestrator, runner
///
/// Re-exports from the bootstrap crate for convenience
pub mod bootstrap {
    pub use ign_bootstrap::*;
}

pub use config::{AppConfig, ConfigLoader};
pub use kernel::ConsoleKernel;
