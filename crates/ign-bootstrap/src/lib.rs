//! Resolution engine for configuration-driven console applications
//!
//! Turns raw, loosely-typed declarations (parameters, contracts, services,
//! event listeners, commands) into a running object graph with correct
//! override semantics, lazy single-instance service construction, reference
//! resolution, and priority-ordered event dispatch wiring.
//!
//! ## Architecture
//!
//! ```text
//! BootstrapProcessor (owns all registries)
//! ├── EventRegistry      priority-ordered listeners, resolved at dispatch
//! ├── ParameterRegistry  flat dotted-key view of the settings document
//! ├── ContractTable      interface → implementation substitutions
//! ├── ServiceRegistry    lazy singleton construction + instance cache
//! └── ConsoleApplication eagerly built commands, handed to the runner
//!
//! ArgumentResolver (borrows params + contracts + services)
//!     "@id"    → service instance (triggers lazy, depth-first construction)
//!     "%key%"  → parameter value
//!     other    → literal, unchanged
//! ```
//!
//! Constructible classes register themselves at compile time via linkme
//! distributed slices (see [`registry`]); there is no runtime reflection and
//! no ambient container.

pub mod bootstrap;
pub mod builtins;
pub mod commands;
pub mod contracts;
pub mod documents;
pub mod events;
pub mod handle;
pub mod params;
pub mod registry;
pub mod resolver;
pub mod runner;
pub mod services;

pub use bootstrap::{BootstrapDocuments, BootstrapProcessor};
pub use contracts::ContractTable;
pub use events::{DispatchPolicy, EventRegistry};
pub use handle::ServiceHandle;
pub use params::ParameterRegistry;
pub use resolver::{ArgumentResolver, ResolvedArg};
pub use runner::ConsoleApplication;
pub use services::ServiceRegistry;
