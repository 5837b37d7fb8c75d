//! Class Registry System
//!
//! The reflection-equivalent of the bootstrap: a compile-time registry of
//! named factory functions, one per constructible class. Uses the `linkme`
//! crate so classes register themselves and the engine discovers them at
//! runtime without knowing any concrete type.
//!
//! ## Registration flow
//!
//! ```text
//! 1. Class defines:   #[linkme::distributed_slice(SERVICE_CLASSES)]
//!                     static ENTRY: ServiceClassEntry = ...
//!                           ↓
//! 2. Registry holds:  pub static SERVICE_CLASSES: [ServiceClassEntry] = [..]
//!                           ↓
//! 3. Engine queries:  lookup_service_class("fixed_retry_policy")
//!                           ↓
//! 4. Config selects:  services.yml: `policy: { class: fixed_retry_policy }`
//! ```
//!
//! ## Registering a service class
//!
//! ```ignore
//! use ign_bootstrap::registry::{SERVICE_CLASSES, ServiceClassEntry, ServiceMethod};
//!
//! #[linkme::distributed_slice(SERVICE_CLASSES)]
//! static FIXED_RETRY_POLICY: ServiceClassEntry = ServiceClassEntry {
//!     name: "fixed_retry_policy",
//!     description: "Retries a fixed number of times",
//!     factory: |args| Ok(Arc::new(FixedRetryPolicy::from_args(args)?)),
//!     methods: &[],
//! };
//! ```
//!
//! Command classes live in a separate slice; presence in [`COMMAND_CLASSES`]
//! is what satisfies the execute capability required at command registration.

pub mod command;
pub mod service;

pub use command::{COMMAND_CLASSES, CommandClassEntry, list_command_classes, lookup_command_class};
pub use service::{
    SERVICE_CLASSES, ServiceClassEntry, ServiceMethod, list_service_classes, lookup_service_class,
};
