//! Domain layer for the ign console bootstrap
//!
//! Holds the types every other crate agrees on: the error enum, the generic
//! configuration value tree, the `Service` and `Command` ports, and the
//! well-known string constants. No bootstrap logic lives here.

pub mod constants;
pub mod error;
pub mod ports;
pub mod value;

pub use error::{Error, Result};
pub use ports::{Command, Service};
pub use value::{ConfigValue, Mapping};
