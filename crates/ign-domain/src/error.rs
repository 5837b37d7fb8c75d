//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the ign bootstrap
///
/// Every bootstrap failure funnels into one of these kinds. No phase
/// recovers from a lower phase's failure; the console kernel is the sole
/// catch point and turns any of these into exit code 1.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// YAML parsing error from one of the declarative documents
    #[error("YAML parsing error: {source}")]
    Yaml {
        /// The underlying YAML error
        #[from]
        source: serde_yaml::Error,
    },

    /// Malformed or missing required fields in a definition
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An `@` or `%` reference could not be satisfied
    #[error("Resolution error: {message}")]
    Resolution {
        /// Description of the unsatisfied reference
        message: String,
    },

    /// A class factory or capability call failed while building an instance
    #[error("Construction error for '{target}': {message}")]
    Construction {
        /// Service id or command class that failed to construct
        target: String,
        /// Description of the construction failure
        message: String,
    },

    /// An event listener could not be resolved or invoked at dispatch time
    #[error("Dispatch error for event '{event}': {message}")]
    Dispatch {
        /// Event whose dispatch failed
        event: String,
        /// Description of the dispatch failure
        message: String,
    },

    /// Resource not found error
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a resolution error
    pub fn resolution<S: Into<String>>(message: S) -> Self {
        Self::Resolution {
            message: message.into(),
        }
    }

    /// Create a construction error for a service id or command class
    pub fn construction<T: Into<String>, S: Into<String>>(target: T, message: S) -> Self {
        Self::Construction {
            target: target.into(),
            message: message.into(),
        }
    }

    /// Create a dispatch error for an event
    pub fn dispatch<E: Into<String>, S: Into<String>>(event: E, message: S) -> Self {
        Self::Dispatch {
            event: event.into(),
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
