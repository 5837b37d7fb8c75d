//! Application-level constants

/// Prefix for configuration environment variables (`IGN_LOGGING_LEVEL`, ...)
pub const CONFIG_ENV_PREFIX: &str = "IGN";

/// Environment variable overriding the log filter
pub const LOG_ENV_VAR: &str = "IGN_LOG";

/// Environment variable pointing at the settings file
pub const SETTINGS_ENV_VAR: &str = "IGN_SETTINGS";

/// Application configuration file probed in the working directory
pub const DEFAULT_CONFIG_FILENAME: &str = "ign.toml";

/// Default directory holding the declarative documents
pub const DEFAULT_CONFIG_DIR: &str = "config";

/// Settings files probed under the working directory, in order
pub const SETTINGS_CANDIDATES: [&str; 2] = ["settings.yml", "settings.yml.dist"];

/// Default log level when neither config nor environment says otherwise
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Declarative document file names under the config directory
pub const CONTRACTS_DOCUMENT: &str = "contracts.yml";
/// Services document file name
pub const SERVICES_DOCUMENT: &str = "services.yml";
/// Events document file name
pub const EVENTS_DOCUMENT: &str = "events.yml";
/// Commands document file name
pub const COMMANDS_DOCUMENT: &str = "commands.yml";
