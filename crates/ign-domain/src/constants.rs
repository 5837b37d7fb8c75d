//! Well-known names shared across the bootstrap phases

/// Event fired once all bootstrap phases have completed successfully.
pub const BOOTSTRAP_SUCCESSFUL_EVENT: &str = "bootstrap.successful";

/// Listener method used when an event listener definition names none.
pub const DEFAULT_LISTENER_METHOD: &str = "handle_event";

/// Prefix under which the settings document is flattened into parameters.
pub const SETTINGS_PREFIX: &str = "settings";

/// First character of a service reference argument (`@service.id`).
pub const SERVICE_REF_PREFIX: char = '@';

/// Delimiter of a parameter reference argument (`%dotted.key%`).
pub const PARAMETER_REF_DELIMITER: char = '%';
