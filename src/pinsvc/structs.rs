//! Pinning Services API data structures.

/// Pin descriptor supplied by clients.
pub mod pin;

/// Status of a pin request, returned to clients.
pub mod pin_status;

/// Result of a list query.
pub mod pin_list;

/// Validated list query parameters.
pub mod list_options;

/// Errors collected from a batch of concurrent lookups.
pub mod batch_errors;
