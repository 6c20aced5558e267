//! Configuration enumerations.

/// Console log level.
pub mod log_level;

/// Errors raised while loading or validating the configuration.
pub mod configuration_error;
