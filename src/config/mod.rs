//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the service
//! configuration from TOML files.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml`) contains:
//! - **log_level**: Verbosity of the console logger
//! - **api_server**: Bind address and HTTP timeouts of the REST API
//! - **cluster_rpc**: Cluster RPC endpoint, call timeout and fan-out bound
//! - **pinsvc**: Default and maximum result limits of list queries
//!
//! # Features
//!
//! - TOML file parsing with detailed error messages
//! - Environment variable overrides (`PINSVC_BIND_ADDRESS`, `PINSVC_CLUSTER_ENDPOINT`)
//! - Default configuration generation with `--create-config`
//!
//! # Example
//!
//! ```rust,ignore
//! use pinsvc_bridge::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! ```

/// Configuration enumerations (log level, errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

#[cfg(test)]
mod tests;
