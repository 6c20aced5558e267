//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// REST API server configuration (address, timeouts, workers).
pub mod api_server_config;

/// Cluster RPC configuration (endpoint, timeout, fan-out).
pub mod cluster_rpc_config;

/// List query limits.
pub mod pinsvc_config;
