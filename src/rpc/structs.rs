//! RPC data structures.

/// Request envelope.
pub mod rpc_request;

/// Response envelope.
pub mod rpc_response;

/// Typed client for the cluster operations.
pub mod cluster_client;

/// JSON-over-HTTP transport.
pub mod http_rpc_transport;
