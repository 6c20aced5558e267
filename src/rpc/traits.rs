//! RPC traits.

/// Call-by-name transport to the cluster.
pub mod rpc_transport;
