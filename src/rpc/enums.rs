//! RPC enumerations.

/// Errors raised by RPC calls.
pub mod rpc_error;
