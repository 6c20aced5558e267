use crate::rpc::enums::rpc_error::RpcError;

/// Message of the cluster state's "pin not found" error.
pub const STATE_NOT_FOUND: &str = "not found";

impl RpcError {
    /// Detects the cluster's "not found" condition.
    ///
    /// The condition only survives the RPC boundary as a message, so it is
    /// recognised by comparing the error text.
    pub fn is_not_found(&self) -> bool {
        self.to_string() == STATE_NOT_FOUND
    }
}
