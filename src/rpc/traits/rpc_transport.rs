use async_trait::async_trait;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use crate::rpc::enums::rpc_error::RpcError;
use crate::rpc::structs::rpc_request::RpcRequest;

/// Moves one request to the cluster and returns the raw result payload.
///
/// Implementations must return [`RpcError::Cancelled`] promptly once `cancel`
/// fires, rather than waiting for the remote side.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RpcTransport: Send + Sync {
    async fn call(&self, cancel: &CancellationToken, request: RpcRequest) -> Result<Value, RpcError>;
}
