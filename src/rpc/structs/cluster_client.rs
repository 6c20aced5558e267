use std::sync::Arc;
use crate::rpc::traits::rpc_transport::RpcTransport;

/// Typed facade over an [`RpcTransport`] for the cluster operations.
///
/// Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct ClusterClient {
    pub(crate) transport: Arc<dyn RpcTransport>,
}
