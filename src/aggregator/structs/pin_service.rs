use tracing::Span;
use crate::mapper::structs::status_mapper::StatusMapper;
use crate::rpc::structs::cluster_client::ClusterClient;

/// Entry point for every pinning-service operation.
///
/// Holds no per-request state; one instance is shared by all API workers.
#[derive(Debug)]
pub struct PinService {
    pub(crate) cluster: ClusterClient,
    pub(crate) mapper: StatusMapper,
    /// Upper bound of concurrent `Cluster.Status` calls within one batch.
    pub(crate) status_concurrency: usize,
    pub(crate) span: Span,
}
