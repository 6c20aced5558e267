use tracing::Span;
use crate::rpc::structs::cluster_client::ClusterClient;

/// Turns an accepted cluster pin into the status returned to the client.
///
/// Events are emitted under `span`, handed in by the owner.
#[derive(Debug, Clone)]
pub struct StatusMapper {
    pub(crate) cluster: ClusterClient,
    pub(crate) span: Span,
}
