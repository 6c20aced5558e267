use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClusterRpcConfig {
    /// Base URL of the cluster RPC gateway.
    pub endpoint: String,
    /// Seconds before a single RPC call is abandoned.
    pub timeout: u64,
    /// Maximum status lookups in flight for one explicit batch.
    pub status_concurrency: usize,
}
