use std::fmt;
use std::sync::Arc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use crate::cluster::structs::cluster_pin::ClusterPin;
use crate::cluster::structs::content_id::ContentId;
use crate::cluster::structs::global_pin_info::GlobalPinInfo;
use crate::cluster::structs::ipfs_id::IpfsId;
use crate::cluster::structs::tracker_status::TrackerStatus;
use crate::rpc::enums::rpc_error::RpcError;
use crate::rpc::structs::cluster_client::ClusterClient;
use crate::rpc::structs::rpc_request::RpcRequest;
use crate::rpc::traits::rpc_transport::RpcTransport;

impl ClusterClient {
    pub fn new(transport: Arc<dyn RpcTransport>) -> ClusterClient {
        ClusterClient { transport }
    }

    pub async fn call_context<A, R>(
        &self,
        cancel: &CancellationToken,
        dest: &str,
        service: &str,
        method: &str,
        args: &A,
    ) -> Result<R, RpcError>
    where
        A: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        if cancel.is_cancelled() {
            return Err(RpcError::Cancelled);
        }
        let payload = serde_json::to_value(args).map_err(|e| RpcError::Encoding(e.to_string()))?;
        let result = self.transport.call(cancel, RpcRequest::new(dest, service, method, payload)).await?;
        serde_json::from_value(result).map_err(|e| RpcError::Encoding(e.to_string()))
    }

    pub async fn pin(&self, cancel: &CancellationToken, pin: &ClusterPin) -> Result<ClusterPin, RpcError> {
        self.call_context(cancel, "", "Cluster", "Pin", pin).await
    }

    pub async fn unpin(&self, cancel: &CancellationToken, cid: &ContentId) -> Result<ClusterPin, RpcError> {
        self.call_context(cancel, "", "Cluster", "Unpin", &ClusterPin::new(*cid)).await
    }

    pub async fn status(&self, cancel: &CancellationToken, cid: &ContentId) -> Result<GlobalPinInfo, RpcError> {
        self.call_context(cancel, "", "Cluster", "Status", cid).await
    }

    /// Every pin whose combined status intersects `filter`; an empty filter
    /// returns every pin.
    pub async fn status_all(&self, cancel: &CancellationToken, filter: TrackerStatus) -> Result<Vec<GlobalPinInfo>, RpcError> {
        self.call_context(cancel, "", "Cluster", "StatusAll", &filter).await
    }

    pub async fn ipfs_id(&self, cancel: &CancellationToken, peer: &str) -> Result<IpfsId, RpcError> {
        self.call_context(cancel, "", "Cluster", "IPFSID", peer).await
    }

    pub async fn peers(&self, cancel: &CancellationToken) -> Result<Vec<String>, RpcError> {
        self.call_context(cancel, "", "Consensus", "Peers", &()).await
    }
}

impl fmt::Debug for ClusterClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClusterClient").finish_non_exhaustive()
    }
}
