use tokio_util::sync::CancellationToken;
use tracing::Span;
use crate::cluster::structs::cluster_pin::ClusterPin;
use crate::mapper::conversions::pin_status_info;
use crate::mapper::structs::status_mapper::StatusMapper;
use crate::pinsvc::enums::status::Status;
use crate::pinsvc::structs::pin::Pin;
use crate::pinsvc::structs::pin_status::PinStatus;
use crate::rpc::structs::cluster_client::ClusterClient;

impl StatusMapper {
    pub fn new(cluster: ClusterClient, span: Span) -> StatusMapper {
        StatusMapper { cluster, span }
    }

    /// Status of a pin the cluster has just accepted.
    ///
    /// No peer has reported on the pin yet, so the status is always `queued`
    /// and `created` is the pin timestamp. Delegates are the addresses of the
    /// target peers: every cluster member for a pin-everywhere, the allocations
    /// otherwise. Failed lookups are logged and leave their addresses out.
    ///
    /// Peers are looked up one after the other. A cancelled request stops the
    /// lookups and keeps what was gathered so far.
    pub async fn pin_to_svc_pin_status(&self, cancel: &CancellationToken, request_id: &str, pin: &ClusterPin) -> PinStatus {
        let mut status = PinStatus {
            request_id: request_id.to_string(),
            status: Status::Queued,
            created: pin.timestamp,
            pin: Pin {
                cid: pin.cid.to_string(),
                name: pin.options.name.clone(),
                origins: pin.options.origins.clone(),
                meta: pin.options.metadata.clone(),
            },
            delegates: Vec::new(),
            info: pin_status_info(),
        };

        let peers = if pin.is_pin_everywhere() {
            match self.cluster.peers(cancel).await {
                Ok(peers) => peers,
                Err(error) => {
                    tracing::error!(parent: &self.span, "[MAPPER] Error listing cluster peers: {}", error);
                    Vec::new()
                }
            }
        } else {
            pin.allocations.clone()
        };

        for peer in peers {
            if cancel.is_cancelled() {
                tracing::debug!(parent: &self.span, "[MAPPER] Request cancelled, skipping remaining delegate lookups");
                break;
            }
            match self.cluster.ipfs_id(cancel, &peer).await {
                Ok(ipfs_id) => status.delegates.extend(ipfs_id.addresses),
                Err(error) => {
                    tracing::error!(parent: &self.span, "[MAPPER] Error looking up IPFS addresses of {}: {}", peer, error);
                }
            }
        }

        status
    }
}
