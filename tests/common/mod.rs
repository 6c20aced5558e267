#![allow(dead_code)]
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use cid::Cid;
use cid::multihash::Multihash;
use parking_lot::{Mutex, RwLock};
use serde_json::{json, Value};
use tokio_util::sync::CancellationToken;
use tracing::Span;
use pinsvc_bridge::aggregator::structs::pin_service::PinService;
use pinsvc_bridge::api::structs::api_service_data::ApiServiceData;
use pinsvc_bridge::cluster::structs::cluster_pin::ClusterPin;
use pinsvc_bridge::cluster::structs::content_id::ContentId;
use pinsvc_bridge::cluster::structs::global_pin_info::GlobalPinInfo;
use pinsvc_bridge::cluster::structs::ipfs_id::IpfsId;
use pinsvc_bridge::cluster::structs::pin_info::PinInfo;
use pinsvc_bridge::cluster::structs::tracker_status::TrackerStatus;
use pinsvc_bridge::config::structs::configuration::Configuration;
use pinsvc_bridge::rpc::enums::rpc_error::RpcError;
use pinsvc_bridge::rpc::structs::cluster_client::ClusterClient;
use pinsvc_bridge::rpc::structs::rpc_request::RpcRequest;
use pinsvc_bridge::rpc::traits::rpc_transport::RpcTransport;

pub type TestConfig = Arc<Configuration>;
pub type TestCluster = Arc<FakeCluster>;

pub const NOT_FOUND: &str = "not found";

/// In-memory stand-in for the cluster RPC endpoint.
///
/// Keeps pins in insertion order, answers the six cluster operations and
/// records every call by name.
pub struct FakeCluster {
    pub peers: Vec<String>,
    pins: RwLock<Vec<GlobalPinInfo>>,
    failing: RwLock<BTreeSet<ContentId>>,
    updates: RwLock<BTreeMap<ContentId, ContentId>>,
    calls: Mutex<Vec<String>>,
}

impl FakeCluster {
    pub fn new(peers: &[&str]) -> FakeCluster {
        FakeCluster {
            peers: peers.iter().map(|peer| peer.to_string()).collect(),
            pins: RwLock::new(Vec::new()),
            failing: RwLock::new(BTreeSet::new()),
            updates: RwLock::new(BTreeMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Adds a pin reported by every peer with `status` at `ts`.
    pub fn insert_pin(&self, cid: ContentId, name: &str, meta: &[(&str, &str)], status: TrackerStatus, ts: DateTime<Utc>) {
        let mut info = GlobalPinInfo::new(cid);
        info.name = name.to_string();
        info.metadata = meta.iter().map(|(key, value)| (key.to_string(), value.to_string())).collect();
        info.peer_map = self.peers.iter().map(|peer| (peer.clone(), PinInfo {
            peer: peer.clone(),
            status,
            ipfs_addresses: vec![peer_address(peer)],
            ts,
            error: String::new(),
        })).collect();
        self.pins.write().push(info);
    }

    /// Makes every status lookup of `cid` fail.
    pub fn fail_status(&self, cid: ContentId) {
        self.failing.write().insert(cid);
    }

    pub fn contains(&self, cid: &ContentId) -> bool {
        self.pins.read().iter().any(|info| &info.cid == cid)
    }

    /// The pin replaced by `cid`, if `cid` was pinned as an update.
    pub fn replaced_by(&self, cid: &ContentId) -> Option<ContentId> {
        self.updates.read().get(cid).copied()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    fn handle(&self, request: RpcRequest) -> Result<Value, RpcError> {
        let decode_error = |error: serde_json::Error| RpcError::Encoding(error.to_string());
        match request.name().as_str() {
            "Cluster.Pin" => {
                let mut pin: ClusterPin = serde_json::from_value(request.payload).map_err(decode_error)?;
                pin.timestamp = Utc::now();
                if let Some(previous) = pin.options.pin_update {
                    self.updates.write().insert(pin.cid, previous);
                }
                let mut info = GlobalPinInfo::new(pin.cid);
                info.name = pin.options.name.clone();
                info.origins = pin.options.origins.clone();
                info.metadata = pin.options.metadata.clone();
                info.peer_map = self.peers.iter().map(|peer| (peer.clone(), PinInfo {
                    peer: peer.clone(),
                    status: TrackerStatus::PIN_QUEUED,
                    ipfs_addresses: vec![peer_address(peer)],
                    ts: pin.timestamp,
                    error: String::new(),
                })).collect();
                self.pins.write().push(info);
                serde_json::to_value(pin).map_err(decode_error)
            }
            "Cluster.Unpin" => {
                let pin: ClusterPin = serde_json::from_value(request.payload).map_err(decode_error)?;
                let mut pins = self.pins.write();
                match pins.iter().position(|info| info.cid == pin.cid) {
                    None => Err(RpcError::Remote(NOT_FOUND.to_string())),
                    Some(index) => {
                        pins.remove(index);
                        serde_json::to_value(pin).map_err(decode_error)
                    }
                }
            }
            "Cluster.Status" => {
                let cid: ContentId = serde_json::from_value(request.payload).map_err(decode_error)?;
                if self.failing.read().contains(&cid) {
                    return Err(RpcError::Remote("status unavailable".to_string()));
                }
                match self.pins.read().iter().find(|info| info.cid == cid) {
                    None => Err(RpcError::Remote(NOT_FOUND.to_string())),
                    Some(info) => serde_json::to_value(info).map_err(decode_error),
                }
            }
            "Cluster.StatusAll" => {
                let filter: TrackerStatus = serde_json::from_value(request.payload).map_err(decode_error)?;
                let pins = self.pins.read();
                let infos: Vec<&GlobalPinInfo> = pins
                    .iter()
                    .filter(|info| filter.is_empty() || info.combined_status().matches(filter))
                    .collect();
                serde_json::to_value(infos).map_err(decode_error)
            }
            "Cluster.IPFSID" => {
                let peer: String = serde_json::from_value(request.payload).map_err(decode_error)?;
                if !self.peers.contains(&peer) {
                    return Err(RpcError::Remote(format!("unknown peer {}", peer)));
                }
                let id = IpfsId { id: format!("ipfs-{}", peer), addresses: vec![peer_address(&peer)], error: String::new() };
                serde_json::to_value(id).map_err(decode_error)
            }
            "Consensus.Peers" => Ok(json!(self.peers)),
            other => Err(RpcError::Remote(format!("unknown method {}", other))),
        }
    }
}

#[async_trait]
impl RpcTransport for FakeCluster {
    async fn call(&self, cancel: &CancellationToken, request: RpcRequest) -> Result<Value, RpcError> {
        if cancel.is_cancelled() {
            return Err(RpcError::Cancelled);
        }
        self.calls.lock().push(request.name());
        self.handle(request)
    }
}

pub fn peer_address(peer: &str) -> String {
    format!("/dns4/{}.cluster.test/tcp/4001", peer)
}

/// A CIDv1 whose digest is `seed` repeated.
pub fn test_cid(seed: u8) -> ContentId {
    let digest = Multihash::<64>::wrap(0x12, &[seed; 32]).unwrap();
    ContentId(Cid::new_v1(0x70, digest))
}

pub fn create_test_config() -> TestConfig {
    let mut config = Configuration::init();
    config.api_server.bind_address = "127.0.0.1:9097".to_string();
    config.api_server.threads = 1;
    config.cluster_rpc.status_concurrency = 4;
    Arc::new(config)
}

pub fn create_test_cluster() -> TestCluster {
    Arc::new(FakeCluster::new(&["peer-a", "peer-b", "peer-c"]))
}

pub fn create_test_pin_service(cluster: TestCluster) -> Arc<PinService> {
    let config = create_test_config();
    Arc::new(PinService::new(ClusterClient::new(cluster), &config.cluster_rpc, Span::none()))
}

pub fn create_test_service_data(cluster: TestCluster) -> Arc<ApiServiceData> {
    let config = create_test_config();
    Arc::new(ApiServiceData {
        pin_service: create_test_pin_service(cluster),
        pinsvc_config: Arc::new(config.pinsvc.clone()),
        span: Span::none(),
    })
}
