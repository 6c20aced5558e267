use std::collections::BTreeMap;
use chrono::{DateTime, Utc};
use crate::cluster::structs::content_id::ContentId;
use crate::cluster::structs::global_pin_info::GlobalPinInfo;
use crate::cluster::structs::tracker_status::TrackerStatus;

impl GlobalPinInfo {
    pub fn new(cid: ContentId) -> GlobalPinInfo {
        GlobalPinInfo {
            cid,
            name: String::new(),
            allocations: Vec::new(),
            origins: Vec::new(),
            metadata: BTreeMap::new(),
            peer_map: BTreeMap::new(),
        }
    }

    /// Union of every peer's status flags.
    pub fn combined_status(&self) -> TrackerStatus {
        self.peer_map
            .values()
            .fold(TrackerStatus::empty(), |mask, info| mask | info.status)
    }

    /// Oldest report timestamp across peers, or the zero time without reports.
    pub fn oldest_timestamp(&self) -> DateTime<Utc> {
        self.peer_map
            .values()
            .map(|info| info.ts)
            .min()
            .unwrap_or_default()
    }

    /// Every peer's IPFS addresses, in peer order.
    pub fn delegates(&self) -> Vec<String> {
        self.peer_map
            .values()
            .flat_map(|info| info.ipfs_addresses.iter().cloned())
            .collect()
    }
}
