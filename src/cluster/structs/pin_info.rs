use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::cluster::structs::tracker_status::TrackerStatus;

/// Status report of one peer for one pin.
///
/// Owned by the cluster pin tracker; read-only here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct PinInfo {
    pub peer: String,
    #[serde(default)]
    pub status: TrackerStatus,
    #[serde(default)]
    pub ipfs_addresses: Vec<String>,
    #[serde(default)]
    pub ts: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error: String,
}
