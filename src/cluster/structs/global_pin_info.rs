use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::cluster::structs::content_id::ContentId;
use crate::cluster::structs::pin_info::PinInfo;

/// Status of a pin across every peer of the cluster.
///
/// `peer_map` is keyed by peer identity. Built fresh by the cluster for each
/// status query.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GlobalPinInfo {
    pub cid: ContentId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub allocations: Vec<String>,
    #[serde(default)]
    pub origins: Vec<String>,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
    #[serde(default)]
    pub peer_map: BTreeMap<String, PinInfo>,
}
