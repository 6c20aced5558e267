use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::cluster::enums::pin_mode::PinMode;
use crate::cluster::structs::content_id::ContentId;

/// User-facing options of a cluster pin.
///
/// A replication factor of `-1` on both bounds means "pin everywhere".
/// `pin_update` names an existing pin whose allocations are reused, turning the
/// pin request into an update-in-place.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PinOptions {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub mode: PinMode,
    #[serde(default = "PinOptions::default_replication")]
    pub replication_factor_min: i32,
    #[serde(default = "PinOptions::default_replication")]
    pub replication_factor_max: i32,
    #[serde(default)]
    pub origins: Vec<String>,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pin_update: Option<ContentId>,
}
