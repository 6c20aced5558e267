use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::cluster::structs::content_id::ContentId;
use crate::cluster::structs::pin_options::PinOptions;

/// A pin as submitted to the cluster and as returned once accepted.
///
/// `allocations` lists the peers chosen to hold the content; it is empty when
/// the pin targets every peer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClusterPin {
    pub cid: ContentId,
    #[serde(flatten)]
    pub options: PinOptions,
    #[serde(default)]
    pub allocations: Vec<String>,
    #[serde(default)]
    pub timestamp: DateTime<Utc>,
}
