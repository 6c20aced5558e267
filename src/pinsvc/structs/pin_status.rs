use std::collections::BTreeMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::pinsvc::enums::status::Status;
use crate::pinsvc::structs::pin::Pin;

/// Status of a pin request, as returned to pinning clients.
///
/// A computed view over the cluster state: `created` is the oldest peer report
/// and `delegates` the union of every peer's addresses. The request identifier
/// is the content identifier itself, so two requests for the same content share
/// one identifier.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PinStatus {
    #[serde(rename = "requestid")]
    pub request_id: String,
    pub status: Status,
    pub created: DateTime<Utc>,
    pub pin: Pin,
    #[serde(default)]
    pub delegates: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub info: BTreeMap<String, String>,
}
