use serde::{Deserialize, Serialize};

/// Identity of the IPFS daemon attached to a cluster peer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct IpfsId {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub addresses: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error: String,
}
