use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Call-by-name request envelope. An empty `dest` targets the local peer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RpcRequest {
    pub dest: String,
    pub service: String,
    pub method: String,
    pub payload: Value,
}
