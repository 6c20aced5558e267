use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RpcResponse {
    pub success: bool,
    #[serde(default)]
    pub payload: Value,
    #[serde(default)]
    pub error_message: Option<String>,
}
