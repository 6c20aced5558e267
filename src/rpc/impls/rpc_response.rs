use serde_json::Value;
use crate::rpc::enums::rpc_error::RpcError;
use crate::rpc::structs::rpc_response::RpcResponse;

impl RpcResponse {
    pub fn success(payload: Value) -> Self {
        Self {
            success: true,
            payload,
            error_message: None,
        }
    }

    pub fn error(error_message: String) -> Self {
        Self {
            success: false,
            payload: Value::Null,
            error_message: Some(error_message),
        }
    }

    pub fn into_result(self) -> Result<Value, RpcError> {
        if self.success {
            return Ok(self.payload);
        }
        Err(RpcError::Remote(self.error_message.unwrap_or_default()))
    }
}
