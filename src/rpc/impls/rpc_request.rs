use serde_json::Value;
use crate::rpc::structs::rpc_request::RpcRequest;

impl RpcRequest {
    pub fn new(dest: &str, service: &str, method: &str, payload: Value) -> Self {
        Self {
            dest: dest.to_string(),
            service: service.to_string(),
            method: method.to_string(),
            payload,
        }
    }

    /// `Service.Method`, as used in log lines.
    pub fn name(&self) -> String {
        format!("{}.{}", self.service, self.method)
    }
}
