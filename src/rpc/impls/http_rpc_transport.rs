use std::time::Duration;
use async_trait::async_trait;
use log::debug;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use crate::config::structs::cluster_rpc_config::ClusterRpcConfig;
use crate::rpc::enums::rpc_error::RpcError;
use crate::rpc::structs::http_rpc_transport::HttpRpcTransport;
use crate::rpc::structs::rpc_request::RpcRequest;
use crate::rpc::structs::rpc_response::RpcResponse;
use crate::rpc::traits::rpc_transport::RpcTransport;

impl HttpRpcTransport {
    pub fn new(config: &ClusterRpcConfig) -> Result<HttpRpcTransport, RpcError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| RpcError::Transport(e.to_string()))?;
        Ok(HttpRpcTransport {
            client,
            url: Self::rpc_url(&config.endpoint),
            timeout: Duration::from_secs(config.timeout),
        })
    }

    pub fn rpc_url(endpoint: &str) -> String {
        format!("{}/rpc", endpoint.trim_end_matches('/'))
    }

    async fn send(&self, request: &RpcRequest) -> Result<Value, RpcError> {
        let response = self.client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| RpcError::Transport(e.to_string()))?;
        let envelope = response
            .json::<RpcResponse>()
            .await
            .map_err(|e| RpcError::Encoding(e.to_string()))?;
        envelope.into_result()
    }
}

#[async_trait]
impl RpcTransport for HttpRpcTransport {
    async fn call(&self, cancel: &CancellationToken, request: RpcRequest) -> Result<Value, RpcError> {
        debug!("[RPC] {} -> {}", request.name(), self.url);
        tokio::select! {
            _ = cancel.cancelled() => Err(RpcError::Cancelled),
            result = tokio::time::timeout(self.timeout, self.send(&request)) => {
                result.unwrap_or(Err(RpcError::Timeout))
            }
        }
    }
}
