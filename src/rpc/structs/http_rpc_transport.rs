use std::time::Duration;

/// Posts RPC envelopes as JSON to `<endpoint>/rpc`.
#[derive(Debug, Clone)]
pub struct HttpRpcTransport {
    pub(crate) client: reqwest::Client,
    pub(crate) url: String,
    pub(crate) timeout: Duration,
}
