use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RpcError {
    #[error("rpc transport error: {0}")]
    Transport(String),

    /// Error message returned by the remote peer, kept verbatim.
    #[error("{0}")]
    Remote(String),

    #[error("rpc encoding error: {0}")]
    Encoding(String),

    #[error("rpc call timed out")]
    Timeout,

    #[error("rpc call cancelled")]
    Cancelled,
}
