use thiserror::Error;
use crate::pinsvc::structs::batch_errors::BatchErrors;
use crate::rpc::enums::rpc_error::RpcError;

#[derive(Error, Debug)]
pub enum PinSvcError {
    #[error("error decoding cid {cid}: {reason}")]
    InvalidCid { cid: String, reason: String },

    #[error("error in '{param}' query param: {reason}")]
    InvalidQuery { param: String, reason: String },

    #[error("error decoding request body: {0}")]
    InvalidBody(String),

    #[error("pin not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Rpc(#[from] RpcError),

    /// A status lookup of one explicit batch failed.
    #[error("{cid}: {source}")]
    Lookup { cid: String, source: RpcError },

    #[error("request cancelled")]
    Cancelled,

    #[error("status task failed: {0}")]
    Task(String),

    #[error("{0}")]
    Multiple(BatchErrors),
}

impl PinSvcError {
    pub(crate) fn invalid_query(param: &str, reason: impl Into<String>) -> PinSvcError {
        PinSvcError::InvalidQuery {
            param: param.to_string(),
            reason: reason.into(),
        }
    }
}
