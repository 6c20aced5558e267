//! Implementation blocks for RPC types.

pub mod rpc_error;

pub mod rpc_request;

pub mod rpc_response;

pub mod cluster_client;

pub mod http_rpc_transport;
