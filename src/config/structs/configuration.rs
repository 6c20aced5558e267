use serde::{Deserialize, Serialize};
use crate::config::enums::log_level::LogLevel;
use crate::config::structs::api_server_config::ApiServerConfig;
use crate::config::structs::cluster_rpc_config::ClusterRpcConfig;
use crate::config::structs::pinsvc_config::PinSvcConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Configuration {
    pub log_level: LogLevel,
    pub api_server: ApiServerConfig,
    pub cluster_rpc: ClusterRpcConfig,
    pub pinsvc: PinSvcConfig,
}
