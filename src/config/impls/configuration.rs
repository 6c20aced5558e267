use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use std::thread::available_parallelism;
use regex::Regex;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::enums::log_level::LogLevel;
use crate::config::structs::api_server_config::ApiServerConfig;
use crate::config::structs::cluster_rpc_config::ClusterRpcConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::pinsvc_config::PinSvcConfig;

pub const ENV_BIND_ADDRESS: &str = "PINSVC_BIND_ADDRESS";
pub const ENV_CLUSTER_ENDPOINT: &str = "PINSVC_CLUSTER_ENDPOINT";

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: LogLevel::info,
            api_server: ApiServerConfig {
                bind_address: String::from("0.0.0.0:9097"),
                keep_alive: 60,
                request_timeout: 30,
                disconnect_timeout: 30,
                threads: available_parallelism().map(|threads| threads.get() as u64).unwrap_or(4),
            },
            cluster_rpc: ClusterRpcConfig {
                endpoint: String::from("http://127.0.0.1:9094"),
                timeout: 60,
                status_concurrency: 32,
            },
            pinsvc: PinSvcConfig::default(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => Self::load(data.as_slice()).map_err(ConfigurationError::ParseError),
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path).map_err(ConfigurationError::IOError)?;
        file.write_all(data.as_ref()).map_err(ConfigurationError::IOError)
    }

    pub fn save_from_config(config: &Configuration, path: &str) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    /// Loads, overrides from the environment and validates the configuration.
    ///
    /// With `create` set, a missing or broken file is replaced by the defaults
    /// and an error is still returned so the operator can review the new file.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, ConfigurationError> {
        let mut config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path);
                    return Err(error);
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(&Configuration::init(), path) {
                    Ok(_) => {
                        eprintln!("Please edit {} and start again, exiting now...", path);
                        Err(ConfigurationError::NotCreated(format!("created {}", path)))
                    }
                    Err(e) => {
                        eprintln!("{} could not be created, check permissions...", path);
                        eprintln!("{e}");
                        Err(e)
                    }
                };
            }
        };

        config.apply_env_overrides();

        println!("[VALIDATE] Validating configuration...");
        config.validate()?;
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) {
        if let Ok(bind_address) = std::env::var(ENV_BIND_ADDRESS) {
            self.api_server.bind_address = bind_address;
        }
        if let Ok(endpoint) = std::env::var(ENV_CLUSTER_ENDPOINT) {
            self.cluster_rpc.endpoint = endpoint;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.api_server.bind_address.parse::<SocketAddr>().is_err() {
            return Err(ConfigurationError::ValidationError(format!(
                "[API] bind_address \"{}\" is not a socket address", self.api_server.bind_address
            )));
        }
        if self.api_server.threads == 0 {
            return Err(ConfigurationError::ValidationError("[API] threads must be at least 1".to_string()));
        }

        Self::validate_value("[CLUSTER RPC] endpoint", &self.cluster_rpc.endpoint, r"^https?://[^\s/]+(/\S*)?$")?;
        if self.cluster_rpc.timeout == 0 {
            return Err(ConfigurationError::ValidationError("[CLUSTER RPC] timeout must be at least 1 second".to_string()));
        }
        if self.cluster_rpc.status_concurrency == 0 {
            return Err(ConfigurationError::ValidationError("[CLUSTER RPC] status_concurrency must be at least 1".to_string()));
        }

        if self.pinsvc.max_limit == 0 {
            return Err(ConfigurationError::ValidationError("[PINSVC] max_limit must be at least 1".to_string()));
        }
        if self.pinsvc.default_limit == 0 || self.pinsvc.default_limit > self.pinsvc.max_limit {
            return Err(ConfigurationError::ValidationError(format!(
                "[PINSVC] default_limit must be between 1 and {}", self.pinsvc.max_limit
            )));
        }
        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), ConfigurationError> {
        let regex_check = Regex::new(regex)
            .map_err(|e| ConfigurationError::ValidationError(format!("{} [:] Regex: \"{}\" [:] {}", name, regex, e)))?;
        if !regex_check.is_match(value) {
            return Err(ConfigurationError::ValidationError(format!(
                "{} [:] Value: \"{}\" [:] Regex: \"{}\"", name, value, regex_check
            )));
        }
        Ok(())
    }
}
