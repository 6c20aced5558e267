#[cfg(test)]
mod config_tests {
    mod log_level_tests {
        use log::LevelFilter;
        use crate::config::enums::log_level::LogLevel;

        #[test]
        fn test_log_level_default() {
            assert_eq!(LogLevel::default(), LogLevel::info);
        }

        #[test]
        fn test_log_level_filter() {
            assert_eq!(LogLevel::off.level_filter(), LevelFilter::Off);
            assert_eq!(LogLevel::trace.level_filter(), LevelFilter::Trace);
            assert_eq!(LogLevel::debug.level_filter(), LevelFilter::Debug);
            assert_eq!(LogLevel::info.level_filter(), LevelFilter::Info);
            assert_eq!(LogLevel::warn.level_filter(), LevelFilter::Warn);
            assert_eq!(LogLevel::error.level_filter(), LevelFilter::Error);
        }

        #[test]
        fn test_log_level_serialization() {
            assert_eq!(serde_json::to_string(&LogLevel::debug).unwrap(), "\"debug\"");
            let level: LogLevel = serde_json::from_str("\"warn\"").unwrap();
            assert_eq!(level, LogLevel::warn);
        }

        #[test]
        fn test_log_level_rejects_unknown() {
            assert!(serde_json::from_str::<LogLevel>("\"verbose\"").is_err());
        }

        #[test]
        fn test_log_level_display() {
            assert_eq!(format!("{}", LogLevel::error), "error");
        }
    }

    mod configuration_tests {
        use crate::config::enums::configuration_error::ConfigurationError;
        use crate::config::enums::log_level::LogLevel;
        use crate::config::structs::configuration::Configuration;

        #[test]
        fn test_configuration_init_is_valid() {
            let config = Configuration::init();
            assert!(config.validate().is_ok());
            assert_eq!(config.pinsvc.default_limit, 10);
            assert_eq!(config.pinsvc.max_limit, 1000);
            assert!(config.cluster_rpc.status_concurrency > 0);
        }

        #[test]
        fn test_configuration_toml_roundtrip() {
            let config = Configuration::init();
            let serialized = toml::to_string(&config).unwrap();
            let loaded = Configuration::load(serialized.as_bytes()).unwrap();
            assert_eq!(loaded, config);
        }

        #[test]
        fn test_configuration_load_from_toml() {
            let data = r#"
log_level = "debug"

[api_server]
bind_address = "127.0.0.1:9097"
keep_alive = 5
request_timeout = 10
disconnect_timeout = 5
threads = 2

[cluster_rpc]
endpoint = "http://10.0.0.5:9094"
timeout = 15
status_concurrency = 8

[pinsvc]
default_limit = 20
max_limit = 500
"#;
            let config = Configuration::load(data.as_bytes()).unwrap();
            assert_eq!(config.log_level, LogLevel::debug);
            assert_eq!(config.api_server.threads, 2);
            assert_eq!(config.cluster_rpc.endpoint, "http://10.0.0.5:9094");
            assert_eq!(config.cluster_rpc.status_concurrency, 8);
            assert_eq!(config.pinsvc.default_limit, 20);
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_configuration_load_rejects_unknown_log_level() {
            let mut serialized = toml::to_string(&Configuration::init()).unwrap();
            serialized = serialized.replace("log_level = \"info\"", "log_level = \"chatty\"");
            assert!(Configuration::load(serialized.as_bytes()).is_err());
        }

        #[test]
        fn test_validate_bad_bind_address() {
            let mut config = Configuration::init();
            config.api_server.bind_address = "localhost".to_string();
            assert!(matches!(config.validate(), Err(ConfigurationError::ValidationError(_))));
        }

        #[test]
        fn test_validate_bad_endpoint() {
            let mut config = Configuration::init();
            config.cluster_rpc.endpoint = "ftp://cluster".to_string();
            assert!(matches!(config.validate(), Err(ConfigurationError::ValidationError(_))));
        }

        #[test]
        fn test_validate_zero_concurrency() {
            let mut config = Configuration::init();
            config.cluster_rpc.status_concurrency = 0;
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_validate_default_limit_above_max() {
            let mut config = Configuration::init();
            config.pinsvc.default_limit = 2000;
            let error = config.validate().unwrap_err();
            assert!(error.to_string().contains("default_limit"));
        }

        #[test]
        fn test_configuration_error_display() {
            let error = ConfigurationError::ValidationError("bad".to_string());
            assert_eq!(format!("{}", error), "invalid configuration: bad");
        }
    }
}
