use std::fmt;
use log::LevelFilter;
use crate::config::enums::log_level::LogLevel;

impl LogLevel {
    pub fn level_filter(&self) -> LevelFilter {
        match self {
            LogLevel::off => LevelFilter::Off,
            LogLevel::trace => LevelFilter::Trace,
            LogLevel::debug => LevelFilter::Debug,
            LogLevel::info => LevelFilter::Info,
            LogLevel::warn => LevelFilter::Warn,
            LogLevel::error => LevelFilter::Error,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::off => write!(f, "off"),
            LogLevel::trace => write!(f, "trace"),
            LogLevel::debug => write!(f, "debug"),
            LogLevel::info => write!(f, "info"),
            LogLevel::warn => write!(f, "warn"),
            LogLevel::error => write!(f, "error"),
        }
    }
}
