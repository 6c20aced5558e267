use std::collections::HashMap;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use crate::config::structs::configuration::Configuration;
use crate::pinsvc::errors::PinSvcError;

/// Splits a raw query string into lowercase keys and their percent-decoded
/// values, keeping repeated keys in order.
///
/// A key without `=` is recorded with no values. `+` decodes to a space.
pub fn parse_query(query: &str) -> Result<HashMap<String, Vec<String>>, PinSvcError> {
    let mut queries: HashMap<String, Vec<String>> = HashMap::new();
    for query_item in query.split('&').filter(|item| !item.is_empty()) {
        let (key_raw, value_raw) = match query_item.split_once('=') {
            Some((key, value)) => (key, Some(value)),
            None => (query_item, None),
        };
        let key_name = decode_component(key_raw)
            .map_err(|reason| PinSvcError::invalid_query(key_raw, reason))?
            .to_lowercase();
        if key_name.is_empty() {
            continue;
        }
        let entry = queries.entry(key_name.clone()).or_default();
        if let Some(value_raw) = value_raw {
            let value = decode_component(value_raw)
                .map_err(|reason| PinSvcError::invalid_query(&key_name, reason))?;
            entry.push(value);
        }
    }
    Ok(queries)
}

fn decode_component(raw: &str) -> Result<String, String> {
    let plus_decoded = raw.replace('+', " ");
    percent_encoding::percent_decode_str(&plus_decoded)
        .decode_utf8()
        .map(|value| value.into_owned())
        .map_err(|error| format!("invalid utf-8: {}", error))
}

pub fn setup_logging(config: &Configuration)
{
    let level = config.log_level.level_filter();

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    if let Err(_err) = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
    {
        panic!("Failed to initialize logging.")
    }
    info!("logging initialized.");
}
