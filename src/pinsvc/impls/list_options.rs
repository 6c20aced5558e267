use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::str::FromStr;
use chrono::{DateTime, Utc};
use crate::cluster::structs::content_id::ContentId;
use crate::common::common::parse_query;
use crate::config::structs::pinsvc_config::PinSvcConfig;
use crate::pinsvc::enums::matching_strategy::MatchingStrategy;
use crate::pinsvc::enums::status::Status;
use crate::pinsvc::errors::PinSvcError;
use crate::pinsvc::impls::pin::MAX_PIN_NAME_LENGTH;
use crate::pinsvc::structs::list_options::ListOptions;
use crate::pinsvc::structs::pin_status::PinStatus;

const KNOWN_PARAMS: [&str; 8] = ["cid", "name", "match", "status", "before", "after", "limit", "meta"];

impl ListOptions {
    pub fn new(config: &PinSvcConfig) -> ListOptions {
        ListOptions {
            cids: Vec::new(),
            name: String::new(),
            matching_strategy: MatchingStrategy::default(),
            status: BTreeSet::new(),
            before: None,
            after: None,
            limit: config.default_limit,
            meta: BTreeMap::new(),
        }
    }

    /// Parses and validates a raw query string.
    ///
    /// Fails on the first unknown parameter, repeated scalar parameter or
    /// malformed value.
    pub fn from_query(query: &str, config: &PinSvcConfig) -> Result<ListOptions, PinSvcError> {
        let params = parse_query(query)?;
        if let Some(unknown) = params.keys().find(|key| !KNOWN_PARAMS.contains(&key.as_str())) {
            return Err(PinSvcError::invalid_query(unknown, "unknown parameter"));
        }

        let mut options = ListOptions::new(config);

        for value in params.get("cid").into_iter().flatten() {
            for token in value.split(',').filter(|token| !token.is_empty()) {
                options.cids.push(ContentId::decode(token)?);
            }
        }

        if let Some(name) = single_param(&params, "name")? {
            if name.chars().count() > MAX_PIN_NAME_LENGTH {
                return Err(PinSvcError::invalid_query("name", format!("longer than {} chars", MAX_PIN_NAME_LENGTH)));
            }
            options.name = name.to_string();
        }

        if let Some(strategy) = single_param(&params, "match")? {
            options.matching_strategy = MatchingStrategy::from_str(strategy)
                .map_err(|reason| PinSvcError::invalid_query("match", reason))?;
        }

        for value in params.get("status").into_iter().flatten() {
            for token in value.split(',').filter(|token| !token.is_empty()) {
                let status = Status::from_str(token).map_err(|reason| PinSvcError::invalid_query("status", reason))?;
                options.status.insert(status);
            }
        }

        if let Some(before) = single_param(&params, "before")? {
            options.before = Some(parse_timestamp("before", before)?);
        }

        if let Some(after) = single_param(&params, "after")? {
            options.after = Some(parse_timestamp("after", after)?);
        }

        if let Some(limit) = single_param(&params, "limit")? {
            let limit = limit.parse::<usize>()
                .map_err(|error| PinSvcError::invalid_query("limit", format!("{}: {}", limit, error)))?;
            if limit == 0 || limit > config.max_limit {
                return Err(PinSvcError::invalid_query("limit", format!("must be between 1 and {}", config.max_limit)));
            }
            options.limit = limit;
        }

        if let Some(meta) = single_param(&params, "meta")? {
            options.meta = serde_json::from_str::<BTreeMap<String, String>>(meta)
                .map_err(|error| PinSvcError::invalid_query("meta", error.to_string()))?;
        }

        Ok(options)
    }

    /// Client-side filters shared by every listing path: name, metadata and the
    /// creation time window.
    pub fn matches(&self, status: &PinStatus) -> bool {
        if !status.pin.matches_name(&self.name, self.matching_strategy) {
            return false;
        }
        if !status.pin.matches_meta(&self.meta) {
            return false;
        }
        if let Some(before) = self.before {
            if status.created >= before {
                return false;
            }
        }
        if let Some(after) = self.after {
            if status.created <= after {
                return false;
            }
        }
        true
    }
}

fn single_param<'a>(params: &'a HashMap<String, Vec<String>>, name: &str) -> Result<Option<&'a str>, PinSvcError> {
    match params.get(name).map(Vec::as_slice) {
        None | Some([]) => Ok(None),
        Some([value]) if value.is_empty() => Ok(None),
        Some([value]) => Ok(Some(value.as_str())),
        Some(_) => Err(PinSvcError::invalid_query(name, "given more than once")),
    }
}

fn parse_timestamp(param: &str, value: &str) -> Result<DateTime<Utc>, PinSvcError> {
    DateTime::parse_from_rfc3339(value)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .map_err(|error| PinSvcError::invalid_query(param, format!("{}: {}", value, error)))
}
