use std::collections::{BTreeMap, BTreeSet};
use chrono::{DateTime, Utc};
use crate::cluster::structs::content_id::ContentId;
use crate::pinsvc::enums::matching_strategy::MatchingStrategy;
use crate::pinsvc::enums::status::Status;

/// Filters of a list query, validated once per request.
///
/// # Parameters
///
/// | Query param | Field | Effect |
/// |-------------|-------|--------|
/// | `cid` | `cids` | comma separated; switches to an explicit batch lookup |
/// | `name` | `name` | name filter, at most 255 characters |
/// | `match` | `matching_strategy` | how `name` is compared, default `exact` |
/// | `status` | `status` | comma separated statuses, empty means any |
/// | `before` | `before` | only pins created strictly before (RFC 3339) |
/// | `after` | `after` | only pins created strictly after (RFC 3339) |
/// | `limit` | `limit` | result cap, `1..=max_limit` |
/// | `meta` | `meta` | JSON object; every pair must be present on the pin |
#[derive(Debug, Clone, PartialEq)]
pub struct ListOptions {
    pub cids: Vec<ContentId>,
    pub name: String,
    pub matching_strategy: MatchingStrategy,
    pub status: BTreeSet<Status>,
    pub before: Option<DateTime<Utc>>,
    pub after: Option<DateTime<Utc>>,
    pub limit: usize,
    pub meta: BTreeMap<String, String>,
}
