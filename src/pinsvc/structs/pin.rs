use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// Pin descriptor as sent by pinning clients.
///
/// `cid` is kept in its textual form; it is decoded when the pin is turned into
/// a cluster pin.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Pin {
    pub cid: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub origins: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: BTreeMap<String, String>,
}
