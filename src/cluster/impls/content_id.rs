use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;
use cid::Cid;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use crate::cluster::structs::content_id::ContentId;
use crate::pinsvc::errors::PinSvcError;

impl ContentId {
    /// Decodes a content identifier, mapping failures to [`PinSvcError::InvalidCid`].
    pub fn decode(value: &str) -> Result<ContentId, PinSvcError> {
        ContentId::from_str(value).map_err(|error| PinSvcError::InvalidCid {
            cid: value.to_string(),
            reason: error.to_string(),
        })
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ContentId {
    type Err = cid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cid::try_from(s).map(ContentId)
    }
}

impl From<Cid> for ContentId {
    fn from(cid: Cid) -> Self {
        ContentId(cid)
    }
}

impl Serialize for ContentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ContentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ContentId::from_str(&raw).map_err(serde::de::Error::custom)
    }
}
