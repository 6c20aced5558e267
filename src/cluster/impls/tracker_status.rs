use serde::{Deserialize, Deserializer, Serialize, Serializer};
use crate::cluster::structs::tracker_status::TrackerStatus;

impl TrackerStatus {
    /// Returns true when any flag of `filter` is set.
    ///
    /// Filters are existential: a combined status matches as soon as one peer
    /// reported one of the requested flags.
    pub fn matches(&self, filter: TrackerStatus) -> bool {
        self.intersects(filter)
    }

    pub fn is_undefined(&self) -> bool {
        self.is_empty()
    }
}

impl Default for TrackerStatus {
    fn default() -> Self {
        TrackerStatus::empty()
    }
}

impl Serialize for TrackerStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for TrackerStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(TrackerStatus::from_bits_retain(u32::deserialize(deserializer)?))
    }
}
