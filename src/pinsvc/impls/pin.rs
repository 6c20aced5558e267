use std::collections::BTreeMap;
use crate::pinsvc::enums::matching_strategy::MatchingStrategy;
use crate::pinsvc::structs::pin::Pin;

/// Longest pin name accepted by the Pinning Services API.
pub const MAX_PIN_NAME_LENGTH: usize = 255;

impl Pin {
    pub fn matches_name(&self, filter: &str, strategy: MatchingStrategy) -> bool {
        strategy.matches(&self.name, filter)
    }

    /// Every filter key must be present with an equal value.
    pub fn matches_meta(&self, filter: &BTreeMap<String, String>) -> bool {
        filter
            .iter()
            .all(|(key, value)| self.meta.get(key) == Some(value))
    }
}
