use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;
use crate::pinsvc::enums::matching_strategy::MatchingStrategy;

impl MatchingStrategy {
    /// Returns true when `name` passes `filter` under this strategy.
    ///
    /// An empty filter matches every name.
    pub fn matches(&self, name: &str, filter: &str) -> bool {
        if filter.is_empty() {
            return true;
        }
        match self {
            MatchingStrategy::Exact => name == filter,
            MatchingStrategy::Iexact => name.to_lowercase() == filter.to_lowercase(),
            MatchingStrategy::Partial => name.contains(filter),
            MatchingStrategy::Ipartial => name.to_lowercase().contains(&filter.to_lowercase()),
        }
    }
}

impl fmt::Display for MatchingStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MatchingStrategy::Exact => write!(f, "exact"),
            MatchingStrategy::Iexact => write!(f, "iexact"),
            MatchingStrategy::Partial => write!(f, "partial"),
            MatchingStrategy::Ipartial => write!(f, "ipartial"),
        }
    }
}

impl FromStr for MatchingStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exact" => Ok(MatchingStrategy::Exact),
            "iexact" => Ok(MatchingStrategy::Iexact),
            "partial" => Ok(MatchingStrategy::Partial),
            "ipartial" => Ok(MatchingStrategy::Ipartial),
            _ => Err(format!("unknown matching strategy '{}'", s)),
        }
    }
}
