use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchingStrategy {
    #[default]
    Exact,
    Iexact,
    Partial,
    Ipartial,
}
