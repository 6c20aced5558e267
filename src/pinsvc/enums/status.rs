use serde::{Deserialize, Serialize};

/// Status of a pin request as seen by an external client.
///
/// Mutually exclusive: the cluster's multi-flag statuses are reduced to one
/// representative value before they reach this type.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Undefined,
    Queued,
    Pinning,
    Pinned,
    Failed,
}
