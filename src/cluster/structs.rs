//! Cluster data structures.

/// Decoded content identifier.
pub mod content_id;

/// Per-peer tracker status flag set.
pub mod tracker_status;

/// Status report of a single peer for a single pin.
pub mod pin_info;

/// Status of a pin across the whole cluster.
pub mod global_pin_info;

/// Options attached to a cluster pin.
pub mod pin_options;

/// Pin record as submitted to and returned by the cluster.
pub mod cluster_pin;

/// Peer identity information (network addresses).
pub mod ipfs_id;
