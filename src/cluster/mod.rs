//! Cluster-side data model.
//!
//! Every cluster peer tracks the pins it is responsible for and reports a
//! [`TrackerStatus`](structs::tracker_status::TrackerStatus) for each of them.
//! A status query returns one [`GlobalPinInfo`](structs::global_pin_info::GlobalPinInfo)
//! per content identifier, holding the pin options and a map of peer reports.
//!
//! These types are produced fresh by the cluster for every query and are never
//! persisted by this crate.

/// Cluster pin enumerations (pin mode).
pub mod enums;

/// Cluster data structures.
pub mod structs;

/// Implementation blocks for cluster types.
pub mod impls;

#[cfg(test)]
mod tests;
