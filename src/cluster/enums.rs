//! Enumerations for cluster pins.

/// Pin mode requested from the cluster:
/// - `Recursive` - pin the DAG and every block below it
/// - `Direct` - pin the root block only
pub mod pin_mode;
