//! Aggregator data structures.

/// Status lookups and pin orchestration.
pub mod pin_service;

/// A pin list together with the error raised while building it.
pub mod pin_list_outcome;
