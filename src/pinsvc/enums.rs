//! Pinning Services API enumerations.

/// External pin status (`queued`, `pinning`, `pinned`, `failed`).
pub mod status;

/// Name matching strategy of list queries.
pub mod matching_strategy;
