//! Status mapper data structures.

/// Builder of pin statuses for newly created pins.
pub mod status_mapper;
