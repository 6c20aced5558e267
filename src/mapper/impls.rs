//! Implementation blocks for the status mapper.

pub mod status_mapper;
