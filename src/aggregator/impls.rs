//! Implementation blocks for the aggregator.

pub mod pin_service;

pub mod pin_list_outcome;
