//! Implementation blocks for pinning-service types.

pub mod status;

pub mod matching_strategy;

pub mod pin;

pub mod pin_list;

pub mod list_options;

pub mod batch_errors;
