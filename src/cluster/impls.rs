//! Implementation blocks for cluster types.

pub mod content_id;

pub mod tracker_status;

pub mod global_pin_info;

pub mod cluster_pin;
