//! Common utilities and shared functionality.
//!
//! # Utilities
//!
//! - Query string parsing
//! - Logging setup
//!
//! # Example
//!
//! ```rust,ignore
//! use pinsvc_bridge::common::common::parse_query;
//!
//! let params = parse_query("cid=Qm...,bafy...&limit=5")?;
//! ```

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;
