//! REST API module exposing the Pinning Services API.
//!
//! # Endpoints
//!
//! - `GET /pins` - List pin statuses, filtered by query parameters
//! - `POST /pins` - Add a pin
//! - `GET /pins/{requestid}` - Get the status of one pin
//! - `POST /pins/{requestid}` - Replace a pin with a new one
//! - `DELETE /pins/{requestid}` - Remove a pin
//!
//! The request identifier is the content identifier of the pin.
//!
//! # Status codes
//!
//! | Outcome | Status |
//! |---------|--------|
//! | list, get | 200 |
//! | add, replace, remove | 202 |
//! | malformed identifier, query or body | 400 |
//! | unknown pin on get or remove | 404 |
//! | cluster or batch failure | 500 |
//! | request cancelled | 503 |
//!
//! Errors are returned as `{"error": {"reason": ..., "details": ...}}`.

/// Data structures for API service context.
pub mod structs;

/// Core API service functions and route configuration.
#[allow(clippy::module_inception)]
pub mod api;

/// Pin endpoints.
pub mod api_pins;
