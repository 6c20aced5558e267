//! Status mapping between the cluster and the pinning service.
//!
//! Cluster peers report a [`TrackerStatus`](crate::cluster::structs::tracker_status::TrackerStatus)
//! flag set each; pinning clients see one [`Status`](crate::pinsvc::enums::status::Status).
//!
//! # Precedence
//!
//! When statuses from several peers are folded together, more than one flag can
//! be set. The representative status is picked in this order:
//!
//! | Flag set contains | Status |
//! |-------------------|--------|
//! | any error flag | `failed` |
//! | `PIN_QUEUED` | `queued` |
//! | `PINNING` | `pinning` |
//! | `PINNED` | `pinned` |
//! | none of the above | undefined |
//!
//! The reverse direction is only used to build `StatusAll` filters and is not an
//! inverse: `failed` expands to every error flag.
//!
//! The pure conversions live in [`conversions`]. [`StatusMapper`](structs::status_mapper::StatusMapper)
//! builds the status of a freshly created pin, which needs RPC lookups for the
//! delegate addresses.

/// Pure conversions between cluster and pinning-service types.
pub mod conversions;

/// Status mapper data structures.
pub mod structs;

/// Implementation blocks for the status mapper.
pub mod impls;
