//! Pinning Services API data model.
//!
//! Types exchanged with external pinning clients: the flat [`Status`](enums::status::Status)
//! enumeration, pin descriptors, pin statuses and paginated pin lists, plus the
//! [`ListOptions`](structs::list_options::ListOptions) parsed from a list query.
//!
//! # Statuses
//!
//! - `queued` - accepted by the cluster, not yet being fetched
//! - `pinning` - at least one peer is fetching the content
//! - `pinned` - the content is held by the cluster
//! - `failed` - at least one peer reported an error
//!
//! # Name matching
//!
//! - `exact` - names are equal (default)
//! - `iexact` - names are equal ignoring case
//! - `partial` - the filter is a substring of the name
//! - `ipartial` - substring match ignoring case

/// Status and matching strategy enumerations.
pub mod enums;

/// Error types for pinning-service operations.
pub mod errors;

/// Pinning Services API data structures.
pub mod structs;

/// Implementation blocks for pinning-service types.
pub mod impls;
