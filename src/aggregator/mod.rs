//! Pin status lookups for single items, explicit batches and full listings.
//!
//! [`PinService`](structs::pin_service::PinService) answers the three kinds of
//! status questions a pinning client can ask and orchestrates the pin, replace
//! and remove operations on top of the [`ClusterClient`](crate::rpc::structs::cluster_client::ClusterClient).
//!
//! # Lookup paths
//!
//! - **Single**: one `Cluster.Status` call, folded by the status mapper.
//! - **Explicit batch**: one `Cluster.Status` call per requested identifier,
//!   run concurrently on a `JoinSet` with at most `status_concurrency` calls in
//!   flight. Results are kept in completion order. Every failure is collected;
//!   failures do not count toward the limit.
//! - **Full listing**: one `Cluster.StatusAll` call pre-filtered by the status
//!   mask, results kept in cluster order.
//!
//! Name, metadata and time window filters apply to both listing paths, and the
//! limit caps the number of results that passed them.
//!
//! # Cancellation
//!
//! Every operation takes the request's `CancellationToken`. A cancelled batch
//! aborts its outstanding tasks and reports [`PinSvcError::Cancelled`](crate::pinsvc::errors::PinSvcError::Cancelled)
//! alongside whatever finished before.

/// Aggregator data structures.
pub mod structs;

/// Implementation blocks for the aggregator.
pub mod impls;
