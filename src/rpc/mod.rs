//! RPC abstraction used to talk to the cluster.
//!
//! Cluster operations are invoked by service and method name through an
//! [`RpcTransport`](traits::rpc_transport::RpcTransport). The transport only
//! moves JSON envelopes; [`ClusterClient`](structs::cluster_client::ClusterClient)
//! gives each consumed operation a typed signature.
//!
//! # Consumed operations
//!
//! | Service | Method | Argument | Result |
//! |---------|--------|----------|--------|
//! | `Cluster` | `Pin` | `ClusterPin` | `ClusterPin` |
//! | `Cluster` | `Unpin` | `ClusterPin` | `ClusterPin` |
//! | `Cluster` | `Status` | `ContentId` | `GlobalPinInfo` |
//! | `Cluster` | `StatusAll` | `TrackerStatus` | `Vec<GlobalPinInfo>` |
//! | `Cluster` | `IPFSID` | peer id | `IpfsId` |
//! | `Consensus` | `Peers` | none | `Vec<String>` |
//!
//! Every call takes the caller's cancellation token. Calls are not retried;
//! errors are surfaced as returned by the transport.

/// RPC error enumeration.
pub mod enums;

/// Request/response envelopes, the typed client and the HTTP transport.
pub mod structs;

/// Implementation blocks for RPC types.
pub mod impls;

/// Transport trait.
pub mod traits;
