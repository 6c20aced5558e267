//! # pinsvc-bridge
//!
//! A Pinning Services API front-end for a distributed pin-tracking cluster.
//!
//! ## Overview
//!
//! Cluster peers report the state of every pin independently, as a set of tracker
//! status flags. External pinning clients expect one flat status per request. This
//! crate sits between the two: it translates statuses in both directions, folds the
//! per-peer reports into a single pin status, and answers bulk status queries by
//! fanning out concurrent RPC calls to the cluster.
//!
//! ## Features
//!
//! - **Status mapping**: precedence-based translation from tracker flags to the
//!   external `queued` / `pinning` / `pinned` / `failed` enumeration
//! - **Aggregation**: delegates merged across peers, creation time taken from the
//!   oldest peer report
//! - **Batch lookups**: bounded, cancellable fan-out with partial-failure reporting
//! - **Filtering**: name matching strategies, metadata filters, time windows and a
//!   result cap, applied the same way for explicit and full listings
//! - **REST API**: `GET/POST /pins`, `GET/POST/DELETE /pins/{requestid}` on actix-web
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pinsvc_bridge::config::structs::configuration::Configuration;
//! use pinsvc_bridge::rpc::structs::cluster_client::ClusterClient;
//! use pinsvc_bridge::rpc::structs::http_rpc_transport::HttpRpcTransport;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! let transport = HttpRpcTransport::new(&config.cluster_rpc)?;
//! let cluster = ClusterClient::new(Arc::new(transport));
//! ```
//!
//! ## Modules
//!
//! - [`aggregator`] - Pin status lookups, batch fan-out and listing
//! - [`api`] - REST endpoints of the Pinning Services API
//! - [`cluster`] - Cluster-side pin and status types
//! - [`common`] - Logging setup and query-string helpers
//! - [`config`] - Configuration management and TOML parsing
//! - [`mapper`] - Translation between cluster and pinning-service representations
//! - [`pinsvc`] - Pinning Services API types and list options
//! - [`rpc`] - Call-by-name RPC abstraction and the typed cluster client
//! - [`structs`] - CLI argument parsing

/// Pin status lookups for single items, explicit batches and full listings.
///
/// Also orchestrates the add, replace and remove operations on top of the
/// cluster RPC client.
pub mod aggregator;

/// REST API module exposing the Pinning Services API routes.
pub mod api;

/// Cluster-side data model.
///
/// Tracker status flags, per-peer pin information and the global status
/// aggregate returned by the cluster.
pub mod cluster;

/// Common utilities and shared functionality.
pub mod common;

/// Configuration management module.
///
/// Handles loading, validating and generating the TOML configuration file.
pub mod config;

/// Status mapping between the cluster and the pinning service.
pub mod mapper;

/// Pinning Services API data model.
pub mod pinsvc;

/// RPC abstraction used to talk to the cluster.
pub mod rpc;

/// CLI argument parsing.
pub mod structs;
