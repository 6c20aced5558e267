//! Content identifier naming the data being pinned.

use cid::Cid;

/// A decoded content identifier.
///
/// Wraps a [`Cid`] so it can travel through the cluster RPC payloads and the
/// Pinning Services API as its canonical string form. Both CIDv0 (`Qm...`) and
/// CIDv1 (`bafy...`) are accepted; anything that does not decode is rejected at
/// the boundary before any RPC is issued.
///
/// # Example
///
/// ```rust
/// use pinsvc_bridge::cluster::structs::content_id::ContentId;
///
/// let cid: ContentId = "QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG".parse().unwrap();
/// assert_eq!(cid.to_string(), "QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG");
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct ContentId(pub Cid);
