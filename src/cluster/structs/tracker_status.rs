//! Tracker status flags reported by cluster peers.

use bitflags::bitflags;

bitflags! {
    /// Pin lifecycle flags of the cluster pin tracker.
    ///
    /// A single peer normally reports one flag. Statuses folded across several
    /// peers, and filters built from client requests, can carry several flags at
    /// once. The empty set is the undefined status.
    ///
    /// `ERROR` and `QUEUED` are composite flags: they cover every error kind and
    /// both queue directions respectively.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TrackerStatus: u32 {
        /// The peer could not reach the cluster or its IPFS daemon.
        const CLUSTER_ERROR = 1 << 1;
        /// Pinning failed on the peer.
        const PIN_ERROR = 1 << 2;
        /// Unpinning failed on the peer.
        const UNPIN_ERROR = 1 << 3;
        /// Any of the error flags.
        const ERROR = Self::CLUSTER_ERROR.bits() | Self::PIN_ERROR.bits() | Self::UNPIN_ERROR.bits();
        /// The peer holds the content.
        const PINNED = 1 << 4;
        /// The peer is fetching the content.
        const PINNING = 1 << 5;
        const UNPINNING = 1 << 6;
        const UNPINNED = 1 << 7;
        /// The pin is allocated to other peers.
        const REMOTE = 1 << 8;
        /// The peer accepted the pin but has not started fetching it.
        const PIN_QUEUED = 1 << 9;
        const UNPIN_QUEUED = 1 << 10;
        /// Either queue direction.
        const QUEUED = Self::PIN_QUEUED.bits() | Self::UNPIN_QUEUED.bits();
        const SHARDED = 1 << 11;
        const UNEXPECTEDLY_UNPINNED = 1 << 12;
    }
}
