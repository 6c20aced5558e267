use std::collections::BTreeMap;
use chrono::Utc;
use crate::cluster::enums::pin_mode::PinMode;
use crate::cluster::structs::cluster_pin::ClusterPin;
use crate::cluster::structs::content_id::ContentId;
use crate::cluster::structs::pin_options::PinOptions;

impl PinOptions {
    pub(crate) fn default_replication() -> i32 {
        -1
    }
}

impl Default for PinOptions {
    fn default() -> Self {
        PinOptions {
            name: String::new(),
            mode: PinMode::Recursive,
            replication_factor_min: PinOptions::default_replication(),
            replication_factor_max: PinOptions::default_replication(),
            origins: Vec::new(),
            metadata: BTreeMap::new(),
            pin_update: None,
        }
    }
}

impl ClusterPin {
    /// A pin carrying only its content identifier, as used for unpin requests.
    pub fn new(cid: ContentId) -> ClusterPin {
        ClusterPin::with_options(cid, PinOptions::default())
    }

    pub fn with_options(cid: ContentId, options: PinOptions) -> ClusterPin {
        ClusterPin {
            cid,
            options,
            allocations: Vec::new(),
            timestamp: Utc::now(),
        }
    }

    pub fn is_pin_everywhere(&self) -> bool {
        self.options.replication_factor_min == -1 && self.options.replication_factor_max == -1
    }
}
