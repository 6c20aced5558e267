use std::collections::{BTreeMap, BTreeSet};
use crate::cluster::enums::pin_mode::PinMode;
use crate::cluster::structs::cluster_pin::ClusterPin;
use crate::cluster::structs::content_id::ContentId;
use crate::cluster::structs::global_pin_info::GlobalPinInfo;
use crate::cluster::structs::pin_options::PinOptions;
use crate::cluster::structs::tracker_status::TrackerStatus;
use crate::pinsvc::enums::status::Status;
use crate::pinsvc::errors::PinSvcError;
use crate::pinsvc::impls::pin::MAX_PIN_NAME_LENGTH;
use crate::pinsvc::structs::pin::Pin;
use crate::pinsvc::structs::pin_status::PinStatus;

pub const INFO_SOURCE: &str = "IPFS cluster API";
pub const INFO_REQUEST_ID_WARNING: &str = "CID used for requestID. Conflicts possible";
pub const INFO_EXPERIMENTAL_WARNING: &str = "experimental";

/// Picks the representative status of a (possibly folded) flag set.
pub fn tracker_status_to_svc_status(status: TrackerStatus) -> Status {
    if status.matches(TrackerStatus::ERROR) {
        Status::Failed
    } else if status.matches(TrackerStatus::PIN_QUEUED) {
        Status::Queued
    } else if status.matches(TrackerStatus::PINNING) {
        Status::Pinning
    } else if status.matches(TrackerStatus::PINNED) {
        Status::Pinned
    } else {
        Status::Undefined
    }
}

/// Every flag implied by `status`, for use as an existential filter.
pub fn svc_status_to_tracker_status(status: Status) -> TrackerStatus {
    match status {
        Status::Failed => TrackerStatus::ERROR,
        Status::Queued => TrackerStatus::PIN_QUEUED,
        Status::Pinning => TrackerStatus::PINNING,
        Status::Pinned => TrackerStatus::PINNED,
        Status::Undefined => TrackerStatus::empty(),
    }
}

/// Filter mask for a set of requested statuses. The empty set yields the empty
/// mask, which `StatusAll` reads as "no filter".
pub fn status_filter_to_tracker_status(statuses: &BTreeSet<Status>) -> TrackerStatus {
    statuses
        .iter()
        .fold(TrackerStatus::empty(), |mask, status| mask | svc_status_to_tracker_status(*status))
}

/// Builds the cluster pin for a client pin descriptor.
///
/// `pin_update` names the pin being replaced, if any.
pub fn svc_pin_to_cluster_pin(pin: &Pin, pin_update: Option<ContentId>) -> Result<ClusterPin, PinSvcError> {
    if pin.name.chars().count() > MAX_PIN_NAME_LENGTH {
        return Err(PinSvcError::InvalidBody(format!("pin name longer than {} chars", MAX_PIN_NAME_LENGTH)));
    }
    let cid = ContentId::decode(&pin.cid)?;
    let options = PinOptions {
        name: pin.name.clone(),
        mode: PinMode::Recursive,
        origins: pin.origins.clone(),
        metadata: pin.meta.clone(),
        pin_update,
        ..PinOptions::default()
    };
    Ok(ClusterPin::with_options(cid, options))
}

/// Folds a cluster status into the client view.
///
/// `created` is the oldest peer report, or the zero time when no peer has
/// reported yet.
pub fn global_pin_info_to_svc_pin_status(request_id: &str, info: &GlobalPinInfo) -> PinStatus {
    PinStatus {
        request_id: request_id.to_string(),
        status: tracker_status_to_svc_status(info.combined_status()),
        created: info.oldest_timestamp(),
        pin: Pin {
            cid: info.cid.to_string(),
            name: info.name.clone(),
            origins: info.origins.clone(),
            meta: info.metadata.clone(),
        },
        delegates: info.delegates(),
        info: pin_status_info(),
    }
}

/// Annotations attached to every pin status.
pub fn pin_status_info() -> BTreeMap<String, String> {
    BTreeMap::from([
        (String::from("source"), String::from(INFO_SOURCE)),
        (String::from("warning1"), String::from(INFO_REQUEST_ID_WARNING)),
        (String::from("warning2"), String::from(INFO_EXPERIMENTAL_WARNING)),
    ])
}
