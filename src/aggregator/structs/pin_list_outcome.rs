use crate::pinsvc::errors::PinSvcError;
use crate::pinsvc::structs::pin_list::PinList;

/// Result of a listing: the pins gathered and, separately, the combined error.
///
/// A batch with failed lookups still carries the successful results; the caller
/// decides whether they are worth returning.
#[derive(Debug, Default)]
pub struct PinListOutcome {
    pub pin_list: PinList,
    pub error: Option<PinSvcError>,
}
