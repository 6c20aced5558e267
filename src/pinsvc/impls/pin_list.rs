use crate::pinsvc::structs::pin_list::PinList;
use crate::pinsvc::structs::pin_status::PinStatus;

impl PinList {
    pub fn new(results: Vec<PinStatus>) -> PinList {
        PinList {
            count: results.len(),
            results,
        }
    }
}
