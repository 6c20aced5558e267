use crate::aggregator::structs::pin_list_outcome::PinListOutcome;
use crate::pinsvc::errors::PinSvcError;
use crate::pinsvc::structs::pin_list::PinList;
use crate::pinsvc::structs::pin_status::PinStatus;

impl PinListOutcome {
    pub fn new(results: Vec<PinStatus>, error: Option<PinSvcError>) -> PinListOutcome {
        PinListOutcome {
            pin_list: PinList::new(results),
            error,
        }
    }

    pub fn failed(error: PinSvcError) -> PinListOutcome {
        PinListOutcome::new(Vec::new(), Some(error))
    }

    /// Drops the partial results when an error was recorded.
    pub fn into_result(self) -> Result<PinList, PinSvcError> {
        match self.error {
            None => Ok(self.pin_list),
            Some(error) => Err(error),
        }
    }
}
