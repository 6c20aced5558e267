use serde::{Deserialize, Serialize};
use crate::pinsvc::structs::pin_status::PinStatus;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct PinList {
    pub count: usize,
    pub results: Vec<PinStatus>,
}
