use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PinSvcConfig {
    pub default_limit: usize,
    pub max_limit: usize,
}

impl Default for PinSvcConfig {
    fn default() -> Self {
        PinSvcConfig {
            default_limit: 10,
            max_limit: 1000,
        }
    }
}
