use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;
use crate::pinsvc::enums::status::Status;

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Undefined => "undefined",
            Status::Queued => "queued",
            Status::Pinning => "pinning",
            Status::Pinned => "pinned",
            Status::Failed => "failed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parses one status filter token. `undefined` is not a valid filter.
impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "queued" => Ok(Status::Queued),
            "pinning" => Ok(Status::Pinning),
            "pinned" => Ok(Status::Pinned),
            "failed" => Ok(Status::Failed),
            _ => Err(format!("unknown status '{}'", s)),
        }
    }
}
