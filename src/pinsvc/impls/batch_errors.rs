use std::fmt;
use std::fmt::Formatter;
use crate::pinsvc::errors::PinSvcError;
use crate::pinsvc::structs::batch_errors::BatchErrors;

impl BatchErrors {
    pub fn push(&mut self, error: PinSvcError) {
        self.0.push(error);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Collapses the collected errors into one value: `None` when empty, the
    /// error itself when alone, [`PinSvcError::Multiple`] otherwise.
    pub fn into_error(mut self) -> Option<PinSvcError> {
        match self.0.len() {
            0 => None,
            1 => self.0.pop(),
            _ => Some(PinSvcError::Multiple(self)),
        }
    }
}

impl fmt::Display for BatchErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, error) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}
