use crate::pinsvc::errors::PinSvcError;

/// Every error raised by the lookups of one explicit batch, in arrival order.
///
/// Displayed as the member messages joined with `"; "`.
#[derive(Debug, Default)]
pub struct BatchErrors(pub Vec<PinSvcError>);
