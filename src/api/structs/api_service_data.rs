//! Shared data context for API request handlers.

use std::sync::Arc;
use tracing::Span;
use crate::aggregator::structs::pin_service::PinService;
use crate::config::structs::pinsvc_config::PinSvcConfig;

/// Shared application data available to all API request handlers.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(data: Data<Arc<ApiServiceData>>) -> HttpResponse {
///     let options = ListOptions::new(&data.pinsvc_config);
///     let outcome = data.pin_service.list_pins(&cancel, &options).await;
///     // ...
/// }
/// ```
#[derive(Debug)]
pub struct ApiServiceData {
    /// Pin status lookups and pin orchestration.
    pub pin_service: Arc<PinService>,

    /// Limits applied when parsing list queries.
    pub pinsvc_config: Arc<PinSvcConfig>,

    /// Parent span of the events emitted by the handlers.
    pub span: Span,
}
