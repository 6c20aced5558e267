use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::Span;
use crate::aggregator::structs::pin_list_outcome::PinListOutcome;
use crate::aggregator::structs::pin_service::PinService;
use crate::cluster::structs::content_id::ContentId;
use crate::cluster::structs::global_pin_info::GlobalPinInfo;
use crate::config::structs::cluster_rpc_config::ClusterRpcConfig;
use crate::mapper::conversions::{global_pin_info_to_svc_pin_status, status_filter_to_tracker_status, svc_pin_to_cluster_pin};
use crate::mapper::structs::status_mapper::StatusMapper;
use crate::pinsvc::errors::PinSvcError;
use crate::pinsvc::structs::batch_errors::BatchErrors;
use crate::pinsvc::structs::list_options::ListOptions;
use crate::pinsvc::structs::pin::Pin;
use crate::pinsvc::structs::pin_status::PinStatus;
use crate::rpc::structs::cluster_client::ClusterClient;

impl PinService {
    pub fn new(cluster: ClusterClient, config: &ClusterRpcConfig, span: Span) -> PinService {
        let mapper_span = tracing::debug_span!(parent: &span, "status_mapper");
        PinService {
            mapper: StatusMapper::new(cluster.clone(), mapper_span),
            cluster,
            status_concurrency: config.status_concurrency.max(1),
            span,
        }
    }

    /// Status of a single pin. RPC errors are returned as they came.
    pub async fn get_pin_status(&self, cancel: &CancellationToken, cid: &ContentId) -> Result<PinStatus, PinSvcError> {
        tracing::debug!(parent: &self.span, "[PINSVC] Status of {}", cid);
        let info = self.cluster.status(cancel, cid).await?;
        Ok(global_pin_info_to_svc_pin_status(&cid.to_string(), &info))
    }

    /// Explicit batch when `options.cids` is set, full listing otherwise.
    pub async fn list_pins(&self, cancel: &CancellationToken, options: &ListOptions) -> PinListOutcome {
        if options.cids.is_empty() {
            self.status_all(cancel, options).await
        } else {
            self.status_batch(cancel, options).await
        }
    }

    /// Looks up every identifier of `options.cids` concurrently.
    ///
    /// Results are appended in completion order. Successful lookups that pass
    /// the filters are kept up to `options.limit`; failed lookups never take a
    /// slot, and every failure ends up in the combined error.
    pub async fn status_batch(&self, cancel: &CancellationToken, options: &ListOptions) -> PinListOutcome {
        let filter = status_filter_to_tracker_status(&options.status);
        let semaphore = Arc::new(Semaphore::new(self.status_concurrency));
        let mut tasks = JoinSet::new();

        for cid in options.cids.iter().copied() {
            let cluster = self.cluster.clone();
            let semaphore = Arc::clone(&semaphore);
            let cancel = cancel.clone();
            tasks.spawn(async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .map_err(|error| PinSvcError::Task(error.to_string()))?;
                let info = cluster
                    .status(&cancel, &cid)
                    .await
                    .map_err(|source| PinSvcError::Lookup { cid: cid.to_string(), source })?;
                Ok::<(ContentId, GlobalPinInfo), PinSvcError>((cid, info))
            });
        }
        tracing::debug!(parent: &self.span, "[PINSVC] Batch status of {} pins", tasks.len());

        let mut results = Vec::new();
        let mut errors = BatchErrors::default();
        loop {
            let joined = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    tasks.abort_all();
                    tracing::debug!(parent: &self.span, "[PINSVC] Batch cancelled with {} results gathered", results.len());
                    errors.push(PinSvcError::Cancelled);
                    return PinListOutcome::new(results, errors.into_error());
                }
                joined = tasks.join_next() => joined,
            };
            let Some(joined) = joined else {
                break;
            };

            match joined {
                Ok(Ok((cid, info))) => {
                    if !filter.is_empty() && !info.combined_status().matches(filter) {
                        continue;
                    }
                    let status = global_pin_info_to_svc_pin_status(&cid.to_string(), &info);
                    if results.len() < options.limit && options.matches(&status) {
                        results.push(status);
                    }
                }
                Ok(Err(error)) => {
                    tracing::debug!(parent: &self.span, "[PINSVC] Batch lookup failed: {}", error);
                    errors.push(error);
                }
                Err(join_error) => errors.push(PinSvcError::Task(join_error.to_string())),
            }
        }

        PinListOutcome::new(results, errors.into_error())
    }

    /// Lists every pin whose status intersects the requested statuses, in the
    /// order the cluster returns them.
    pub async fn status_all(&self, cancel: &CancellationToken, options: &ListOptions) -> PinListOutcome {
        let filter = status_filter_to_tracker_status(&options.status);
        tracing::debug!(parent: &self.span, "[PINSVC] Listing pins with filter {:?}", filter);

        let infos = match self.cluster.status_all(cancel, filter).await {
            Ok(infos) => infos,
            Err(error) => return PinListOutcome::failed(error.into()),
        };

        let results = infos
            .iter()
            .filter(|info| filter.is_empty() || info.combined_status().matches(filter))
            .map(|info| global_pin_info_to_svc_pin_status(&info.cid.to_string(), info))
            .filter(|status| options.matches(status))
            .take(options.limit)
            .collect();
        PinListOutcome::new(results, None)
    }

    /// Pins `pin`, replacing the pin `replaces` when given, and returns the
    /// queued status of the new pin.
    pub async fn add_pin(&self, cancel: &CancellationToken, pin: &Pin, replaces: Option<ContentId>) -> Result<PinStatus, PinSvcError> {
        let cluster_pin = svc_pin_to_cluster_pin(pin, replaces)?;
        match replaces {
            None => tracing::debug!(parent: &self.span, "[PINSVC] Adding pin {}", cluster_pin.cid),
            Some(previous) => tracing::debug!(parent: &self.span, "[PINSVC] Replacing pin {} with {}", previous, cluster_pin.cid),
        }

        let accepted = self.cluster.pin(cancel, &cluster_pin).await?;
        let request_id = accepted.cid.to_string();
        Ok(self.mapper.pin_to_svc_pin_status(cancel, &request_id, &accepted).await)
    }

    /// Unpins `cid`. A pin the cluster does not know maps to [`PinSvcError::NotFound`].
    pub async fn remove_pin(&self, cancel: &CancellationToken, cid: &ContentId) -> Result<(), PinSvcError> {
        tracing::debug!(parent: &self.span, "[PINSVC] Removing pin {}", cid);
        match self.cluster.unpin(cancel, cid).await {
            Ok(_) => Ok(()),
            Err(error) if error.is_not_found() => Err(PinSvcError::NotFound(cid.to_string())),
            Err(error) => Err(error.into()),
        }
    }
}
