//! Service layer for loading compute systems from every provider.
//!
//! Provides [`ComputeSystemManager`], which fans provider queries out in
//! parallel under a single deadline and streams one batch per provider to
//! a [`LoadedDataSink`].

use super::ManagerConfig;
use crate::compute_system::{
    domain::{
        ComputeSystemsLoadedData, DeveloperId, IdentityResult, LoadId, LoadReport,
        ProviderDescriptor, ProviderLoadOutcome, ProviderLoadReport,
    },
    ports::{ComputeSystemProvider, LoadedDataSink, ProviderDirectory, ProviderEntry},
};
use mockable::Clock;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::{Id as TaskId, JoinError, JoinSet};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, debug, error, info, warn};

/// Compute-system aggregation service.
///
/// Each call to [`ComputeSystemManager::get_compute_systems`] is independent:
/// the manager holds no state between loads beyond its collaborators and
/// configuration.
#[derive(Clone)]
pub struct ComputeSystemManager<D, C>
where
    D: ProviderDirectory,
    C: Clock + Send + Sync + 'static,
{
    directory: Arc<D>,
    clock: Arc<C>,
    config: ManagerConfig,
}

impl<D, C> ComputeSystemManager<D, C>
where
    D: ProviderDirectory,
    C: Clock + Send + Sync + 'static,
{
    /// Creates a manager with the default configuration.
    #[must_use]
    pub fn new(directory: Arc<D>, clock: Arc<C>) -> Self {
        Self::with_config(directory, clock, ManagerConfig::default())
    }

    /// Creates a manager with a custom configuration.
    #[must_use]
    pub const fn with_config(directory: Arc<D>, clock: Arc<C>, config: ManagerConfig) -> Self {
        Self {
            directory,
            clock,
            config,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &ManagerConfig {
        &self.config
    }

    /// Loads compute systems from every provider and streams them to `sink`.
    ///
    /// Providers are queried concurrently; each provider's identities are
    /// queried one at a time in submission order. When all of a provider's
    /// identities have answered, its batch is delivered to the sink. A
    /// provider whose call fails delivers nothing. Work still outstanding
    /// when the configured deadline elapses is cancelled and discarded.
    ///
    /// Failures never escape: they are logged and recorded in the returned
    /// [`LoadReport`].
    pub async fn get_compute_systems<S>(&self, sink: Arc<S>) -> LoadReport
    where
        S: LoadedDataSink + 'static,
    {
        let load_id = LoadId::new();
        let span = tracing::info_span!("get_compute_systems", %load_id);
        self.load(load_id, sink).instrument(span).await
    }

    async fn load<S>(&self, load_id: LoadId, sink: Arc<S>) -> LoadReport
    where
        S: LoadedDataSink + 'static,
    {
        let started_at = self.clock.utc();
        let deadline = load_deadline(Instant::now(), self.config.deadline);

        let entries =
            match tokio::time::timeout_at(deadline, self.directory.get_providers()).await {
                Ok(Ok(entries)) => entries,
                Ok(Err(err)) => {
                    error!(error = %err, "failed to discover compute system providers");
                    let discovery_error = Some(err.to_string());
                    return self.finish(load_id, started_at, false, discovery_error, Vec::new());
                }
                Err(_) => {
                    error!(
                        category = "cancellation",
                        deadline_ms = self.deadline_millis(),
                        "provider discovery did not finish before the load deadline"
                    );
                    return self.finish(
                        load_id,
                        started_at,
                        true,
                        Some("provider discovery cancelled by deadline".to_owned()),
                        Vec::new(),
                    );
                }
            };

        debug!(providers = entries.len(), "discovered compute system providers");

        let token = CancellationToken::new();
        let mut tasks = JoinSet::new();
        let mut in_flight: HashMap<TaskId, ProviderDescriptor> = HashMap::new();

        for entry in entries {
            let task = ProviderTask::new(
                entry,
                self.config.query_options.clone(),
                Arc::clone(&sink),
                Arc::clone(&self.clock),
                token.clone(),
            );
            let descriptor = task.descriptor.clone();
            let handle = tasks.spawn(task.run().in_current_span());
            in_flight.insert(handle.id(), descriptor);
        }

        let expiry = tokio::time::sleep_until(deadline);
        tokio::pin!(expiry);
        let mut deadline_elapsed = false;
        let mut reports = Vec::with_capacity(in_flight.len());

        loop {
            tokio::select! {
                next = tasks.join_next() => {
                    let Some(joined) = next else { break };
                    if let Some(report) = record_outcome(joined, &in_flight) {
                        reports.push(report);
                    }
                }
                () = &mut expiry, if !deadline_elapsed => {
                    deadline_elapsed = true;
                    token.cancel();
                    error!(
                        category = "cancellation",
                        deadline_ms = self.deadline_millis(),
                        outstanding = tasks.len(),
                        "failed to retrieve all compute systems from all providers due to cancellation"
                    );
                }
            }
        }

        self.finish(load_id, started_at, deadline_elapsed, None, reports)
    }

    fn finish(
        &self,
        load_id: LoadId,
        started_at: chrono::DateTime<chrono::Utc>,
        deadline_elapsed: bool,
        discovery_error: Option<String>,
        reports: Vec<ProviderLoadReport>,
    ) -> LoadReport {
        let report = LoadReport::new(
            load_id,
            started_at,
            self.clock.utc(),
            deadline_elapsed,
            discovery_error,
            reports,
        );
        info!(
            delivered = report.delivered_count(),
            failed = report.failed_count(),
            cancelled = report.cancelled_count(),
            deadline_elapsed,
            "finished loading compute systems"
        );
        report
    }

    fn deadline_millis(&self) -> u128 {
        self.config.deadline.as_millis()
    }
}

/// Horizon used when the configured deadline overflows the clock.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// Resolves the instant at which a load started at `start` is cut off.
///
/// Budgets too large to represent, such as `Duration::MAX`, saturate to a
/// horizon decades away.
fn load_deadline(start: Instant, budget: Duration) -> Instant {
    start
        .checked_add(budget)
        .or_else(|| start.checked_add(FAR_FUTURE))
        .unwrap_or(start)
}

/// Converts a joined provider task into a report, logging failures.
fn record_outcome(
    joined: Result<(ProviderDescriptor, ProviderLoadOutcome), JoinError>,
    in_flight: &HashMap<TaskId, ProviderDescriptor>,
) -> Option<ProviderLoadReport> {
    let (descriptor, outcome) = match joined {
        Ok(finished) => finished,
        Err(join_error) => {
            let Some(descriptor) = in_flight.get(&join_error.id()).cloned() else {
                error!(error = %join_error, "provider task failed and could not be attributed");
                return None;
            };
            let outcome = ProviderLoadOutcome::Aborted {
                reason: join_error.to_string(),
            };
            (descriptor, outcome)
        }
    };

    let provider = descriptor.id();
    match &outcome {
        ProviderLoadOutcome::Delivered { identities } => {
            debug!(%provider, identities, "delivered compute systems batch");
        }
        ProviderLoadOutcome::QueryFailed {
            failed_at,
            developer_id,
            reason,
        } => {
            error!(
                %provider,
                developer = %developer_id,
                failed_at,
                error = %reason,
                "failed to retrieve compute systems from provider"
            );
        }
        ProviderLoadOutcome::DeliveryFailed { reason } => {
            warn!(%provider, error = %reason, "compute systems batch was not accepted");
        }
        ProviderLoadOutcome::Cancelled { completed } => {
            debug!(%provider, completed, "provider load cancelled by deadline");
        }
        ProviderLoadOutcome::Aborted { reason } => {
            error!(%provider, error = %reason, "provider task aborted");
        }
    }

    Some(ProviderLoadReport::new(descriptor, outcome))
}

/// Work item for one provider: sequential identity queries, then delivery.
///
/// Every await point races against the shared cancellation token, so a
/// cancelled task stops at its next suspension and drops any in-flight
/// provider call.
struct ProviderTask<S, C> {
    descriptor: ProviderDescriptor,
    provider: Arc<dyn ComputeSystemProvider>,
    developer_ids: Vec<DeveloperId>,
    options: String,
    sink: Arc<S>,
    clock: Arc<C>,
    token: CancellationToken,
}

impl<S, C> ProviderTask<S, C>
where
    S: LoadedDataSink + 'static,
    C: Clock + Send + Sync + 'static,
{
    fn new(
        entry: ProviderEntry,
        options: String,
        sink: Arc<S>,
        clock: Arc<C>,
        token: CancellationToken,
    ) -> Self {
        let (provider, developer_ids) = entry.into_parts();
        Self {
            descriptor: provider.descriptor().clone(),
            provider,
            developer_ids,
            options,
            sink,
            clock,
            token,
        }
    }

    async fn run(self) -> (ProviderDescriptor, ProviderLoadOutcome) {
        let Self {
            descriptor,
            provider,
            developer_ids,
            options,
            sink,
            clock,
            token,
        } = self;

        let mut results = Vec::with_capacity(developer_ids.len());
        for (index, developer_id) in developer_ids.into_iter().enumerate() {
            let queried = tokio::select! {
                biased;
                () = token.cancelled() => {
                    let outcome = ProviderLoadOutcome::Cancelled { completed: results.len() };
                    return (descriptor, outcome);
                }
                answer = provider.get_compute_systems(Some(&developer_id), &options) => answer,
            };

            match queried {
                Ok(result) => results.push(IdentityResult::new(developer_id, result)),
                Err(err) => {
                    let outcome = ProviderLoadOutcome::QueryFailed {
                        failed_at: index,
                        developer_id,
                        reason: err.to_string(),
                    };
                    return (descriptor, outcome);
                }
            }
        }

        let batch = ComputeSystemsLoadedData::new(descriptor.clone(), results, &*clock);
        let identities = batch.len();
        let outcome = tokio::select! {
            biased;
            () = token.cancelled() => ProviderLoadOutcome::Cancelled { completed: identities },
            delivered = sink.deliver(batch) => match delivered {
                Ok(()) => ProviderLoadOutcome::Delivered { identities },
                Err(err) => ProviderLoadOutcome::DeliveryFailed { reason: err.to_string() },
            },
        };
        (descriptor, outcome)
    }
}
