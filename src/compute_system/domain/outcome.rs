//! Explicit outcomes of a compute-system load.
//!
//! Every provider ends a load with exactly one [`ProviderLoadOutcome`]. The
//! manager logs failures, but callers and tests read them from the
//! [`LoadReport`] instead of parsing logs.

use super::{DeveloperId, LoadId, ProviderDescriptor, ProviderId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a single provider's part of a load ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ProviderLoadOutcome {
    /// Every identity was queried and the batch reached the sink.
    Delivered {
        /// Number of identity results in the delivered batch.
        identities: usize,
    },
    /// A provider call returned an error; the batch was not delivered.
    QueryFailed {
        /// Zero-based index of the identity whose query failed.
        failed_at: usize,
        /// The identity whose query failed.
        developer_id: DeveloperId,
        /// Error text reported by the provider.
        reason: String,
    },
    /// The batch was built but the sink rejected it.
    DeliveryFailed {
        /// Error text reported by the sink.
        reason: String,
    },
    /// The deadline elapsed before the provider finished.
    Cancelled {
        /// Identities whose results had been collected, then discarded.
        completed: usize,
    },
    /// The provider task panicked.
    Aborted {
        /// Panic or join error text.
        reason: String,
    },
}

impl ProviderLoadOutcome {
    /// Returns whether the provider's batch reached the sink.
    #[must_use]
    pub const fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered { .. })
    }

    /// Returns whether the provider was cut off by the deadline.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }

    /// Returns a short label for log fields.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Delivered { .. } => "delivered",
            Self::QueryFailed { .. } => "query_failed",
            Self::DeliveryFailed { .. } => "delivery_failed",
            Self::Cancelled { .. } => "cancelled",
            Self::Aborted { .. } => "aborted",
        }
    }
}

/// A provider paired with how its part of the load ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderLoadReport {
    provider: ProviderDescriptor,
    outcome: ProviderLoadOutcome,
}

impl ProviderLoadReport {
    /// Creates a provider report.
    #[must_use]
    pub const fn new(provider: ProviderDescriptor, outcome: ProviderLoadOutcome) -> Self {
        Self { provider, outcome }
    }

    /// Returns the provider.
    #[must_use]
    pub const fn provider(&self) -> &ProviderDescriptor {
        &self.provider
    }

    /// Returns the outcome.
    #[must_use]
    pub const fn outcome(&self) -> &ProviderLoadOutcome {
        &self.outcome
    }
}

/// Summary of one `get_compute_systems` invocation.
///
/// Provider reports are listed in completion order, which is not the
/// discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    load_id: LoadId,
    started_at: DateTime<Utc>,
    finished_at: DateTime<Utc>,
    deadline_elapsed: bool,
    discovery_error: Option<String>,
    providers: Vec<ProviderLoadReport>,
}

impl LoadReport {
    /// Creates a report.
    #[must_use]
    pub const fn new(
        load_id: LoadId,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
        deadline_elapsed: bool,
        discovery_error: Option<String>,
        providers: Vec<ProviderLoadReport>,
    ) -> Self {
        Self {
            load_id,
            started_at,
            finished_at,
            deadline_elapsed,
            discovery_error,
            providers,
        }
    }

    /// Returns the invocation identifier.
    #[must_use]
    pub const fn load_id(&self) -> LoadId {
        self.load_id
    }

    /// Returns when the load started.
    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Returns when the load finished.
    #[must_use]
    pub const fn finished_at(&self) -> DateTime<Utc> {
        self.finished_at
    }

    /// Returns whether the deadline cancelled outstanding work.
    #[must_use]
    pub const fn deadline_elapsed(&self) -> bool {
        self.deadline_elapsed
    }

    /// Returns the provider-directory failure, if discovery failed.
    #[must_use]
    pub fn discovery_error(&self) -> Option<&str> {
        self.discovery_error.as_deref()
    }

    /// Returns per-provider reports in completion order.
    #[must_use]
    pub fn providers(&self) -> &[ProviderLoadReport] {
        &self.providers
    }

    /// Returns the outcome recorded for a provider.
    #[must_use]
    pub fn outcome_for(&self, provider_id: &ProviderId) -> Option<&ProviderLoadOutcome> {
        self.providers
            .iter()
            .find(|report| report.provider().id() == provider_id)
            .map(ProviderLoadReport::outcome)
    }

    /// Returns how many providers delivered a batch.
    #[must_use]
    pub fn delivered_count(&self) -> usize {
        self.count_where(ProviderLoadOutcome::is_delivered)
    }

    /// Returns how many providers were cut off by the deadline.
    #[must_use]
    pub fn cancelled_count(&self) -> usize {
        self.count_where(ProviderLoadOutcome::is_cancelled)
    }

    /// Returns how many providers failed for reasons other than the deadline.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.count_where(|outcome| !outcome.is_delivered() && !outcome.is_cancelled())
    }

    fn count_where(&self, predicate: impl Fn(&ProviderLoadOutcome) -> bool) -> usize {
        self.providers
            .iter()
            .filter(|report| predicate(report.outcome()))
            .count()
    }
}
