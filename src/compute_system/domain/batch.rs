//! Per-provider result batch.

use super::{ComputeSystem, ComputeSystemsResult, DeveloperId, ProviderDescriptor};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// The result a provider returned for one identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityResult {
    developer_id: DeveloperId,
    result: ComputeSystemsResult,
}

impl IdentityResult {
    /// Pairs an identity with its result.
    #[must_use]
    pub const fn new(developer_id: DeveloperId, result: ComputeSystemsResult) -> Self {
        Self {
            developer_id,
            result,
        }
    }

    /// Returns the identity that was queried.
    #[must_use]
    pub const fn developer_id(&self) -> &DeveloperId {
        &self.developer_id
    }

    /// Returns the provider's result.
    #[must_use]
    pub const fn result(&self) -> &ComputeSystemsResult {
        &self.result
    }
}

/// One provider's results for every identity it was queried with.
///
/// Results keep the order in which identities were submitted. A batch is
/// built once per provider per load and handed to the sink by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputeSystemsLoadedData {
    provider: ProviderDescriptor,
    results: Vec<IdentityResult>,
    loaded_at: DateTime<Utc>,
}

impl ComputeSystemsLoadedData {
    /// Creates a batch stamped with the current clock time.
    #[must_use]
    pub fn new(
        provider: ProviderDescriptor,
        results: Vec<IdentityResult>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            provider,
            results,
            loaded_at: clock.utc(),
        }
    }

    /// Returns the owning provider.
    #[must_use]
    pub const fn provider(&self) -> &ProviderDescriptor {
        &self.provider
    }

    /// Returns the per-identity results in submission order.
    #[must_use]
    pub fn results(&self) -> &[IdentityResult] {
        &self.results
    }

    /// Returns when the batch was assembled.
    #[must_use]
    pub const fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Returns the number of identities in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns whether the batch has no results.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Iterates over every compute system from successful results.
    pub fn compute_systems(&self) -> impl Iterator<Item = &ComputeSystem> {
        self.results
            .iter()
            .flat_map(|entry| entry.result().compute_systems())
    }
}
