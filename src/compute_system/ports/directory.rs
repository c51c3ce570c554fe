//! Provider-directory port.

use super::ComputeSystemProvider;
use crate::compute_system::domain::DeveloperId;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Result type for provider-directory operations.
pub type ProviderDirectoryResult<T> = Result<T, ProviderDirectoryError>;

/// A discovered provider and the identities it should be queried with.
#[derive(Clone)]
pub struct ProviderEntry {
    provider: Arc<dyn ComputeSystemProvider>,
    developer_ids: Vec<DeveloperId>,
}

impl ProviderEntry {
    /// Pairs a provider with its identities, in query order.
    #[must_use]
    pub fn new(
        provider: Arc<dyn ComputeSystemProvider>,
        developer_ids: impl IntoIterator<Item = DeveloperId>,
    ) -> Self {
        Self {
            provider,
            developer_ids: developer_ids.into_iter().collect(),
        }
    }

    /// Returns the provider.
    #[must_use]
    pub fn provider(&self) -> &Arc<dyn ComputeSystemProvider> {
        &self.provider
    }

    /// Returns the identities in query order.
    #[must_use]
    pub fn developer_ids(&self) -> &[DeveloperId] {
        &self.developer_ids
    }

    /// Splits the entry into its provider and identities.
    #[must_use]
    pub fn into_parts(self) -> (Arc<dyn ComputeSystemProvider>, Vec<DeveloperId>) {
        (self.provider, self.developer_ids)
    }
}

impl fmt::Debug for ProviderEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderEntry")
            .field("provider", self.provider.descriptor().id())
            .field("developer_ids", &self.developer_ids)
            .finish()
    }
}

/// Discovery contract for compute-system providers.
#[async_trait]
pub trait ProviderDirectory: Send + Sync {
    /// Returns every enabled provider with its identities.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderDirectoryError`] when discovery fails.
    async fn get_providers(&self) -> ProviderDirectoryResult<Vec<ProviderEntry>>;
}

/// Errors returned by provider-directory implementations.
#[derive(Debug, Clone, Error)]
pub enum ProviderDirectoryError {
    /// Extension activation failed for a provider.
    #[error("failed to activate provider extension {extension}: {reason}")]
    Activation {
        /// Extension name.
        extension: String,
        /// Reason string.
        reason: String,
    },

    /// Any other discovery failure.
    #[error("provider discovery failed: {0}")]
    Discovery(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProviderDirectoryError {
    /// Wraps an arbitrary discovery failure.
    pub fn discovery(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Discovery(Arc::new(err))
    }
}
