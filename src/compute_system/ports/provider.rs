//! Query port implemented by each compute-system provider.

use crate::compute_system::domain::{ComputeSystemsResult, DeveloperId, ProviderDescriptor};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for provider queries.
pub type ProviderQueryResult<T> = Result<T, ProviderQueryError>;

/// Compute-system enumeration contract for a single provider.
///
/// Calls may be slow and may fail. An `Err` means the call itself broke;
/// a provider that merely has nothing to report returns
/// [`ComputeSystemsResult::Failure`] instead.
#[async_trait]
pub trait ComputeSystemProvider: Send + Sync {
    /// Returns the provider's immutable descriptor.
    fn descriptor(&self) -> &ProviderDescriptor;

    /// Enumerates the compute systems visible to an identity.
    ///
    /// `developer_id` is `None` for providers that do not scope by account.
    /// `options` is passed through verbatim from the manager configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderQueryError`] when the provider call fails.
    async fn get_compute_systems(
        &self,
        developer_id: Option<&DeveloperId>,
        options: &str,
    ) -> ProviderQueryResult<ComputeSystemsResult>;
}

/// Errors escaping a provider call.
#[derive(Debug, Clone, Error)]
pub enum ProviderQueryError {
    /// The provider rejected an argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The provider could not be reached.
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    /// Any other provider failure.
    #[error("provider call failed: {0}")]
    Call(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProviderQueryError {
    /// Wraps an arbitrary provider failure.
    pub fn call(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Call(Arc::new(err))
    }
}
