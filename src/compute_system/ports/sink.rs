//! Sink port receiving per-provider batches.

use crate::compute_system::domain::ComputeSystemsLoadedData;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for sink deliveries.
pub type SinkResult<T> = Result<T, SinkError>;

/// Consumer of per-provider batches, typically a UI collection.
///
/// Batches arrive as providers finish, in no particular provider order.
/// The manager awaits each delivery before the providing task completes.
#[async_trait]
pub trait LoadedDataSink: Send + Sync {
    /// Consumes one provider's batch.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError`] when the batch cannot be consumed. The failure
    /// is recorded against the provider; other providers are unaffected.
    async fn deliver(&self, batch: ComputeSystemsLoadedData) -> SinkResult<()>;
}

/// Errors returned by sink implementations.
#[derive(Debug, Clone, Error)]
pub enum SinkError {
    /// The consumer has gone away.
    #[error("sink is closed")]
    Closed,

    /// Any other consumer failure.
    #[error("sink rejected batch: {0}")]
    Rejected(Arc<dyn std::error::Error + Send + Sync>),
}

impl SinkError {
    /// Wraps an arbitrary consumer failure.
    pub fn rejected(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Rejected(Arc::new(err))
    }
}
