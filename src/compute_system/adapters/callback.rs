//! Closure-backed batch sink.

use crate::compute_system::{
    domain::ComputeSystemsLoadedData,
    ports::{LoadedDataSink, SinkResult},
};
use async_trait::async_trait;
use std::fmt;
use std::future::Future;

/// Sink that forwards each batch to an async callback.
///
/// # Examples
///
/// ```
/// use devhome_environments::compute_system::{
///     adapters::CallbackSink, domain::ComputeSystemsLoadedData, ports::SinkError,
/// };
///
/// let sink = CallbackSink::new(|batch: ComputeSystemsLoadedData| async move {
///     let _ = batch.len();
///     Ok::<(), SinkError>(())
/// });
/// # let _ = sink;
/// ```
pub struct CallbackSink<F> {
    callback: F,
}

impl<F> CallbackSink<F> {
    /// Wraps a callback.
    #[must_use]
    pub const fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> fmt::Debug for CallbackSink<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackSink").finish_non_exhaustive()
    }
}

#[async_trait]
impl<F, Fut> LoadedDataSink for CallbackSink<F>
where
    F: Fn(ComputeSystemsLoadedData) -> Fut + Send + Sync,
    Fut: Future<Output = SinkResult<()>> + Send + 'static,
{
    async fn deliver(&self, batch: ComputeSystemsLoadedData) -> SinkResult<()> {
        (self.callback)(batch).await
    }
}
