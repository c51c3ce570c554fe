//! Recording batch sink.

use crate::compute_system::{
    domain::{ComputeSystemsLoadedData, ProviderId},
    ports::{LoadedDataSink, SinkError, SinkResult},
};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, RwLock};

/// Sink that records batches in arrival order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    state: Arc<RwLock<RecordingSinkState>>,
}

#[derive(Debug, Default)]
struct RecordingSinkState {
    batches: Vec<ComputeSystemsLoadedData>,
    rejected_providers: HashSet<ProviderId>,
}

impl RecordingSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the sink reject batches from a provider.
    ///
    /// # Errors
    ///
    /// Returns sink errors when lock acquisition fails.
    pub fn reject_from(&self, provider_id: ProviderId) -> SinkResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| SinkError::rejected(std::io::Error::other(err.to_string())))?;
        state.rejected_providers.insert(provider_id);
        Ok(())
    }

    /// Returns the recorded batches in arrival order.
    #[must_use]
    pub fn batches(&self) -> Vec<ComputeSystemsLoadedData> {
        self.state
            .read()
            .map(|state| state.batches.clone())
            .unwrap_or_default()
    }

    /// Returns the provider identifiers of recorded batches in arrival order.
    #[must_use]
    pub fn provider_order(&self) -> Vec<ProviderId> {
        self.batches()
            .iter()
            .map(|batch| batch.provider().id().clone())
            .collect()
    }
}

#[async_trait]
impl LoadedDataSink for RecordingSink {
    async fn deliver(&self, batch: ComputeSystemsLoadedData) -> SinkResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| SinkError::rejected(std::io::Error::other(err.to_string())))?;
        if state.rejected_providers.contains(batch.provider().id()) {
            return Err(SinkError::Closed);
        }
        state.batches.push(batch);
        Ok(())
    }
}
