//! In-memory provider directory.

use crate::compute_system::{
    domain::DeveloperId,
    ports::{
        ComputeSystemProvider, ProviderDirectory, ProviderDirectoryError, ProviderDirectoryResult,
        ProviderEntry,
    },
};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory provider directory.
///
/// Providers are returned in registration order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProviderDirectory {
    state: Arc<RwLock<InMemoryDirectoryState>>,
}

#[derive(Debug, Default)]
struct InMemoryDirectoryState {
    entries: Vec<ProviderEntry>,
    failure: Option<ProviderDirectoryError>,
}

impl InMemoryProviderDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a provider with the identities it should be queried with.
    ///
    /// A provider whose identifier is already registered is replaced in
    /// place.
    ///
    /// # Errors
    ///
    /// Returns directory errors when lock acquisition fails.
    pub fn register(
        &self,
        provider: Arc<dyn ComputeSystemProvider>,
        developer_ids: impl IntoIterator<Item = DeveloperId>,
    ) -> ProviderDirectoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ProviderDirectoryError::discovery(std::io::Error::other(err.to_string()))
        })?;
        let entry = ProviderEntry::new(provider, developer_ids);
        let provider_id = entry.provider().descriptor().id().clone();

        match state
            .entries
            .iter_mut()
            .find(|existing| *existing.provider().descriptor().id() == provider_id)
        {
            Some(existing) => *existing = entry,
            None => state.entries.push(entry),
        }
        Ok(())
    }

    /// Makes subsequent discovery calls fail with the given error.
    ///
    /// # Errors
    ///
    /// Returns directory errors when lock acquisition fails.
    pub fn fail_with(&self, failure: ProviderDirectoryError) -> ProviderDirectoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ProviderDirectoryError::discovery(std::io::Error::other(err.to_string()))
        })?;
        state.failure = Some(failure);
        Ok(())
    }
}

#[async_trait]
impl ProviderDirectory for InMemoryProviderDirectory {
    async fn get_providers(&self) -> ProviderDirectoryResult<Vec<ProviderEntry>> {
        let state = self.state.read().map_err(|err| {
            ProviderDirectoryError::discovery(std::io::Error::other(err.to_string()))
        })?;
        if let Some(failure) = &state.failure {
            return Err(failure.clone());
        }
        Ok(state.entries.clone())
    }
}
