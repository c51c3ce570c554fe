//! Shared world state for compute-system load BDD scenarios.

use std::sync::Arc;

use devhome_environments::compute_system::{
    adapters::memory::{InMemoryProviderDirectory, RecordingSink, ScriptedComputeSystemProvider},
    domain::{DeveloperId, LoadReport, ProviderDescriptor, ProviderId},
    ports::ComputeSystemProvider,
    services::ManagerConfig,
};
use rstest::fixture;

/// Provider declared by a scenario together with its identities.
pub struct PendingProvider {
    /// Scripted provider.
    pub provider: ScriptedComputeSystemProvider,
    /// Identities the provider is queried with.
    pub developer_ids: Vec<DeveloperId>,
}

/// Scenario world for compute-system load behaviour tests.
pub struct LoadWorld {
    /// Directory the manager discovers providers from.
    pub directory: Arc<InMemoryProviderDirectory>,
    /// Providers declared by the scenario, registered when the load runs.
    pub providers: Vec<PendingProvider>,
    /// Configuration applied when the load runs.
    pub config: ManagerConfig,
    /// Sink recording delivered batches.
    pub sink: Arc<RecordingSink>,
    /// Report from the last load.
    pub report: Option<LoadReport>,
}

impl LoadWorld {
    /// Creates a world with no registered providers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            directory: Arc::new(InMemoryProviderDirectory::new()),
            providers: Vec::new(),
            config: ManagerConfig::default(),
            sink: Arc::new(RecordingSink::new()),
            report: None,
        }
    }

    /// Looks up a provider declared earlier in the scenario.
    pub fn provider_mut(
        &mut self,
        id: &str,
    ) -> Result<&mut ScriptedComputeSystemProvider, eyre::Report> {
        self.providers
            .iter_mut()
            .map(|pending| &mut pending.provider)
            .find(|provider| provider.descriptor().id().as_str() == id)
            .ok_or_else(|| eyre::eyre!("provider '{id}' was not declared in this scenario"))
    }

    /// Returns the report of the last load.
    pub fn report(&self) -> Result<&LoadReport, eyre::Report> {
        self.report
            .as_ref()
            .ok_or_else(|| eyre::eyre!("compute systems have not been loaded"))
    }
}

impl Default for LoadWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> LoadWorld {
    LoadWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Builds a provider descriptor whose display name mirrors its identifier.
pub fn build_descriptor(id: &str) -> Result<ProviderDescriptor, eyre::Report> {
    let provider_id = ProviderId::new(id)?;
    Ok(ProviderDescriptor::new(provider_id, id)?)
}

/// Parses a comma-separated list of login identifiers.
pub fn parse_identities(raw: &str) -> Result<Vec<DeveloperId>, eyre::Report> {
    raw.split(',')
        .map(str::trim)
        .filter(|login| !login.is_empty())
        .map(|login| DeveloperId::new(login).map_err(eyre::Report::from))
        .collect()
}
