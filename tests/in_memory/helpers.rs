//! Shared builders for in-memory compute-system integration tests.

use devhome_environments::compute_system::{
    adapters::memory::{InMemoryProviderDirectory, ScriptedComputeSystemProvider},
    domain::{
        ComputeSystem, ComputeSystemId, ComputeSystemOperations, DeveloperId, ProviderDescriptor,
        ProviderId,
    },
    services::ComputeSystemManager,
};
use mockable::DefaultClock;
use rstest::fixture;
use std::sync::Arc;

/// Manager type used by the integration tests.
pub type TestManager = ComputeSystemManager<InMemoryProviderDirectory, DefaultClock>;

/// Provides a fresh provider directory for each test.
#[fixture]
pub fn directory() -> Arc<InMemoryProviderDirectory> {
    Arc::new(InMemoryProviderDirectory::new())
}

/// Builds a manager over the given directory with the default configuration.
pub fn manager(directory: &Arc<InMemoryProviderDirectory>) -> TestManager {
    ComputeSystemManager::new(Arc::clone(directory), Arc::new(DefaultClock))
}

/// Builds a provider identifier.
pub fn provider_id(id: &str) -> ProviderId {
    ProviderId::new(id).expect("valid provider id")
}

/// Builds a developer identity.
pub fn developer(login: &str) -> DeveloperId {
    DeveloperId::new(login).expect("valid developer id")
}

/// Builds a scripted provider whose display name mirrors its identifier.
pub fn provider(id: &str) -> ScriptedComputeSystemProvider {
    let descriptor = ProviderDescriptor::new(provider_id(id), id).expect("valid descriptor");
    ScriptedComputeSystemProvider::new(descriptor)
}

/// Builds a compute system that accepts configuration.
pub fn configurable_system(id: &str, provider: &str) -> ComputeSystem {
    ComputeSystem::new(
        ComputeSystemId::new(id).expect("valid compute system id"),
        id,
        provider_id(provider),
    )
    .expect("valid compute system")
    .with_operations(ComputeSystemOperations::APPLY_CONFIGURATION)
}

/// Registers a provider with the given identities.
pub fn register(
    directory: &InMemoryProviderDirectory,
    provider: &ScriptedComputeSystemProvider,
    developer_ids: Vec<DeveloperId>,
) {
    directory
        .register(Arc::new(provider.clone()), developer_ids)
        .expect("provider registration should succeed");
}
