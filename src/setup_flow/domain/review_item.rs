//! Setup target selection.

use super::SetupFlowError;
use crate::compute_system::domain::{ComputeSystem, ProviderDescriptor};

/// A compute system chosen as the setup target, with its provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputeSystemReviewItem {
    compute_system: ComputeSystem,
    provider: ProviderDescriptor,
}

impl ComputeSystemReviewItem {
    /// Pairs a compute system with the provider that returned it.
    ///
    /// # Errors
    ///
    /// Returns [`SetupFlowError::ProviderMismatch`] when the compute system
    /// reports a different provider, or
    /// [`SetupFlowError::ApplyConfigurationUnsupported`] when it cannot
    /// accept a configuration document.
    pub fn new(
        compute_system: ComputeSystem,
        provider: ProviderDescriptor,
    ) -> Result<Self, SetupFlowError> {
        if compute_system.associated_provider_id() != provider.id() {
            return Err(SetupFlowError::ProviderMismatch {
                compute_system: compute_system.id().clone(),
                expected: provider.id().clone(),
                actual: compute_system.associated_provider_id().clone(),
            });
        }
        if !compute_system.supports_apply_configuration() {
            return Err(SetupFlowError::ApplyConfigurationUnsupported(
                compute_system.id().clone(),
            ));
        }
        Ok(Self {
            compute_system,
            provider,
        })
    }

    /// Returns the chosen compute system.
    #[must_use]
    pub const fn compute_system(&self) -> &ComputeSystem {
        &self.compute_system
    }

    /// Returns the owning provider.
    #[must_use]
    pub const fn provider(&self) -> &ProviderDescriptor {
        &self.provider
    }
}
