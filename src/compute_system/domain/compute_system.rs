//! Compute-system handle.

use super::{ComputeSystemDomainError, ComputeSystemId, ComputeSystemOperations, ProviderId};
use serde::{Deserialize, Serialize};

/// A virtual or remote development environment returned by a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputeSystem {
    id: ComputeSystemId,
    name: String,
    alternative_display_name: Option<String>,
    associated_provider_id: ProviderId,
    supported_operations: ComputeSystemOperations,
}

impl ComputeSystem {
    /// Creates a compute-system handle with no supported operations.
    ///
    /// # Errors
    ///
    /// Returns [`ComputeSystemDomainError::EmptyComputeSystemName`] when the
    /// name is blank after trimming.
    pub fn new(
        id: ComputeSystemId,
        raw_name: impl Into<String>,
        associated_provider_id: ProviderId,
    ) -> Result<Self, ComputeSystemDomainError> {
        let name = raw_name.into().trim().to_owned();
        if name.is_empty() {
            return Err(ComputeSystemDomainError::EmptyComputeSystemName);
        }
        Ok(Self {
            id,
            name,
            alternative_display_name: None,
            associated_provider_id,
            supported_operations: ComputeSystemOperations::empty(),
        })
    }

    /// Sets the secondary label shown under the name. Blank values clear it.
    #[must_use]
    pub fn with_alternative_display_name(mut self, raw: impl Into<String>) -> Self {
        let value = raw.into().trim().to_owned();
        self.alternative_display_name = if value.is_empty() { None } else { Some(value) };
        self
    }

    /// Sets the supported lifecycle operations.
    #[must_use]
    pub const fn with_operations(mut self, operations: ComputeSystemOperations) -> Self {
        self.supported_operations = operations;
        self
    }

    /// Returns the provider-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> &ComputeSystemId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the secondary label, if any.
    #[must_use]
    pub fn alternative_display_name(&self) -> Option<&str> {
        self.alternative_display_name.as_deref()
    }

    /// Returns the identifier of the provider that owns this system.
    #[must_use]
    pub const fn associated_provider_id(&self) -> &ProviderId {
        &self.associated_provider_id
    }

    /// Returns the supported lifecycle operations.
    #[must_use]
    pub const fn supported_operations(&self) -> ComputeSystemOperations {
        self.supported_operations
    }

    /// Returns whether a configuration document can be applied.
    #[must_use]
    pub const fn supports_apply_configuration(&self) -> bool {
        self.supported_operations
            .contains(ComputeSystemOperations::APPLY_CONFIGURATION)
    }
}
