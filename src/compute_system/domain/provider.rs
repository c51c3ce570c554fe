//! Provider descriptor.

use super::{ComputeSystemDomainError, ProviderId, ProviderOperations};
use serde::{Deserialize, Serialize};

/// Immutable description of a compute-system provider.
///
/// Built once at discovery time and carried on every batch the provider
/// produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderDescriptor {
    id: ProviderId,
    display_name: String,
    supported_operations: ProviderOperations,
}

impl ProviderDescriptor {
    /// Creates a validated provider descriptor with no extra operations.
    ///
    /// # Errors
    ///
    /// Returns [`ComputeSystemDomainError::EmptyDisplayName`] when the display
    /// name is blank after trimming.
    pub fn new(
        id: ProviderId,
        raw_display_name: impl Into<String>,
    ) -> Result<Self, ComputeSystemDomainError> {
        let display_name = raw_display_name.into().trim().to_owned();
        if display_name.is_empty() {
            return Err(ComputeSystemDomainError::EmptyDisplayName);
        }
        Ok(Self {
            id,
            display_name,
            supported_operations: ProviderOperations::empty(),
        })
    }

    /// Sets the supported provider operations.
    #[must_use]
    pub const fn with_operations(mut self, operations: ProviderOperations) -> Self {
        self.supported_operations = operations;
        self
    }

    /// Returns the provider identifier.
    #[must_use]
    pub const fn id(&self) -> &ProviderId {
        &self.id
    }

    /// Returns the human-readable provider name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the supported provider operations.
    #[must_use]
    pub const fn supported_operations(&self) -> ProviderOperations {
        self.supported_operations
    }
}
