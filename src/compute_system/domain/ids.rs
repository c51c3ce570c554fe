//! Identifier types for the compute-system domain.

use super::ComputeSystemDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Maximum length for a provider identifier.
const MAX_PROVIDER_ID_LENGTH: usize = 256;

/// Opaque identity of a compute-system provider.
///
/// Providers choose their own identifiers (for example
/// `Microsoft.HyperV` or `Microsoft.DevBox`). The value is only trimmed;
/// case and punctuation are preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderId(String);

impl ProviderId {
    /// Creates a validated provider identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ComputeSystemDomainError::EmptyProviderId`] when the value is
    /// blank, or [`ComputeSystemDomainError::ProviderIdTooLong`] when it
    /// exceeds 256 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, ComputeSystemDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(ComputeSystemDomainError::EmptyProviderId);
        }

        if trimmed.chars().count() > MAX_PROVIDER_ID_LENGTH {
            return Err(ComputeSystemDomainError::ProviderIdTooLong(raw));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProviderId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Provider-assigned identifier of a single compute system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComputeSystemId(String);

impl ComputeSystemId {
    /// Creates a validated compute-system identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ComputeSystemDomainError::EmptyComputeSystemId`] when the
    /// value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, ComputeSystemDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ComputeSystemDomainError::EmptyComputeSystemId);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComputeSystemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique identifier for one `get_compute_systems` invocation.
///
/// Attached to log spans and to the returned report so a load can be
/// correlated across both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoadId(Uuid);

impl LoadId {
    /// Creates a new random load identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for LoadId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LoadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
