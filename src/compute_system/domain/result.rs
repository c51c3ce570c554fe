//! Per-identity query result.

use super::{ComputeSystem, ComputeSystemDomainError};
use serde::{Deserialize, Serialize};

/// What a provider reported for one identity.
///
/// `Failure` is a result the provider chose to return, not an error that
/// escaped it. Failures travel in the batch like any other result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ComputeSystemsResult {
    /// The provider enumerated its compute systems.
    Success {
        /// Compute systems in provider order.
        compute_systems: Vec<ComputeSystem>,
    },
    /// The provider could not enumerate compute systems for this identity.
    Failure {
        /// Human-readable diagnostic.
        diagnostic: String,
        /// Provider-specific error code, if reported.
        extended_error: Option<i32>,
    },
}

impl ComputeSystemsResult {
    /// Creates a success result.
    #[must_use]
    pub const fn success(compute_systems: Vec<ComputeSystem>) -> Self {
        Self::Success { compute_systems }
    }

    /// Creates a failure result.
    ///
    /// # Errors
    ///
    /// Returns [`ComputeSystemDomainError::EmptyDiagnostic`] when the
    /// diagnostic is blank after trimming.
    pub fn failure(
        raw_diagnostic: impl Into<String>,
        extended_error: Option<i32>,
    ) -> Result<Self, ComputeSystemDomainError> {
        let diagnostic = raw_diagnostic.into().trim().to_owned();
        if diagnostic.is_empty() {
            return Err(ComputeSystemDomainError::EmptyDiagnostic);
        }
        Ok(Self::Failure {
            diagnostic,
            extended_error,
        })
    }

    /// Returns whether the provider reported success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the compute systems, or an empty slice for failures.
    #[must_use]
    pub fn compute_systems(&self) -> &[ComputeSystem] {
        match self {
            Self::Success { compute_systems } => compute_systems,
            Self::Failure { .. } => &[],
        }
    }
}
