//! Error types for compute-system domain validation.

use thiserror::Error;

/// Errors returned while constructing compute-system domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ComputeSystemDomainError {
    /// The provider identifier is empty after trimming.
    #[error("provider identifier must not be empty")]
    EmptyProviderId,

    /// The provider identifier exceeds the 256-character limit.
    #[error("provider identifier exceeds 256 character limit: {0}")]
    ProviderIdTooLong(String),

    /// The provider display name is empty after trimming.
    #[error("provider display name must not be empty")]
    EmptyDisplayName,

    /// The developer login identifier is empty after trimming.
    #[error("developer login identifier must not be empty")]
    EmptyLoginId,

    /// The compute-system identifier is empty after trimming.
    #[error("compute system identifier must not be empty")]
    EmptyComputeSystemId,

    /// The compute-system name is empty after trimming.
    #[error("compute system name must not be empty")]
    EmptyComputeSystemName,

    /// A failure result was built without a diagnostic message.
    #[error("failure result must carry a diagnostic message")]
    EmptyDiagnostic,
}
