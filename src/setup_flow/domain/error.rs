//! Error types for the setup flow.

use crate::compute_system::domain::{ComputeSystemId, ProviderId};
use thiserror::Error;

/// Errors raised while selecting a target or running setup steps.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SetupFlowError {
    /// A step needed a target but none was selected.
    #[error("no compute system has been selected for setup")]
    TargetNotSelected,

    /// The compute system cannot accept a configuration document.
    #[error("compute system {0} does not support applying configuration")]
    ApplyConfigurationUnsupported(ComputeSystemId),

    /// The compute system belongs to a different provider.
    #[error("compute system {compute_system} belongs to provider {actual}, not {expected}")]
    ProviderMismatch {
        /// Compute-system identifier.
        compute_system: ComputeSystemId,
        /// Provider the caller named.
        expected: ProviderId,
        /// Provider the compute system reports.
        actual: ProviderId,
    },

    /// The batch did not contain the requested compute system.
    #[error("compute system {0} was not found in the loaded batch")]
    ComputeSystemNotFound(ComputeSystemId),

    /// A setup step failed.
    #[error("setup step '{step}' failed: {reason}")]
    Step {
        /// Step name.
        step: String,
        /// Reason string.
        reason: String,
    },
}
