//! Capability flags for providers and compute systems.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Operations a provider supports beyond enumeration.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[repr(transparent)]
    pub struct ProviderOperations: u32 {
        /// The provider can create new compute systems.
        const CREATE_COMPUTE_SYSTEM = 0b0000_0001;
    }
}

bitflags! {
    /// Lifecycle operations a compute system accepts.
    ///
    /// The setup flow only targets systems that carry
    /// [`ComputeSystemOperations::APPLY_CONFIGURATION`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[repr(transparent)]
    pub struct ComputeSystemOperations: u32 {
        /// Boot a stopped system.
        const START              = 1 << 0;
        /// Graceful shutdown.
        const SHUT_DOWN          = 1 << 1;
        /// Forced power-off.
        const TERMINATE          = 1 << 2;
        /// Remove the system.
        const DELETE             = 1 << 3;
        /// Save running state to disk.
        const SAVE               = 1 << 4;
        /// Suspend execution.
        const PAUSE              = 1 << 5;
        /// Resume a paused system.
        const RESUME             = 1 << 6;
        /// Restart the system.
        const RESTART            = 1 << 7;
        /// Capture a snapshot.
        const CREATE_SNAPSHOT    = 1 << 8;
        /// Roll back to a snapshot.
        const REVERT_SNAPSHOT    = 1 << 9;
        /// Remove a snapshot.
        const DELETE_SNAPSHOT    = 1 << 10;
        /// Change system properties.
        const MODIFY_PROPERTIES  = 1 << 11;
        /// Apply a configuration document.
        const APPLY_CONFIGURATION = 1 << 12;
    }
}
