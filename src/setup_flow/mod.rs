//! Setup-flow state for applying configuration to a compute system.
//!
//! The setup wizard picks one compute system as the target for a
//! configuration document and later steps read that choice. The choice
//! lives in an explicit [`domain::SetupFlowContext`] owned by the
//! orchestrator and lent to each step, rather than in shared state on the
//! compute-system manager.

pub mod domain;
pub mod ports;
pub mod services;
