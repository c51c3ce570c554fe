//! DevHome environments: compute-system aggregation for developer machines.
//!
//! This crate discovers compute-system providers (extensions that manage
//! virtual or remote development environments), loads the compute systems
//! each provider exposes for its developer identities, and carries the
//! setup-flow state that targets one of those systems for configuration.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure value types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external collaborators
//! - **Adapters**: Concrete implementations of ports (in-memory, callbacks)
//! - **Services**: Orchestration over ports
//!
//! # Modules
//!
//! - [`compute_system`]: Provider discovery and parallel compute-system loads
//! - [`setup_flow`]: Explicit setup-target context and step orchestration

pub mod compute_system;
pub mod setup_flow;
