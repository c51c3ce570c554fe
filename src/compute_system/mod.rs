//! Compute-system discovery and aggregation.
//!
//! Providers are third-party extensions that manage virtual or remote
//! development environments. This module discovers them, queries each one
//! for the compute systems visible to its developer identities, and streams
//! one batch per provider to a consumer. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
