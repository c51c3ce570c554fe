//! Domain model for compute-system discovery.
//!
//! Providers, developer identities, compute-system handles and the
//! per-provider batches and outcomes produced by one load. All
//! infrastructure concerns are kept outside the domain boundary.

mod batch;
mod compute_system;
mod developer_id;
mod error;
mod ids;
mod operations;
mod outcome;
mod provider;
mod result;

pub use batch::{ComputeSystemsLoadedData, IdentityResult};
pub use compute_system::ComputeSystem;
pub use developer_id::DeveloperId;
pub use error::ComputeSystemDomainError;
pub use ids::{ComputeSystemId, LoadId, ProviderId};
pub use operations::{ComputeSystemOperations, ProviderOperations};
pub use outcome::{LoadReport, ProviderLoadOutcome, ProviderLoadReport};
pub use provider::ProviderDescriptor;
pub use result::ComputeSystemsResult;
