//! Port contracts for compute-system discovery.
//!
//! Ports define infrastructure-agnostic interfaces for the collaborators the
//! manager consumes: the provider directory, each provider's query
//! capability, and the sink that receives batches.

pub mod directory;
pub mod provider;
pub mod sink;

pub use directory::{
    ProviderDirectory, ProviderDirectoryError, ProviderDirectoryResult, ProviderEntry,
};
pub use provider::{ComputeSystemProvider, ProviderQueryError, ProviderQueryResult};
pub use sink::{LoadedDataSink, SinkError, SinkResult};
