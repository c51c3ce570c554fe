//! In-memory adapters for compute-system discovery.
//!
//! These adapters model providers, discovery and batch consumption without
//! activating extensions. They back the unit and integration tests and are
//! usable for local deterministic flows.

mod directory;
mod provider;
mod sink;

pub use directory::InMemoryProviderDirectory;
pub use provider::{ScriptedComputeSystemProvider, ScriptedResponse, THROW_OPTION};
pub use sink::RecordingSink;
