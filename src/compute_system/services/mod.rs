//! Application services for compute-system discovery.

mod config;
mod manager;

pub use config::{DEFAULT_LOAD_DEADLINE, ManagerConfig};
pub use manager::ComputeSystemManager;
