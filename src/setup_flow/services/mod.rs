//! Application services for the setup flow.

mod orchestrator;

pub use orchestrator::SetupFlowOrchestrator;
