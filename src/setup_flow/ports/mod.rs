//! Port contracts for setup-flow steps.

pub mod step;

pub use step::SetupStep;
