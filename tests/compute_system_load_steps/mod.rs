//! Step definitions for compute-system load scenarios.

mod given;
mod then;
mod when;
pub mod world;
