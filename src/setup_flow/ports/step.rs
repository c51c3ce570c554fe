//! Setup step port.

use crate::setup_flow::domain::{SetupFlowContext, SetupFlowError};
use async_trait::async_trait;

/// One stage of the setup flow.
///
/// Steps receive the flow's context by mutable reference and may read or
/// change the selected target.
#[async_trait]
pub trait SetupStep: Send + Sync {
    /// Returns the step name used in errors and logs.
    fn name(&self) -> &str;

    /// Runs the step.
    ///
    /// # Errors
    ///
    /// Returns [`SetupFlowError`] when the step cannot complete.
    async fn run(&self, context: &mut SetupFlowContext) -> Result<(), SetupFlowError>;
}
