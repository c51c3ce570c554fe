//! Sequential setup-flow orchestration.

use crate::setup_flow::{
    domain::{SetupFlowContext, SetupFlowError},
    ports::SetupStep,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Runs setup steps in order against a context it owns.
#[derive(Clone, Default)]
pub struct SetupFlowOrchestrator {
    context: SetupFlowContext,
    steps: Vec<Arc<dyn SetupStep>>,
}

impl SetupFlowOrchestrator {
    /// Creates an orchestrator with an empty context and no steps.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an orchestrator around an existing context.
    #[must_use]
    pub const fn with_context(context: SetupFlowContext) -> Self {
        Self {
            context,
            steps: Vec::new(),
        }
    }

    /// Appends a step.
    #[must_use]
    pub fn with_step(mut self, step: Arc<dyn SetupStep>) -> Self {
        self.steps.push(step);
        self
    }

    /// Returns the flow context.
    #[must_use]
    pub const fn context(&self) -> &SetupFlowContext {
        &self.context
    }

    /// Returns the flow context for mutation between runs.
    pub const fn context_mut(&mut self) -> &mut SetupFlowContext {
        &mut self.context
    }

    /// Consumes the orchestrator and returns its context.
    #[must_use]
    pub fn into_context(self) -> SetupFlowContext {
        self.context
    }

    /// Runs every step in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the error of the first step that fails.
    pub async fn run(&mut self) -> Result<(), SetupFlowError> {
        for step in &self.steps {
            debug!(step = step.name(), "running setup step");
            if let Err(err) = step.run(&mut self.context).await {
                warn!(step = step.name(), error = %err, "setup step failed");
                return Err(err);
            }
        }
        Ok(())
    }
}
