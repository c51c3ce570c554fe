//! Explicit setup-flow context.

use super::{ComputeSystemReviewItem, SetupFlowError};
use crate::compute_system::domain::{ComputeSystemId, ComputeSystemsLoadedData};

/// State shared by the steps of one setup flow.
///
/// Owned by a single orchestrator and lent to one step at a time, so a
/// target has exactly one writer and is never visible outside the flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetupFlowContext {
    target: Option<ComputeSystemReviewItem>,
}

impl SetupFlowContext {
    /// Creates a context with no target.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the setup target, replacing any earlier choice.
    pub fn select_target(&mut self, item: ComputeSystemReviewItem) {
        self.target = Some(item);
    }

    /// Selects a compute system from a delivered batch.
    ///
    /// # Errors
    ///
    /// Returns [`SetupFlowError::ComputeSystemNotFound`] when the batch has no
    /// system with that identifier, or any error from
    /// [`ComputeSystemReviewItem::new`].
    pub fn select_from_batch(
        &mut self,
        batch: &ComputeSystemsLoadedData,
        compute_system_id: &ComputeSystemId,
    ) -> Result<&ComputeSystemReviewItem, SetupFlowError> {
        let compute_system = batch
            .compute_systems()
            .find(|system| system.id() == compute_system_id)
            .cloned()
            .ok_or_else(|| SetupFlowError::ComputeSystemNotFound(compute_system_id.clone()))?;
        let item = ComputeSystemReviewItem::new(compute_system, batch.provider().clone())?;
        Ok(self.target.insert(item))
    }

    /// Returns the selected target, if any.
    #[must_use]
    pub const fn target(&self) -> Option<&ComputeSystemReviewItem> {
        self.target.as_ref()
    }

    /// Returns the selected target or an error when none is set.
    ///
    /// # Errors
    ///
    /// Returns [`SetupFlowError::TargetNotSelected`] when no target is set.
    pub fn require_target(&self) -> Result<&ComputeSystemReviewItem, SetupFlowError> {
        self.target.as_ref().ok_or(SetupFlowError::TargetNotSelected)
    }

    /// Removes and returns the selected target.
    pub fn take_target(&mut self) -> Option<ComputeSystemReviewItem> {
        self.target.take()
    }

    /// Clears the selected target.
    pub fn clear_target(&mut self) {
        self.target = None;
    }
}
