//! Domain model for the setup flow.

mod context;
mod error;
mod review_item;

pub use context::SetupFlowContext;
pub use error::SetupFlowError;
pub use review_item::ComputeSystemReviewItem;
