//! Configuration for compute-system loads.

use std::time::Duration;

/// Default absolute deadline for one load, measured from invocation.
pub const DEFAULT_LOAD_DEADLINE: Duration = Duration::from_secs(120);

/// Configuration for [`super::ComputeSystemManager`].
///
/// # Examples
///
/// ```
/// use devhome_environments::compute_system::services::{DEFAULT_LOAD_DEADLINE, ManagerConfig};
/// use std::time::Duration;
///
/// let config = ManagerConfig::default();
/// assert_eq!(config.deadline, DEFAULT_LOAD_DEADLINE);
/// assert!(config.query_options.is_empty());
///
/// let quick = ManagerConfig::default().with_deadline(Duration::from_secs(5));
/// assert_eq!(quick.deadline, Duration::from_secs(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerConfig {
    /// Deadline after which outstanding provider work is cancelled.
    pub deadline: Duration,
    /// Options string passed verbatim to every provider query.
    pub query_options: String,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            deadline: DEFAULT_LOAD_DEADLINE,
            query_options: String::new(),
        }
    }
}

impl ManagerConfig {
    /// Sets the load deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    /// Sets the options string passed to providers.
    #[must_use]
    pub fn with_query_options(mut self, options: impl Into<String>) -> Self {
        self.query_options = options.into();
        self
    }
}
