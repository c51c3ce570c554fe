//! Developer identity handle.

use super::ComputeSystemDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque account handle a provider uses to scope its query.
///
/// Identities are owned by the caller's identity store; the manager only
/// passes them through to providers and onto batches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeveloperId {
    login_id: String,
    url: Option<String>,
}

impl DeveloperId {
    /// Creates an identity from a login identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ComputeSystemDomainError::EmptyLoginId`] when the login is
    /// blank after trimming.
    pub fn new(raw_login_id: impl Into<String>) -> Result<Self, ComputeSystemDomainError> {
        let login_id = raw_login_id.into().trim().to_owned();
        if login_id.is_empty() {
            return Err(ComputeSystemDomainError::EmptyLoginId);
        }
        Ok(Self {
            login_id,
            url: None,
        })
    }

    /// Sets the account URL. Blank values clear it.
    #[must_use]
    pub fn with_url(mut self, raw_url: impl Into<String>) -> Self {
        let url = raw_url.into().trim().to_owned();
        self.url = if url.is_empty() { None } else { Some(url) };
        self
    }

    /// Returns the login identifier.
    #[must_use]
    pub fn login_id(&self) -> &str {
        &self.login_id
    }

    /// Returns the account URL, if any.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

impl fmt::Display for DeveloperId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.login_id)
    }
}
