//! Scripted in-memory compute-system provider.

use crate::compute_system::{
    domain::{ComputeSystem, ComputeSystemsResult, DeveloperId, ProviderDescriptor},
    ports::{ComputeSystemProvider, ProviderQueryError, ProviderQueryResult},
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

/// Options string that makes every call fail with an invalid-argument error.
pub const THROW_OPTION: &str = "Throw";

/// What a scripted provider answers for an identity.
#[derive(Debug, Clone)]
pub enum ScriptedResponse {
    /// Return a success result with these systems.
    Systems(Vec<ComputeSystem>),
    /// Return a provider-reported failure result.
    Failure {
        /// Diagnostic text.
        diagnostic: String,
    },
    /// Fail the call itself.
    Error(ProviderQueryError),
}

/// Deterministic provider driven by per-identity scripts.
///
/// Unscripted identities receive the default response, which starts as an
/// empty success. Scripts match on the full [`DeveloperId`], so the same
/// login on two hosts can answer differently. Latency is simulated with
/// `tokio::time::sleep`, so tests running on a paused clock observe it
/// without waiting.
///
/// Clones carry their own copy of the scripts and share the call log.
#[derive(Debug, Clone)]
pub struct ScriptedComputeSystemProvider {
    descriptor: ProviderDescriptor,
    responses: HashMap<DeveloperId, ScriptedResponse>,
    latencies: HashMap<DeveloperId, Duration>,
    default_response: ScriptedResponse,
    default_latency: Duration,
    calls: Arc<RwLock<Vec<Option<DeveloperId>>>>,
}

impl ScriptedComputeSystemProvider {
    /// Creates a provider that answers every identity with no systems.
    #[must_use]
    pub fn new(descriptor: ProviderDescriptor) -> Self {
        Self {
            descriptor,
            responses: HashMap::new(),
            latencies: HashMap::new(),
            default_response: ScriptedResponse::Systems(Vec::new()),
            default_latency: Duration::ZERO,
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Scripts the response for one identity.
    #[must_use]
    pub fn with_response(mut self, developer_id: &DeveloperId, response: ScriptedResponse) -> Self {
        self.script(developer_id, response);
        self
    }

    /// Scripts the latency for one identity.
    #[must_use]
    pub fn with_latency_for(mut self, developer_id: &DeveloperId, latency: Duration) -> Self {
        self.latencies.insert(developer_id.clone(), latency);
        self
    }

    /// Sets the response for unscripted identities and anonymous calls.
    #[must_use]
    pub fn with_default_response(mut self, response: ScriptedResponse) -> Self {
        self.default_response = response;
        self
    }

    /// Sets the latency for identities without a scripted latency.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.set_latency(latency);
        self
    }

    /// Scripts the response for one identity in place.
    pub fn script(&mut self, developer_id: &DeveloperId, response: ScriptedResponse) {
        self.responses.insert(developer_id.clone(), response);
    }

    /// Sets the default latency in place.
    pub const fn set_latency(&mut self, latency: Duration) {
        self.default_latency = latency;
    }

    /// Returns the identities queried so far, in call order.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderQueryError::Call`] when the call log lock is
    /// poisoned.
    pub fn calls(&self) -> ProviderQueryResult<Vec<Option<DeveloperId>>> {
        let calls = self
            .calls
            .read()
            .map_err(|err| ProviderQueryError::call(std::io::Error::other(err.to_string())))?;
        Ok(calls.clone())
    }

    fn record_call(&self, developer_id: Option<&DeveloperId>) -> ProviderQueryResult<()> {
        let mut calls = self
            .calls
            .write()
            .map_err(|err| ProviderQueryError::call(std::io::Error::other(err.to_string())))?;
        calls.push(developer_id.cloned());
        Ok(())
    }

    fn plan_call(&self, developer_id: Option<&DeveloperId>) -> (ScriptedResponse, Duration) {
        let response = developer_id
            .and_then(|id| self.responses.get(id))
            .unwrap_or(&self.default_response)
            .clone();
        let latency = developer_id
            .and_then(|id| self.latencies.get(id))
            .copied()
            .unwrap_or(self.default_latency);
        (response, latency)
    }
}

#[async_trait]
impl ComputeSystemProvider for ScriptedComputeSystemProvider {
    fn descriptor(&self) -> &ProviderDescriptor {
        &self.descriptor
    }

    async fn get_compute_systems(
        &self,
        developer_id: Option<&DeveloperId>,
        options: &str,
    ) -> ProviderQueryResult<ComputeSystemsResult> {
        self.record_call(developer_id)?;
        let (response, latency) = self.plan_call(developer_id);

        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }

        if options == THROW_OPTION {
            return Err(ProviderQueryError::InvalidArgument("options".to_owned()));
        }

        match response {
            ScriptedResponse::Systems(systems) => Ok(ComputeSystemsResult::success(systems)),
            ScriptedResponse::Failure { diagnostic } => Ok(ComputeSystemsResult::Failure {
                diagnostic,
                extended_error: None,
            }),
            ScriptedResponse::Error(err) => Err(err),
        }
    }
}
