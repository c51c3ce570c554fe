//! In-memory integration tests for choosing a setup target from a load.

use super::helpers::{configurable_system, developer, directory, manager, provider, register};
use devhome_environments::compute_system::{
    adapters::memory::{InMemoryProviderDirectory, RecordingSink, ScriptedResponse},
    domain::ComputeSystemId,
};
use devhome_environments::setup_flow::domain::{SetupFlowContext, SetupFlowError};
use rstest::rstest;
use std::sync::Arc;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn target_is_selected_from_a_delivered_batch(directory: Arc<InMemoryProviderDirectory>) {
    let alice = developer("alice");
    let hyperv = provider("Microsoft.HyperV").with_response(
        &alice,
        ScriptedResponse::Systems(vec![configurable_system("dev-vm", "Microsoft.HyperV")]),
    );
    register(&directory, &hyperv, vec![alice]);
    let sink = Arc::new(RecordingSink::new());
    manager(&directory).get_compute_systems(Arc::clone(&sink)).await;
    let batch = sink.batches().pop().expect("batch delivered");
    let mut context = SetupFlowContext::new();

    context
        .select_from_batch(&batch, &ComputeSystemId::new("dev-vm").expect("valid id"))
        .expect("selection should succeed");

    let target = context.require_target().expect("target selected");
    assert_eq!(target.provider().id().as_str(), "Microsoft.HyperV");
    assert_eq!(target.compute_system().name(), "dev-vm");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_compute_system_is_not_selected(directory: Arc<InMemoryProviderDirectory>) {
    register(&directory, &provider("Microsoft.DevBox"), vec![developer("bob")]);
    let sink = Arc::new(RecordingSink::new());
    manager(&directory).get_compute_systems(Arc::clone(&sink)).await;
    let batch = sink.batches().pop().expect("batch delivered");
    let mut context = SetupFlowContext::new();
    let missing = ComputeSystemId::new("ghost").expect("valid id");

    let result = context.select_from_batch(&batch, &missing);

    assert_eq!(
        result.map(|item| item.compute_system().id().clone()),
        Err(SetupFlowError::ComputeSystemNotFound(missing))
    );
    assert!(context.target().is_none());
}
