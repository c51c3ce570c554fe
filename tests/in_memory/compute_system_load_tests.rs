//! In-memory integration tests for parallel compute-system loads.

use super::helpers::{
    configurable_system, developer, directory, manager, provider, provider_id, register,
};
use devhome_environments::compute_system::{
    adapters::memory::{InMemoryProviderDirectory, RecordingSink, ScriptedResponse},
    domain::ProviderLoadOutcome,
    ports::ProviderQueryError,
};
use rstest::rstest;
use std::sync::Arc;
use std::time::Duration;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn example_load_delivers_healthy_providers_only(directory: Arc<InMemoryProviderDirectory>) {
    let id1 = developer("id1");
    let id2 = developer("id2");
    let id3 = developer("id3");
    let x = provider("X").with_response(
        &id1,
        ScriptedResponse::Systems(vec![configurable_system("x-vm", "X")]),
    );
    let y = provider("Y")
        .with_response(
            &id2,
            ScriptedResponse::Systems(vec![configurable_system("y-vm", "Y")]),
        )
        .with_response(
            &id3,
            ScriptedResponse::Error(ProviderQueryError::InvalidArgument("options".to_owned())),
        );
    register(&directory, &x, vec![id1]);
    register(&directory, &y, vec![id2, id3]);
    let sink = Arc::new(RecordingSink::new());

    let report = manager(&directory).get_compute_systems(Arc::clone(&sink)).await;

    assert_eq!(sink.provider_order(), vec![provider_id("X")]);
    assert!(matches!(
        report.outcome_for(&provider_id("Y")),
        Some(ProviderLoadOutcome::QueryFailed { failed_at: 1, .. })
    ));
    assert!(!report.deadline_elapsed());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn batch_count_never_exceeds_provider_count(directory: Arc<InMemoryProviderDirectory>) {
    for (index, name) in ["a", "b", "c", "d"].into_iter().enumerate() {
        let identities = (0..=index).map(|n| developer(&format!("{name}{n}"))).collect();
        register(&directory, &provider(name), identities);
    }
    let sink = Arc::new(RecordingSink::new());

    let report = manager(&directory).get_compute_systems(Arc::clone(&sink)).await;

    let batches = sink.batches();
    assert_eq!(batches.len(), 4);
    assert_eq!(report.delivered_count(), 4);
    for batch in &batches {
        let provider = batch.provider().id().as_str();
        let expected = ["a", "b", "c", "d"]
            .iter()
            .position(|name| *name == provider)
            .map(|index| index + 1)
            .expect("known provider");
        assert_eq!(batch.len(), expected);
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn slow_provider_does_not_hold_back_fast_one(directory: Arc<InMemoryProviderDirectory>) {
    let slow = provider("slow").with_latency(Duration::from_millis(400));
    let fast = provider("fast").with_latency(Duration::from_millis(10));
    register(&directory, &slow, vec![developer("one")]);
    register(&directory, &fast, vec![developer("two")]);
    let sink = Arc::new(RecordingSink::new());

    let report = manager(&directory).get_compute_systems(Arc::clone(&sink)).await;

    assert_eq!(
        sink.provider_order(),
        vec![provider_id("fast"), provider_id("slow")]
    );
    assert_eq!(report.delivered_count(), 2);
}
