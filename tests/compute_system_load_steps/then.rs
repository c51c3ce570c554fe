//! Then steps for compute-system load BDD scenarios.

use super::world::LoadWorld;
use devhome_environments::compute_system::domain::ProviderId;
use rstest_bdd_macros::then;

#[then("{count:usize} batches are delivered")]
fn batches_are_delivered(world: &LoadWorld, count: usize) -> Result<(), eyre::Report> {
    let delivered = world.sink.batches().len();
    if delivered != count {
        return Err(eyre::eyre!("expected {count} batches, found {delivered}"));
    }
    Ok(())
}

#[then(r#"the batch from "{id}" holds {count:usize} identity results"#)]
fn batch_holds_identity_results(
    world: &LoadWorld,
    id: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let provider_id = ProviderId::new(id)?;
    let batch = world
        .sink
        .batches()
        .into_iter()
        .find(|batch| *batch.provider().id() == provider_id)
        .ok_or_else(|| eyre::eyre!("no batch delivered for provider '{provider_id}'"))?;
    if batch.len() != count {
        return Err(eyre::eyre!(
            "expected {count} identity results from '{provider_id}', found {}",
            batch.len()
        ));
    }
    Ok(())
}

#[then(r#"provider "{id}" is reported as "{label}""#)]
fn provider_is_reported_as(world: &LoadWorld, id: String, label: String) -> Result<(), eyre::Report> {
    let provider_id = ProviderId::new(id)?;
    let outcome = world
        .report()?
        .outcome_for(&provider_id)
        .ok_or_else(|| eyre::eyre!("no outcome recorded for provider '{provider_id}'"))?;
    if outcome.as_str() != label {
        return Err(eyre::eyre!(
            "expected '{provider_id}' to be {label}, got {outcome:?}"
        ));
    }
    Ok(())
}

#[then("the load finished before the deadline")]
fn load_finished_before_deadline(world: &LoadWorld) -> Result<(), eyre::Report> {
    if world.report()?.deadline_elapsed() {
        return Err(eyre::eyre!("expected the load to finish before its deadline"));
    }
    Ok(())
}

#[then("the load deadline elapsed")]
fn load_deadline_elapsed(world: &LoadWorld) -> Result<(), eyre::Report> {
    if !world.report()?.deadline_elapsed() {
        return Err(eyre::eyre!("expected the load deadline to elapse"));
    }
    Ok(())
}

#[then("the load reports a discovery error")]
fn load_reports_discovery_error(world: &LoadWorld) -> Result<(), eyre::Report> {
    let report = world.report()?;
    if report.discovery_error().is_none() {
        return Err(eyre::eyre!("expected a discovery error, got {report:?}"));
    }
    if !report.providers().is_empty() {
        return Err(eyre::eyre!("expected no provider outcomes after discovery failure"));
    }
    Ok(())
}
