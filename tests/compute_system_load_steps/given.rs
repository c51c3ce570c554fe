//! Given steps for compute-system load BDD scenarios.

use std::time::Duration;

use super::world::{LoadWorld, PendingProvider, build_descriptor, parse_identities};
use devhome_environments::compute_system::{
    adapters::memory::{ScriptedComputeSystemProvider, ScriptedResponse},
    domain::DeveloperId,
    ports::{ProviderDirectoryError, ProviderQueryError},
};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"a provider "{id}" with identities "{identities}""#)]
fn a_provider_with_identities(
    world: &mut LoadWorld,
    id: String,
    identities: String,
) -> Result<(), eyre::Report> {
    world.providers.push(PendingProvider {
        provider: ScriptedComputeSystemProvider::new(build_descriptor(&id)?),
        developer_ids: parse_identities(&identities)?,
    });
    Ok(())
}

#[given(r#"provider "{id}" fails for identity "{login}""#)]
fn provider_fails_for_identity(
    world: &mut LoadWorld,
    id: String,
    login: String,
) -> Result<(), eyre::Report> {
    let developer_id = DeveloperId::new(login)?;
    world.provider_mut(&id)?.script(
        &developer_id,
        ScriptedResponse::Error(ProviderQueryError::Unavailable(
            "provider rejected the identity".to_owned(),
        )),
    );
    Ok(())
}

#[given(r#"provider "{id}" answers after {millis:u64} milliseconds"#)]
fn provider_answers_after(world: &mut LoadWorld, id: String, millis: u64) -> Result<(), eyre::Report> {
    world
        .provider_mut(&id)?
        .set_latency(Duration::from_millis(millis));
    Ok(())
}

#[given("the load deadline is {millis:u64} milliseconds")]
fn load_deadline_is(world: &mut LoadWorld, millis: u64) {
    world.config = world.config.clone().with_deadline(Duration::from_millis(millis));
}

#[given("provider discovery fails")]
fn provider_discovery_fails(world: &mut LoadWorld) -> Result<(), eyre::Report> {
    world
        .directory
        .fail_with(ProviderDirectoryError::Activation {
            extension: "HyperVExtension".to_owned(),
            reason: "extension host did not start".to_owned(),
        })
        .wrap_err("prime discovery failure")?;
    Ok(())
}
