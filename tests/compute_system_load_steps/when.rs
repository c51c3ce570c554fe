//! When steps for compute-system load BDD scenarios.

use std::sync::Arc;

use super::world::{LoadWorld, run_async};
use devhome_environments::compute_system::services::ComputeSystemManager;
use eyre::WrapErr;
use mockable::DefaultClock;
use rstest_bdd_macros::when;

#[when("compute systems are loaded")]
fn compute_systems_are_loaded(world: &mut LoadWorld) -> Result<(), eyre::Report> {
    for pending in &world.providers {
        world
            .directory
            .register(
                Arc::new(pending.provider.clone()),
                pending.developer_ids.clone(),
            )
            .wrap_err("register scenario provider")?;
    }
    let manager = ComputeSystemManager::with_config(
        Arc::clone(&world.directory),
        Arc::new(DefaultClock),
        world.config.clone(),
    );
    let report = run_async(manager.get_compute_systems(Arc::clone(&world.sink)));
    world.report = Some(report);
    Ok(())
}
