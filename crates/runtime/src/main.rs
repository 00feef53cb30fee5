//! Demo battle entry point.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use combat_content::{AbilityLoader, RegionLoader, TuningLoader};
use combat_core::{AbilityId, ActorId, ActorTypeId, Position, Unit};
use runtime::{Actor, CasterScript, MeleeScript, Simulation, StaticData, World};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let assets = asset_dir();
    let book = AbilityLoader::load(&assets.join("abilities.ron"))?;
    let regions = RegionLoader::load(&assets.join("regions.ron"))?;
    let tuning = TuningLoader::load(&assets.join("tuning.toml"))?;
    let statics = Arc::new(StaticData::assemble(book, regions, tuning));

    let mut world = World::new();
    // A bruiser and a caster defending their room against two intruders.
    let mut bruiser = Actor::spawn(
        ActorId(1),
        ActorTypeId(19221),
        Position::new(300.0, 0.0, 0.0),
        0,
    );
    bruiser.attack_damage = 12;
    bruiser.max_health = 400;
    bruiser.health = 400;
    world.insert(bruiser);
    world.insert(
        Actor::spawn(
            ActorId(2),
            ActorTypeId(1010),
            Position::new(305.0, 5.0, 0.0),
            0,
        )
        .with_known_abilities([AbilityId(1), AbilityId(2), AbilityId(3)]),
    );
    world.insert(Actor::spawn(
        ActorId(10),
        ActorTypeId(0),
        Position::new(320.0, 0.0, 0.0),
        1,
    ));
    world.insert(Actor::spawn(
        ActorId(11),
        ActorTypeId(0),
        Position::new(322.0, 3.0, 0.0),
        1,
    ));

    let mut sim = Simulation::new(world, Arc::clone(&statics));
    sim.attach_script(ActorId(1), Box::new(MeleeScript::new()));
    sim.attach_script(ActorId(2), Box::new(CasterScript::new(Arc::clone(&statics))));

    let tick_ms = statics.tuning.tick_ms;
    for _ in 0..200 {
        sim.tick(tick_ms);
        if sim.world().actors().filter(|a| a.team == 1 && a.is_alive()).count() == 0 {
            break;
        }
    }

    for actor in sim.world().actors() {
        info!(
            actor = %actor.id,
            team = actor.team,
            health = actor.health,
            power = actor.power,
            "final state"
        );
    }
    info!(ticks = sim.tick_count(), "battle finished");

    Ok(())
}

/// Asset directory: first CLI argument, or the crate's bundled assets.
fn asset_dir() -> PathBuf {
    std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("assets"))
}
